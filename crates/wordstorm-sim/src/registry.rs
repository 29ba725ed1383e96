//! Enemy registry — the active set plus a per-species recycling pool.
//!
//! Owns which enemies are live and answers the two targeting queries:
//! nearest to screen center (default target for a fresh group) and most
//! urgent (closest to its exit edge, about to cost health). All lookups
//! against an empty or stale set return `None`, never raise.

use std::collections::HashMap;

use hecs::{Entity, World};

use wordstorm_core::components::{Motion, Skin, VisState, Word};
use wordstorm_core::enums::{MoveDirection, Species};
use wordstorm_core::types::{Position, ScreenBounds};

use crate::grid::SpatialGrid;
use crate::world_setup;

/// Active-enemy bookkeeping and object pool.
#[derive(Debug, Default)]
pub struct EnemyRegistry {
    /// Live enemies, in activation order. Order is the cycle-target order
    /// and the tie-break for urgency queries.
    active: Vec<Entity>,
    /// Released enemies awaiting reuse, per species.
    free: HashMap<Species, Vec<Entity>>,
    /// Pool ceiling per species; beyond it released enemies are despawned.
    ceiling: usize,
}

impl EnemyRegistry {
    pub fn new(ceiling: usize) -> Self {
        Self {
            active: Vec::new(),
            free: HashMap::new(),
            ceiling,
        }
    }

    /// Take a pooled enemy of the given species, or allocate a fresh one.
    /// The caller must configure word/position before [`activate`].
    ///
    /// [`activate`]: EnemyRegistry::activate
    pub fn acquire(&mut self, world: &mut World, species: Species) -> Entity {
        match self.free.get_mut(&species).and_then(Vec::pop) {
            Some(entity) => entity,
            None => world_setup::spawn_pooled(world, species),
        }
    }

    /// Make an acquired enemy live: join the active set and the grid.
    pub fn activate(&mut self, entity: Entity, grid: &mut SpatialGrid, pos: Position) {
        if !self.active.contains(&entity) {
            self.active.push(entity);
        }
        grid.update(entity, pos);
    }

    /// Retire an enemy: leave the active set and grid, clear its word and
    /// progress, and return it to the pool (or despawn past the ceiling).
    ///
    /// Releasing a stale handle is a no-op returning `None`.
    pub fn release(
        &mut self,
        world: &mut World,
        entity: Entity,
        grid: &mut SpatialGrid,
    ) -> Option<Species> {
        let index = self.active.iter().position(|e| *e == entity)?;
        let _ = self.active.remove(index);
        grid.remove(entity);

        let species = world.get::<&Skin>(entity).ok()?.0;

        if let Ok(mut word) = world.get::<&mut Word>(entity) {
            word.text.clear();
        }
        if let Ok(mut vis) = world.get::<&mut VisState>(entity) {
            *vis = VisState::default();
        }
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            *pos = Position::new(f32::MIN, f32::MIN);
        }

        let pool = self.free.entry(species).or_default();
        if pool.len() < self.ceiling {
            pool.push(entity);
        } else {
            let _ = world.despawn(entity);
        }
        Some(species)
    }

    /// The live enemy closest to the screen center.
    pub fn find_nearest_to_center(&self, world: &World, bounds: ScreenBounds) -> Option<Entity> {
        let center = bounds.center();
        self.min_by_metric(world, |pos, _motion| pos.distance_to(&center))
    }

    /// The live enemy with the least distance left to its exit edge.
    /// Ties go to the earlier entry in activation order.
    pub fn find_most_urgent(&self, world: &World, bounds: ScreenBounds) -> Option<Entity> {
        self.min_by_metric(world, |pos, motion| match motion.direction {
            MoveDirection::LeftToRight => bounds.width - pos.x,
            MoveDirection::RightToLeft => pos.x,
        })
    }

    fn min_by_metric(
        &self,
        world: &World,
        metric: impl Fn(&Position, &Motion) -> f32,
    ) -> Option<Entity> {
        let mut best: Option<(Entity, f32)> = None;
        for &entity in &self.active {
            let Ok(pos) = world.get::<&Position>(entity) else {
                continue;
            };
            let Ok(motion) = world.get::<&Motion>(entity) else {
                continue;
            };
            let value = metric(&pos, &motion);
            // Strict less-than keeps the first encountered on exact ties.
            if best.map_or(true, |(_, b)| value < b) {
                best = Some((entity, value));
            }
        }
        best.map(|(entity, _)| entity)
    }

    /// Words currently assigned to live enemies, plus the live long-word count.
    pub fn active_words(&self, world: &World, long_len: usize) -> (Vec<String>, usize) {
        let mut words = Vec::with_capacity(self.active.len());
        let mut long_count = 0;
        for &entity in &self.active {
            if let Ok(word) = world.get::<&Word>(entity) {
                if word.text.len() >= long_len {
                    long_count += 1;
                }
                words.push(word.text.clone());
            }
        }
        (words, long_count)
    }

    pub fn active(&self) -> &[Entity] {
        &self.active
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.active.contains(&entity)
    }

    pub fn pooled_count(&self, species: Species) -> usize {
        self.free.get(&species).map_or(0, Vec::len)
    }

    /// Forget everything (game reset). Entities themselves are despawned
    /// by the engine clearing the world.
    pub fn clear(&mut self) {
        self.active.clear();
        self.free.clear();
    }
}
