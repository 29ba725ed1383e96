//! Fixed-cell spatial hash grid for visibility culling.
//!
//! Maps packed integer cell coordinates to buckets of entities so that
//! per-frame "what's roughly on screen" queries avoid scanning every live
//! entity. Entities outside the padded screen bounds are simply not
//! indexed; that is the culling behavior, not an error.

use std::collections::HashMap;

use hecs::Entity;

use wordstorm_core::types::{Position, Rect, ScreenBounds};

/// Pack a cell coordinate pair into a single 64-bit bucket key.
fn cell_key(cell_x: i32, cell_y: i32) -> u64 {
    ((cell_x as u32 as u64) << 32) | (cell_y as u32 as u64)
}

/// Screen-space spatial index over enemy entities.
///
/// Invariant: an indexed entity appears in exactly one bucket, the one
/// matching its last-updated position. The back-map enforces this by
/// making every update a remove-then-maybe-insert.
#[derive(Debug)]
pub struct SpatialGrid {
    cell_size: f32,
    bounds: ScreenBounds,
    padding: f32,
    buckets: HashMap<u64, Vec<Entity>>,
    /// Which bucket each indexed entity currently occupies.
    occupancy: HashMap<Entity, u64>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32, bounds: ScreenBounds, padding: f32) -> Self {
        Self {
            cell_size,
            bounds,
            padding,
            buckets: HashMap::new(),
            occupancy: HashMap::new(),
        }
    }

    fn cell_of(&self, pos: Position) -> u64 {
        let cx = (pos.x / self.cell_size).floor() as i32;
        let cy = (pos.y / self.cell_size).floor() as i32;
        cell_key(cx, cy)
    }

    fn in_padded_bounds(&self, pos: Position) -> bool {
        pos.x >= -self.padding
            && pos.x <= self.bounds.width + self.padding
            && pos.y >= -self.padding
            && pos.y <= self.bounds.height + self.padding
    }

    /// Re-index an entity at its current position.
    ///
    /// Safe to call every frame for every entity: the entity is first
    /// removed from its old bucket, then inserted only if the new position
    /// lies within the padded bounds. Out-of-bounds entities are evicted
    /// lazily here rather than on movement.
    pub fn update(&mut self, entity: Entity, pos: Position) {
        self.remove(entity);
        if self.in_padded_bounds(pos) {
            let key = self.cell_of(pos);
            self.buckets.entry(key).or_default().push(entity);
            let _ = self.occupancy.insert(entity, key);
        }
    }

    /// Drop an entity from the index entirely (used on despawn/release).
    pub fn remove(&mut self, entity: Entity) {
        if let Some(key) = self.occupancy.remove(&entity) {
            if let Some(bucket) = self.buckets.get_mut(&key) {
                bucket.retain(|e| *e != entity);
                if bucket.is_empty() {
                    let _ = self.buckets.remove(&key);
                }
            }
        }
    }

    /// Entities whose bucket overlaps `rect`, each exactly once.
    pub fn query(&self, rect: Rect) -> Vec<Entity> {
        let min_cx = (rect.min_x / self.cell_size).floor() as i32;
        let max_cx = (rect.max_x / self.cell_size).floor() as i32;
        let min_cy = (rect.min_y / self.cell_size).floor() as i32;
        let max_cy = (rect.max_y / self.cell_size).floor() as i32;

        let mut result = Vec::new();
        for cx in min_cx..=max_cx {
            for cy in min_cy..=max_cy {
                if let Some(bucket) = self.buckets.get(&cell_key(cx, cy)) {
                    // One bucket per entity, so unioning buckets cannot
                    // repeat an entity.
                    result.extend_from_slice(bucket);
                }
            }
        }
        result
    }

    /// Shorthand for the padded full-screen query: everything indexed,
    /// i.e. everything within one padding margin of the screen.
    pub fn query_visible(&self) -> Vec<Entity> {
        self.query(Rect::new(
            -self.padding,
            -self.padding,
            self.bounds.width + self.padding,
            self.bounds.height + self.padding,
        ))
    }

    /// Drop every bucket (game reset).
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.occupancy.clear();
    }

    /// Number of indexed entities.
    pub fn len(&self) -> usize {
        self.occupancy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }
}
