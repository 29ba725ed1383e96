//! Escape detection: enemies that fully cross their exit edge.
//!
//! Only enemies that were ever on screen count — an enemy culled or
//! reconfigured while still approaching costs nothing. Escapees are
//! released back to the pool; the engine applies the health penalty and
//! emits the event.

use hecs::{Entity, World};

use wordstorm_core::components::{Motion, VisState, Word};
use wordstorm_core::constants::ENEMY_WIDTH;
use wordstorm_core::enums::MoveDirection;
use wordstorm_core::types::{Position, ScreenBounds};

use crate::grid::SpatialGrid;
use crate::registry::EnemyRegistry;

/// Detect escapees, release them, and return their (handle, word) pairs.
pub fn run(
    world: &mut World,
    registry: &mut EnemyRegistry,
    grid: &mut SpatialGrid,
    bounds: ScreenBounds,
) -> Vec<(Entity, String)> {
    let mut escaped = Vec::new();
    for &entity in registry.active() {
        let Ok(pos) = world.get::<&Position>(entity) else {
            continue;
        };
        let Ok(motion) = world.get::<&Motion>(entity) else {
            continue;
        };
        let Ok(vis) = world.get::<&VisState>(entity) else {
            continue;
        };
        if !vis.was_visible {
            continue;
        }
        let crossed = match motion.direction {
            MoveDirection::LeftToRight => pos.x > bounds.width,
            MoveDirection::RightToLeft => pos.x + ENEMY_WIDTH < 0.0,
        };
        if crossed {
            let word = world
                .get::<&Word>(entity)
                .map(|w| w.text.clone())
                .unwrap_or_default();
            escaped.push((entity, word));
        }
    }

    for (entity, _) in &escaped {
        let _ = registry.release(world, *entity, grid);
    }
    escaped
}
