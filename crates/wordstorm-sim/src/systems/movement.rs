//! Horizontal flight integration and visibility transitions.
//!
//! Every live enemy advances `x` by its signed speed each tick, then gets
//! re-indexed in the spatial grid. Visibility only moves forward:
//! Approaching -> Visible (any part on screen) -> Active (fully on
//! screen). `was_visible` latches so escape penalties only ever apply to
//! enemies the player actually saw.

use hecs::World;

use wordstorm_core::components::{Motion, VisState};
use wordstorm_core::constants::{DT, ENEMY_WIDTH};
use wordstorm_core::enums::Visibility;
use wordstorm_core::types::{Position, ScreenBounds};

use crate::grid::SpatialGrid;

pub fn run(world: &mut World, grid: &mut SpatialGrid, bounds: ScreenBounds) {
    for (entity, (pos, motion, vis)) in
        world.query_mut::<(&mut Position, &Motion, &mut VisState)>()
    {
        pos.x += motion.direction.sign() * motion.speed * DT;

        let on_screen = pos.x + ENEMY_WIDTH > 0.0 && pos.x < bounds.width;
        let fully_on_screen = pos.x >= 0.0 && pos.x + ENEMY_WIDTH <= bounds.width;

        match vis.visibility {
            Visibility::Approaching if on_screen => {
                vis.visibility = Visibility::Visible;
                vis.was_visible = true;
            }
            Visibility::Visible if fully_on_screen => {
                vis.visibility = Visibility::Active;
            }
            _ => {}
        }

        grid.update(entity, *pos);
    }
}
