//! Entity spawn factories.
//!
//! Creates pooled enemy entities with their full component bundle and
//! derives the off-screen start position for each travel direction.

use hecs::{Entity, World};

use wordstorm_core::components::{Enemy, Motion, Skin, VisState, Word};
use wordstorm_core::constants::ENEMY_WIDTH;
use wordstorm_core::enums::{MoveDirection, Species};
use wordstorm_core::types::{Position, ScreenBounds};

/// Spawn a dormant pooled enemy. It carries the full component bundle but
/// no word, sits off-screen, and is not in the registry's active set.
pub fn spawn_pooled(world: &mut World, species: Species) -> Entity {
    world.spawn((
        Enemy,
        Skin(species),
        Word::default(),
        Position::new(f32::MIN, f32::MIN),
        Motion {
            direction: MoveDirection::default(),
            speed: 0.0,
        },
        VisState::default(),
    ))
}

/// Start x just off the entry edge, one sprite width out.
pub fn start_x(direction: MoveDirection, bounds: ScreenBounds) -> f32 {
    match direction {
        MoveDirection::LeftToRight => -ENEMY_WIDTH,
        MoveDirection::RightToLeft => bounds.width + ENEMY_WIDTH,
    }
}

/// Configure an acquired enemy for a live run across the screen.
/// Returns `false` if the handle is stale (components missing).
pub fn configure_live(
    world: &mut World,
    entity: Entity,
    word_text: String,
    y: f32,
    speed: f32,
    direction: MoveDirection,
    bounds: ScreenBounds,
) -> bool {
    let pos = Position::new(start_x(direction, bounds), y);
    let ok = world.get::<&mut Word>(entity).map(|mut w| w.text = word_text);
    if ok.is_err() {
        return false;
    }
    if let Ok(mut p) = world.get::<&mut Position>(entity) {
        *p = pos;
    }
    if let Ok(mut m) = world.get::<&mut Motion>(entity) {
        m.direction = direction;
        m.speed = speed;
    }
    if let Ok(mut v) = world.get::<&mut VisState>(entity) {
        *v = VisState::default();
    }
    true
}
