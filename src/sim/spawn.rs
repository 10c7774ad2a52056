//! Target spawner
//!
//! Every spawn interval a target appears just past the right edge at a
//! random height and scripts a straight leftward traversal across the scene.

use glam::Vec2;
use rand::Rng;

use super::state::{Entity, EntityKind, MotionPlan, PlayState};
use crate::consts::*;
use crate::secs_to_ticks;

/// Ticks between spawns
pub fn spawn_interval_ticks() -> u32 {
    secs_to_ticks(SPAWN_INTERVAL_SECS)
}

/// Spawn one target off the right edge. Returns its id.
///
/// The height lands inside the sprite-safe band so the target is fully on
/// screen once it enters; the traversal duration is rolled per target, so
/// each crosses at its own speed.
pub fn spawn_target(state: &mut PlayState) -> u32 {
    let mut rng = state.rng_state.next_rng();
    let half = EntityKind::Target.half_extents();

    let (y_min, y_max) = (half.y, state.bounds.height - half.y);
    // A scene shorter than the sprite collapses to the midline
    let y = if y_min < y_max {
        rng.random_range(y_min..=y_max)
    } else {
        state.bounds.height * 0.5
    };

    let duration = rng.random_range(TRAVERSAL_MIN_SECS..=TRAVERSAL_MAX_SECS);

    let from = Vec2::new(state.bounds.width + half.x, y);
    let to = Vec2::new(-half.x, y);

    let id = state.next_entity_id();
    log::debug!("target {id} enters at y={y:.1}, traversal {duration:.2}s");
    state.entities.push(Entity {
        id,
        kind: EntityKind::Target,
        motion: MotionPlan::new(from, to, duration),
    });
    id
}
