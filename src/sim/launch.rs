//! Shot launcher
//!
//! Converts a discrete fire gesture into a shot scripted from the shooter
//! toward (and well past) the gesture point.

use glam::Vec2;

use super::state::{Entity, EntityKind, MotionPlan, PlayState};
use crate::consts::*;

/// Try to launch a shot toward `point`. The shooter only fires toward the
/// target side: a gesture at or behind the shooter is ignored. Returns the
/// new entity's id when a shot was created.
pub fn launch_shot(state: &mut PlayState, point: Vec2) -> Option<u32> {
    let origin = state.shooter_pos();
    let offset = point - origin;

    if offset.x <= 0.0 {
        return None;
    }

    // Overshoot far enough to guarantee an off-screen exit
    let dest = origin + offset.normalize() * SHOT_RANGE;

    let id = state.next_entity_id();
    log::debug!("shot {id} toward ({:.1}, {:.1})", dest.x, dest.y);
    state.entities.push(Entity {
        id,
        kind: EntityKind::Shot,
        motion: MotionPlan::new(origin, dest, SHOT_FLIGHT_SECS),
    });
    Some(id)
}
