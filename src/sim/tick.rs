//! Play-scene step function
//!
//! Order within a step matters: every pending contact resolves before motion
//! completion is checked, so a tally increment that crosses the win
//! threshold beats a competing loss from the same step. Once an outcome is
//! decided the scene is torn down and nothing else in the step may touch it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::contact::{self, ContactPair};
use super::launch::launch_shot;
use super::spawn::{spawn_interval_ticks, spawn_target};
use super::state::{EntityKind, GameEvent, PlayState};
use crate::audio::SoundEffect;
use crate::consts::*;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The tally passed the win threshold
    Won,
    /// A target crossed the whole scene unresolved
    Lost,
}

/// Host input for a single step (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Fire gesture location in scene coordinates
    pub fire: Option<Vec2>,
    /// Overlap pairs from the collision backend, deduplicated per step
    pub contacts: Vec<ContactPair>,
}

/// Advance the play scene by one fixed timestep. `Some(outcome)` means the
/// scene is done and must be replaced; its state is not touched again.
pub fn tick(
    state: &mut PlayState,
    input: &TickInput,
    dt: f32,
    events: &mut Vec<GameEvent>,
) -> Option<Outcome> {
    state.time_ticks += 1;

    // Resolve every pending contact. The win check runs after each tally
    // increment, before the next queued pair.
    for pair in &input.contacts {
        contact::resolve(state, *pair);
        if state.downed > WIN_THRESHOLD {
            return Some(Outcome::Won);
        }
    }

    // Advance scripted motion; completion fires exactly once per entity.
    let mut lost = false;
    let mut completed: Vec<u32> = Vec::new();
    for entity in &mut state.entities {
        if entity.motion.advance(dt) {
            completed.push(entity.id);
            if entity.kind == EntityKind::Target {
                // An unresolved target made it across
                lost = true;
            }
        }
    }
    for id in completed {
        state.remove(id);
    }
    if lost {
        return Some(Outcome::Lost);
    }

    // Spawn cadence. The counter starts at zero, so the first target arrives
    // on the scene's first tick.
    if state.spawn_ticks == 0 {
        spawn_target(state);
        state.spawn_ticks = spawn_interval_ticks();
    }
    state.spawn_ticks -= 1;

    // Fire gesture, if any
    if let Some(point) = input.fire {
        if launch_shot(state, point).is_some() {
            events.push(GameEvent::Sound(SoundEffect::Launch));
        }
    }

    None
}
