//! Skeet entry point
//!
//! Headless demo host: stands in for the engine collaborators (frame
//! scheduler, collision backend, player input) and logs the session's side
//! effects instead of drawing them. Run with `RUST_LOG=debug` to watch
//! per-entity lifecycle.

use glam::Vec2;
use std::time::{SystemTime, UNIX_EPOCH};

use skeet::consts::{MAX_SUBSTEPS, SIM_DT};
use skeet::sim::{
    ContactPair, Entity, EntityKind, GameEvent, Scene, SceneBounds, Session, TickInput,
};

/// Simulated frame rate of the demo host
const FRAME_DT: f32 = 1.0 / 60.0;
/// Stop after this many full play/over cycles
const DEMO_CYCLES: u64 = 3;
/// Hard cap so a pathological session cannot spin forever
const MAX_FRAMES: u64 = 60 * 600;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let bounds = SceneBounds::new(480.0, 320.0);
    let mut session = Session::new(bounds, seed);
    log::info!("skeet demo starting with seed {seed}");

    let mut accumulator = 0.0f32;
    let mut ticks: u64 = 0;
    for _frame in 0..MAX_FRAMES {
        if session.rounds >= DEMO_CYCLES {
            break;
        }

        accumulator += FRAME_DT;
        let mut fire = autoplay_fire(&session, ticks);

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = TickInput {
                fire,
                contacts: overlap_scan(session.entities()),
            };
            session.advance(&input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;
            ticks += 1;

            // Clear one-shot input after processing
            fire = None;
        }

        for event in session.drain_events() {
            match event {
                GameEvent::Presented { scene, transition } => {
                    log::info!("presented {scene:?} ({transition:?})");
                }
                GameEvent::Sound(effect) => log::debug!("sfx {effect:?}"),
                GameEvent::Music(track) => log::debug!("music {track:?}"),
            }
        }
    }

    log::info!("demo finished after {} full cycles", session.rounds);
}

/// Stand-in for the collision backend: naive AABB overlap scan over the live
/// set, deduplicated per step, honoring each body's collides-with mask.
fn overlap_scan(entities: &[Entity]) -> Vec<ContactPair> {
    let mut pairs = Vec::new();
    for (i, a) in entities.iter().enumerate() {
        let ca = a.collider();
        for b in &entities[i + 1..] {
            if ca.collides_with != b.kind {
                continue;
            }
            let delta = (a.pos() - b.pos()).abs();
            let reach = ca.half_extents + b.collider().half_extents;
            if delta.x < reach.x && delta.y < reach.y {
                pairs.push(ContactPair::new(a.id, b.id));
            }
        }
    }
    pairs
}

/// Stand-in for the player: every few frames aim at the most urgent target,
/// leading it by the shot's flight time to its predicted position.
fn autoplay_fire(session: &Session, ticks: u64) -> Option<Vec2> {
    if ticks % 42 != 0 {
        return None;
    }
    let Scene::Play(play) = &session.scene else {
        return None;
    };

    let target = play
        .entities
        .iter()
        .filter(|e| e.kind == EntityKind::Target)
        .min_by(|a, b| {
            a.pos()
                .x
                .partial_cmp(&b.pos().x)
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;

    let shooter = play.shooter_pos();
    let shot_speed = skeet::consts::SHOT_RANGE / skeet::consts::SHOT_FLIGHT_SECS;
    let eta = (target.pos() - shooter).length() / shot_speed;

    // Lead the target to where it will be when the shot arrives
    Some(target.pos() + target.motion.velocity() * eta)
}
