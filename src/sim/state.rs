//! Core simulation types and play-scene state
//!
//! Everything here is deterministic and serializable so a session can be
//! snapshotted and resumed mid-round.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::audio::{MusicTrack, SoundEffect};
use crate::consts::*;

/// Entity category. The derived total order (Target < Shot) is the canonical
/// pair order used when classifying contacts; it is defined here, once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    /// Scrolls in from the right; must be downed before it exits
    Target,
    /// Launched by the player toward a fire gesture
    Shot,
}

impl EntityKind {
    /// The one kind this kind produces meaningful contacts with
    pub fn collides_with(self) -> EntityKind {
        match self {
            EntityKind::Target => EntityKind::Shot,
            EntityKind::Shot => EntityKind::Target,
        }
    }

    /// Collision half extents of this kind's sprite
    pub fn half_extents(self) -> Vec2 {
        match self {
            EntityKind::Target => Vec2::new(TARGET_HALF_WIDTH, TARGET_HALF_HEIGHT),
            EntityKind::Shot => Vec2::splat(SHOT_HALF_EXTENT),
        }
    }
}

/// Scripted constant-velocity motion from a start point to a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionPlan {
    pub from: Vec2,
    pub to: Vec2,
    /// Total traversal time (seconds)
    pub duration: f32,
    /// Time spent so far (seconds)
    pub elapsed: f32,
}

impl MotionPlan {
    pub fn new(from: Vec2, to: Vec2, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt`; true once the destination has been reached
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.elapsed >= self.duration
    }

    /// Interpolated position for the current elapsed time
    pub fn position(&self) -> Vec2 {
        if self.duration <= 0.0 {
            return self.to;
        }
        self.from.lerp(self.to, (self.elapsed / self.duration).clamp(0.0, 1.0))
    }

    /// Constant velocity of the traversal (units per second)
    pub fn velocity(&self) -> Vec2 {
        if self.duration <= 0.0 {
            return Vec2::ZERO;
        }
        (self.to - self.from) / self.duration
    }
}

/// A live game object. Owned by the play scene that spawned it; removed on
/// traversal completion or contact resolution, never referenced afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub motion: MotionPlan,
}

impl Entity {
    /// Current position along the scripted traversal
    pub fn pos(&self) -> Vec2 {
        self.motion.position()
    }

    /// Registration data for the host's collision backend
    pub fn collider(&self) -> Collider {
        Collider {
            half_extents: self.kind.half_extents(),
            category: self.kind,
            collides_with: self.kind.collides_with(),
            solid: false,
        }
    }
}

/// Collision registration data. Non-solid bodies report overlaps but are
/// never deflected by them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub half_extents: Vec2,
    pub category: EntityKind,
    pub collides_with: EntityKind,
    pub solid: bool,
}

/// Scene dimensions in scene coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBounds {
    pub width: f32,
    pub height: f32,
}

impl SceneBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Fixed shooter anchor: left edge, vertical center
    pub fn shooter_pos(&self) -> Vec2 {
        Vec2::new(self.width * SHOOTER_X_FRAC, self.height * SHOOTER_Y_FRAC)
    }
}

/// RNG state wrapper for serialization
///
/// Each draw gets a fresh PCG stream derived from (seed, stream counter), so
/// snapshots stay exact without serializing generator internals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// RNG for the next draw; advances the stream counter
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Which scene the host should be displaying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneKind {
    Play,
    Over { won: bool },
}

/// Scene-swap effect descriptor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transition {
    /// Horizontal flip over [`crate::consts::FLIP_SECS`]
    Flip,
}

/// Side effects for the host to apply after a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Swap the displayed scene
    Presented {
        scene: SceneKind,
        transition: Transition,
    },
    /// Fire-and-forget sound cue
    Sound(SoundEffect),
    /// Start a looping music track
    Music(MusicTrack),
}

/// Play-scene state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayState {
    /// Round seed for reproducibility
    pub seed: u64,
    /// RNG state for spawn randomness
    pub rng_state: RngState,
    /// Scene dimensions this round was built for
    pub bounds: SceneBounds,
    /// Targets downed this round (monotonic)
    pub downed: u32,
    /// Live entities (unordered)
    pub entities: Vec<Entity>,
    /// Ticks until the next target spawn
    pub spawn_ticks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl PlayState {
    /// Fresh round: zero tally, empty entity set, spawn due on the first tick
    pub fn new(bounds: SceneBounds, seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            bounds,
            downed: 0,
            entities: Vec::new(),
            spawn_ticks: 0,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Look up a live entity by id
    pub fn entity(&self, id: u32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Drop an entity from the live set
    pub fn remove(&mut self, id: u32) {
        self.entities.retain(|e| e.id != id);
    }

    pub fn shooter_pos(&self) -> Vec2 {
        self.bounds.shooter_pos()
    }
}
