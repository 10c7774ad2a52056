//! Skeet - a minimal single-screen target-shooting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, contact resolution,
//!   the play/game-over scene cycle)
//! - `audio`: Sound cue vocabulary the sim emits for the host's audio backend
//!
//! Rendering, audio playback, input capture, and collision detection belong
//! to the host. It drives [`sim::Session`] on a fixed timestep, feeds overlap
//! pairs in through [`sim::TickInput`], and drains [`sim::GameEvent`]s out.

pub mod audio;
pub mod sim;

pub use sim::{GameEvent, Session, TickInput};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz, matching the host frame scheduler)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Seconds between target spawns
    pub const SPAWN_INTERVAL_SECS: f32 = 1.5;
    /// Fastest full-scene traversal a target can roll
    pub const TRAVERSAL_MIN_SECS: f32 = 2.0;
    /// Slowest full-scene traversal a target can roll
    pub const TRAVERSAL_MAX_SECS: f32 = 4.0;

    /// Target sprite half extents
    pub const TARGET_HALF_WIDTH: f32 = 16.0;
    pub const TARGET_HALF_HEIGHT: f32 = 16.0;
    /// Shot sprite half extent (square collision box)
    pub const SHOT_HALF_EXTENT: f32 = 8.0;

    /// Shot flight time from shooter to its overshoot destination
    pub const SHOT_FLIGHT_SECS: f32 = 2.0;
    /// Shot travel distance; far enough to exit the scene at any sane aspect ratio
    pub const SHOT_RANGE: f32 = 1000.0;

    /// Downed-target tally that must be exceeded to win the round
    pub const WIN_THRESHOLD: u32 = 20;
    /// End-card display time before a fresh round starts
    pub const GAME_OVER_SECS: f32 = 3.0;
    /// Scene-swap flip effect duration
    pub const FLIP_SECS: f32 = 0.5;

    /// Shooter anchor as fractions of the scene size
    pub const SHOOTER_X_FRAC: f32 = 0.1;
    pub const SHOOTER_Y_FRAC: f32 = 0.5;
}

/// Convert a duration in seconds to whole simulation ticks
#[inline]
pub fn secs_to_ticks(secs: f32) -> u32 {
    (secs / consts::SIM_DT).round() as u32
}
