//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The host feeds each step's external world in through [`TickInput`] (fire
//! gesture, overlap pairs from its collision backend) and drains
//! [`GameEvent`]s back out of the [`Session`].

pub mod contact;
pub mod launch;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;

pub use contact::{CollisionRoles, ContactPair, classify};
pub use launch::launch_shot;
pub use session::{OverState, Scene, Session};
pub use spawn::{spawn_interval_ticks, spawn_target};
pub use state::{
    Collider, Entity, EntityKind, GameEvent, MotionPlan, PlayState, RngState, SceneBounds,
    SceneKind, Transition,
};
pub use tick::{Outcome, TickInput, tick};
