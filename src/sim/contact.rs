//! Contact classification and resolution
//!
//! The host's collision backend reports overlap pairs; the scene decides
//! what they mean. Classification is a pure function over the pair's kinds,
//! so the backend can be handed the rule without any back-reference into the
//! scene.

use serde::{Deserialize, Serialize};

use super::state::{EntityKind, PlayState};

/// An unordered overlap notification from the collision backend. Ephemeral:
/// valid only for the step it was delivered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPair {
    pub a: u32,
    pub b: u32,
}

impl ContactPair {
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }
}

/// Roles of a meaningful pair, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionRoles {
    pub target: u32,
    pub shot: u32,
}

/// Classify an unordered pair of (id, kind). The pair is canonicalized by
/// the `EntityKind` total order; only a Target/Shot pairing has any game
/// effect, everything else (like-kind pairs included) classifies to `None`.
pub fn classify(a: (u32, EntityKind), b: (u32, EntityKind)) -> Option<CollisionRoles> {
    let (first, second) = if a.1 <= b.1 { (a, b) } else { (b, a) };
    match (first.1, second.1) {
        (EntityKind::Target, EntityKind::Shot) => Some(CollisionRoles {
            target: first.0,
            shot: second.0,
        }),
        _ => None,
    }
}

/// Apply one contact notification to the scene. Stale ids (already removed
/// by an earlier pair this step) and meaningless pairings resolve nothing;
/// a resolved pair removes both entities and bumps the tally by exactly one.
/// Returns true when the pair resolved.
pub fn resolve(state: &mut PlayState, pair: ContactPair) -> bool {
    let (Some(a), Some(b)) = (state.entity(pair.a), state.entity(pair.b)) else {
        return false;
    };

    let Some(roles) = classify((a.id, a.kind), (b.id, b.kind)) else {
        return false;
    };

    log::debug!("shot {} downed target {}", roles.shot, roles.target);
    state.remove(roles.target);
    state.remove(roles.shot);
    state.downed += 1;
    true
}
