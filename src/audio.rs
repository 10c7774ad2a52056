//! Sound cue vocabulary
//!
//! The sim names cues; synthesis/playback belongs to the host's audio
//! backend. Cues are fire-and-forget: no completion callback, no error path.

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A shot leaves the shooter
    Launch,
}

/// Looping music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    /// Loops for the lifetime of the play scene
    Background,
}
