//! Dino Dash - A side-scrolling runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, obstacles, session state machine)
//! - `config`: Data-driven game tuning
//! - `highscores`: Persistent leaderboard
//! - `error`: Startup/persistence errors

pub mod config;
pub mod error;
pub mod highscores;
pub mod sim;

pub use config::{ObstacleCatalog, RunnerConfig};
pub use error::{Error, Result};
pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Height of the player's sprite frame; hitboxes are offset from its top edge
    pub const PLAYER_FRAME_HEIGHT: f32 = 94.0;

    /// Standing hitbox size and offset within the sprite frame
    pub const STANDING_BOX_SIZE: Vec2 = Vec2::new(44.0, 92.0);
    pub const STANDING_BOX_OFFSET: Vec2 = Vec2::new(20.0, 0.0);

    /// Crouching hitbox size and offset (feet stay on the same line)
    pub const CROUCH_BOX_SIZE: Vec2 = Vec2::new(44.0, 58.0);
    pub const CROUCH_BOX_OFFSET: Vec2 = Vec2::new(60.0, 34.0);

    /// Boxes this short or shorter play the crouch pose
    pub const CROUCH_HEIGHT_THRESHOLD: f32 = 58.0;

    /// Invisible start sentinel (untextured sprite, 32x32)
    pub const TRIGGER_SIZE: Vec2 = Vec2::new(32.0, 32.0);
    /// Where the sentinel is parked once the reveal has started
    pub const TRIGGER_PARKED_POS: Vec2 = Vec2::new(9999.0, 9999.0);

    /// Decorative cloud sprite size
    pub const CLOUD_SIZE: Vec2 = Vec2::new(92.0, 27.0);
}

/// Convert a frame delta in seconds to whole microseconds
#[inline]
pub fn micros(dt: f32) -> u64 {
    if dt <= 0.0 {
        return 0;
    }
    (dt as f64 * 1_000_000.0).round() as u64
}

/// Convert milliseconds to microseconds
#[inline]
pub fn ms_to_micros(ms: u32) -> u64 {
    ms as u64 * 1_000
}
