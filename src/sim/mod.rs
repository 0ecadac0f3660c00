//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` per frame, single-threaded
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies; those receive `GameEvent`s

pub mod body;
pub mod cadence;
pub mod collision;
pub mod input;
pub mod physics;
pub mod player;
pub mod score;
pub mod session;
pub mod spawner;
pub mod state;
pub mod tick;

pub use body::{Body, Hitbox};
pub use cadence::Cadence;
pub use collision::{handle_contact, on_obstacle_hit, on_trigger_overlap};
pub use input::{Controls, KeyEdges, TickInput, autopilot};
pub use physics::{ArcadePhysics, Contact};
pub use player::{Player, Pose, Posture};
pub use score::format_score;
pub use session::restart;
pub use state::{
    Cloud, Cue, GameEvent, GameState, Obstacle, ObstacleKind, Panel, SessionPhase, StartTrigger,
    TriggerPhase,
};
pub use tick::tick;
