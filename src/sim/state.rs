//! Game state and core simulation types
//!
//! One `GameState` lives for the whole process and is reset, never rebuilt,
//! when a run restarts.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, Hitbox};
use super::cadence::Cadence;
use super::physics::ArcadePhysics;
use super::player::{Player, Pose};
use crate::config::RunnerConfig;
use crate::consts::*;
use crate::error::Result;
use crate::ms_to_micros;

/// Session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// World static, waiting for the player to touch the start trigger twice
    AwaitingStart,
    /// Ground rolling out under the player
    Revealing,
    /// Active gameplay
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

/// Hazard variants (1-based, matching the asset names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Cactus(u32),
    Bird(u32),
}

impl ObstacleKind {
    pub fn is_flying(&self) -> bool {
        matches!(self, ObstacleKind::Bird(_))
    }

    /// Texture key of the variant
    pub fn key(&self) -> String {
        match self {
            ObstacleKind::Cactus(n) => format!("obstacle-{n}"),
            ObstacleKind::Bird(n) => format!("enemy-bird-{n}"),
        }
    }
}

/// A hazard scrolling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Bottom-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Body for Obstacle {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn hitbox(&self) -> Hitbox {
        Hitbox::from_bottom_left(self.pos, self.size)
    }
}

/// Decorative cloud; no collisions
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cloud {
    /// Left edge and vertical center
    pub pos: Vec2,
}

impl Cloud {
    pub fn right(&self) -> f32 {
        self.pos.x + CLOUD_SIZE.x
    }
}

/// Where the start sentinel currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerPhase {
    /// Above the ground, waiting for the first jump to reach it
    Upper,
    /// Dropped to ground level, waiting for the player to land on it
    Ground,
    /// Moved off-stage for the rest of the session
    Parked,
}

/// Invisible sentinel gating the start of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartTrigger {
    /// Bottom-left corner
    pub pos: Vec2,
    pub phase: TriggerPhase,
}

impl StartTrigger {
    pub fn new(start_y: f32) -> Self {
        Self {
            pos: Vec2::new(0.0, start_y),
            phase: TriggerPhase::Upper,
        }
    }

    pub fn is_parked(&self) -> bool {
        self.phase == TriggerPhase::Parked
    }
}

impl Body for StartTrigger {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn hitbox(&self) -> Hitbox {
        Hitbox::from_bottom_left(self.pos, TRIGGER_SIZE)
    }
}

/// Fire-and-forget audio cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    Jump,
    Hit,
    /// Score milestone reached
    Reach,
}

/// UI elements the core shows and hides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Score,
    GameOver,
    Clouds,
}

/// Intents for the render/audio collaborators, drained by the host each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Pose(Pose),
    /// Freeze every animation in place
    AnimationsPaused,
    AnimationsResumed,
    Sound(Cue),
    Show(Panel),
    Hide(Panel),
    ObstacleSpawned { id: u32, kind: ObstacleKind },
    /// Start the looping flight animation of a bird
    ObstacleFlap { id: u32 },
    ObstacleRemoved { id: u32 },
    /// New best score for this process
    HighScore(u32),
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: RunnerConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: SessionPhase,
    pub player: Player,
    /// Live hazards in spawn order
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    pub trigger: StartTrigger,
    pub physics: ArcadePhysics,

    pub score: u32,
    /// Score of the run that just ended
    pub last_score: u32,
    pub best_score: u32,
    pub spawn_timer: Cadence,
    pub score_timer: Cadence,
    pub base_speed: f32,
    pub speed_modifier: u32,

    /// Visible ground width; grows during the reveal
    pub ground_width: f32,
    /// Ground texture offset
    pub ground_scroll: f32,
    /// Pending reveal sub-routine (cancelled when `None`)
    pub reveal: Option<Cadence>,
    pub score_visible: bool,
    pub clouds_visible: bool,

    /// Hazards spawned since the state was created
    pub spawned_total: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new session; fails fast on an unusable config
    pub fn new(config: RunnerConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let w = config.world_width;
        let floor = config.world_height;
        let clouds = vec![
            Cloud {
                pos: Vec2::new(w / 2.0, 170.0),
            },
            Cloud {
                pos: Vec2::new(w - 80.0, 80.0),
            },
            Cloud {
                pos: Vec2::new(w / 1.3, 100.0),
            },
        ];

        log::info!("New session (seed {seed}, world {w}x{floor})");

        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: SessionPhase::AwaitingStart,
            player: Player::on_ground(0.0, floor),
            obstacles: Vec::new(),
            clouds,
            trigger: StartTrigger::new(config.trigger_start_y),
            physics: ArcadePhysics::new(config.gravity, w, floor),
            score: 0,
            last_score: 0,
            best_score: 0,
            spawn_timer: Cadence::new(ms_to_micros(config.spawn_interval_ms)),
            score_timer: Cadence::new(ms_to_micros(config.score_interval_ms)),
            base_speed: config.base_speed,
            speed_modifier: 1,
            ground_width: config.initial_ground_width,
            ground_scroll: 0.0,
            reveal: None,
            score_visible: false,
            clouds_visible: false,
            spawned_total: 0,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
            config,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand pending intents to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Scroll distance per tick at the current difficulty
    pub fn scroll_speed(&self) -> f32 {
        self.base_speed * self.speed_modifier as f32
    }

    /// Zero-padded score for the HUD
    pub fn score_text(&self) -> String {
        super::score::format_score(self.score, self.config.score_digits)
    }

    pub fn best_score_text(&self) -> String {
        format!(
            "HI {}",
            super::score::format_score(self.best_score, self.config.score_digits)
        )
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }
}
