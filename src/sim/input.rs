//! Tick input edges and the demo autopilot
//!
//! The simulation reacts to edges only: holding a key does nothing after
//! the tick it went down. Hosts that see raw key state run it through
//! `KeyEdges` once per tick.

use super::body::Body;
use super::state::{GameState, SessionPhase};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub jump_pressed: bool,
    pub crouch_pressed: bool,
    pub crouch_released: bool,
    /// Restart request (only acted on after a game over)
    pub restart: bool,
}

/// Held-key state sampled from the keyboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub jump: bool,
    pub crouch: bool,
}

/// Turns held keys into just-pressed / just-released edges
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEdges {
    jump_down: bool,
    crouch_down: bool,
}

impl KeyEdges {
    pub fn sample(&mut self, controls: Controls) -> TickInput {
        let input = TickInput {
            jump_pressed: controls.jump && !self.jump_down,
            crouch_pressed: controls.crouch && !self.crouch_down,
            crouch_released: !controls.crouch && self.crouch_down,
            restart: false,
        };
        self.jump_down = controls.jump;
        self.crouch_down = controls.crouch;
        input
    }
}

/// Altitude above the floor below which birds must be jumped, not ducked
const DUCKABLE_CLEARANCE: f32 = 60.0;
/// Ticks of look-ahead before a hazard reaches the player
const LOOKAHEAD_TICKS: f32 = 14.0;

/// Simple demo player: jumps to start, then dodges the nearest hazard
pub fn autopilot(state: &GameState) -> Controls {
    let player = &state.player;
    if !player.alive {
        return Controls::default();
    }

    match state.phase {
        SessionPhase::AwaitingStart => Controls {
            jump: player.grounded,
            crouch: false,
        },
        SessionPhase::Running => {
            let body = player.hitbox();
            let reach = state.scroll_speed() * LOOKAHEAD_TICKS;
            let floor = state.config.world_height;

            let threat = state
                .obstacles
                .iter()
                .map(|o| o.hitbox())
                .filter(|b| b.right() >= body.left() && b.left() - body.right() <= reach)
                .min_by(|a, b| a.left().total_cmp(&b.left()));

            match threat {
                Some(b) if b.bottom() <= floor - DUCKABLE_CLEARANCE => Controls {
                    jump: false,
                    crouch: player.grounded,
                },
                Some(_) => Controls {
                    jump: player.grounded && !player.is_crouching(),
                    crouch: false,
                },
                None => Controls::default(),
            }
        }
        _ => Controls::default(),
    }
}
