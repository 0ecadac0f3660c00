//! Session state machine transitions
//!
//! `AwaitingStart -> Revealing -> Running <-> GameOver`. The reveal is a
//! periodic sub-routine stored on the state; clearing `state.reveal`
//! cancels it.

use super::cadence::Cadence;
use super::player::Pose;
use super::state::{Cue, GameEvent, GameState, Panel, SessionPhase};

/// Start rolling out the ground (second trigger touch)
pub fn begin_reveal(state: &mut GameState) {
    if state.phase != SessionPhase::AwaitingStart {
        return;
    }
    state.phase = SessionPhase::Revealing;
    state.reveal = Some(Cadence::new(state.config.reveal_step_micros()));
    log::info!("Reveal started");
}

/// Run every reveal step that came due this tick
pub fn advance_reveal(state: &mut GameState, dt_us: u64) {
    let Some(reveal) = state.reveal.as_mut() else {
        return;
    };
    let steps = reveal.advance(dt_us);
    for _ in 0..steps {
        if step_reveal(state) {
            break;
        }
    }
}

/// One reveal step; returns true once the ground covers the world
pub fn step_reveal(state: &mut GameState) -> bool {
    if state.phase != SessionPhase::Revealing {
        state.reveal = None;
        return true;
    }

    state.player.vel.x = state.config.reveal_push_speed;
    if let Some(pose) = state.player.play(Pose::Run) {
        state.emit(GameEvent::Pose(pose));
    }

    state.ground_width += state.config.reveal_ground_step;
    if state.ground_width >= state.config.world_width {
        finish_reveal(state);
        return true;
    }
    false
}

fn finish_reveal(state: &mut GameState) {
    state.reveal = None;
    state.player.vel.x = 0.0;
    state.ground_width = state.config.world_width;
    state.score_visible = true;
    state.clouds_visible = true;
    state.emit(GameEvent::Show(Panel::Score));
    state.emit(GameEvent::Show(Panel::Clouds));
    state.phase = SessionPhase::Running;
    log::info!("Run started");
}

/// Hazard hit: freeze the world and end the run
pub fn game_over(state: &mut GameState) {
    if state.phase != SessionPhase::Running {
        log::debug!("Ignoring hazard contact in {:?}", state.phase);
        return;
    }

    state.reveal = None;
    state.physics.pause();
    state.emit(GameEvent::AnimationsPaused);

    if state.player.die() {
        state.emit(GameEvent::Pose(Pose::Hurt));
        state.emit(GameEvent::Sound(Cue::Hit));
    }
    state.emit(GameEvent::Show(Panel::GameOver));

    state.last_score = state.score;
    if state.score > state.best_score {
        state.best_score = state.score;
        state.emit(GameEvent::HighScore(state.best_score));
    }

    // base_speed is kept; only the modifier drops back to base difficulty
    state.score = 0;
    state.spawn_timer.reset();
    state.score_timer.reset();
    state.speed_modifier = 1;
    state.phase = SessionPhase::GameOver;
    log::info!("Game over (score {})", state.last_score);
}

/// Restart after a game over; returns false if there was nothing to restart
pub fn restart(state: &mut GameState) -> bool {
    if state.phase != SessionPhase::GameOver {
        log::debug!("Ignoring restart in {:?}", state.phase);
        return false;
    }

    state.reveal = None;
    state.physics.resume();
    state.player.reset();
    state.player.vel.y = 0.0;

    for obstacle in std::mem::take(&mut state.obstacles) {
        state.emit(GameEvent::ObstacleRemoved { id: obstacle.id });
    }

    state.emit(GameEvent::Hide(Panel::GameOver));
    state.emit(GameEvent::AnimationsResumed);
    state.phase = SessionPhase::Running;
    log::info!("Restarted");
    true
}
