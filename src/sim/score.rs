//! Score accrual and difficulty stepping

use super::state::{Cue, GameEvent, GameState};

/// Add one point per elapsed score interval; bump the speed modifier on
/// every multiple of the step score
pub fn accrue(state: &mut GameState, dt_us: u64) {
    let points = state.score_timer.advance(dt_us);
    for _ in 0..points {
        state.score += 1;
        if state.score % state.config.speed_step_score == 0 {
            state.speed_modifier += 1;
            log::info!(
                "Score {} reached, speed x{}",
                state.score,
                state.speed_modifier
            );
            state.emit(GameEvent::Sound(Cue::Reach));
        }
    }
}

/// Fixed-width zero-padded score text
pub fn format_score(score: u32, digits: usize) -> String {
    format!("{:0width$}", score, width = digits)
}
