//! Reactions to overlaps reported by the physics collaborator
//!
//! The core never tests geometry here. Contacts may arrive late or twice
//! relative to state changes, so every reaction checks the current phase
//! before doing anything.

use super::physics::Contact;
use super::session;
use super::state::{GameState, SessionPhase, TriggerPhase};

pub fn handle_contact(state: &mut GameState, contact: Contact) {
    match contact {
        Contact::Trigger => on_trigger_overlap(state),
        Contact::Obstacle(id) => on_obstacle_hit(state, id),
    }
}

/// Two-phase start gate
///
/// First touch (upper position) drops the trigger to the ground; the second
/// touch parks it and starts the reveal.
pub fn on_trigger_overlap(state: &mut GameState) {
    if state.phase != SessionPhase::AwaitingStart {
        return;
    }

    match state.trigger.phase {
        TriggerPhase::Upper => {
            state.trigger.pos.x = 0.0;
            state.trigger.pos.y = state.config.world_height;
            state.trigger.phase = TriggerPhase::Ground;
            log::debug!("Start trigger dropped to ground");
        }
        TriggerPhase::Ground => {
            state.trigger.pos = crate::consts::TRIGGER_PARKED_POS;
            state.trigger.phase = TriggerPhase::Parked;
            session::begin_reveal(state);
        }
        TriggerPhase::Parked => {}
    }
}

/// Any hazard contact ends the run
pub fn on_obstacle_hit(state: &mut GameState, id: u32) {
    if state.phase != SessionPhase::Running {
        return;
    }
    log::debug!("Hit obstacle #{}", id);
    session::game_over(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunnerConfig;
    use crate::consts::TRIGGER_PARKED_POS;
    use glam::Vec2;

    #[test]
    fn test_trigger_two_phase() {
        let mut s = GameState::new(RunnerConfig::default(), 9).unwrap();

        handle_contact(&mut s, Contact::Trigger);
        assert_eq!(s.phase, SessionPhase::AwaitingStart);
        assert_eq!(s.trigger.pos, Vec2::new(0.0, 340.0));
        assert_eq!(s.trigger.phase, TriggerPhase::Ground);

        handle_contact(&mut s, Contact::Trigger);
        assert_eq!(s.phase, SessionPhase::Revealing);
        assert_eq!(s.trigger.pos, TRIGGER_PARKED_POS);
        assert!(s.reveal.is_some());

        // Stray contact after parking
        handle_contact(&mut s, Contact::Trigger);
        assert_eq!(s.phase, SessionPhase::Revealing);
    }

    #[test]
    fn test_obstacle_hit_ignored_outside_running() {
        let mut s = GameState::new(RunnerConfig::default(), 9).unwrap();
        handle_contact(&mut s, Contact::Obstacle(1));
        assert_eq!(s.phase, SessionPhase::AwaitingStart);
        assert!(s.player.alive);
        assert!(s.events.is_empty());
    }
}
