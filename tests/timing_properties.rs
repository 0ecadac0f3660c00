//! Timer, score and difficulty properties over arbitrary frame timings

use dino_dash::RunnerConfig;
use dino_dash::sim::{GameState, SessionPhase, TickInput, session, tick};
use proptest::prelude::*;

fn running_state(seed: u64) -> GameState {
    let mut state = GameState::new(RunnerConfig::default(), seed).unwrap();
    session::begin_reveal(&mut state);
    while !session::step_reveal(&mut state) {}
    state
}

proptest! {
    #[test]
    fn spawns_match_elapsed_time(
        seed in any::<u64>(),
        frames in prop::collection::vec(1u32..=250, 1..40),
    ) {
        let mut state = running_state(seed);
        let mut total_ms = 0u64;
        for ms in &frames {
            tick(&mut state, &TickInput::default(), *ms as f32 / 1000.0);
            total_ms += *ms as u64;
        }
        prop_assert_eq!(state.phase, SessionPhase::Running);
        prop_assert_eq!(state.spawned_total, total_ms / 1500);
    }

    #[test]
    fn score_and_modifier_follow_time(
        frames in prop::collection::vec(1u32..=250, 1..40),
    ) {
        let mut state = running_state(1);
        let mut total_ms = 0u64;
        let mut last_modifier = state.speed_modifier;
        for ms in &frames {
            tick(&mut state, &TickInput::default(), *ms as f32 / 1000.0);
            total_ms += *ms as u64;
            prop_assert!(state.speed_modifier >= last_modifier);
            last_modifier = state.speed_modifier;
        }
        let expected = (total_ms / 100) as u32;
        prop_assert_eq!(state.score, expected);
        prop_assert_eq!(state.speed_modifier, 1 + expected / 100);
    }

    #[test]
    fn obstacles_only_move_left(
        seed in any::<u64>(),
        ticks in 1usize..200,
    ) {
        let mut state = running_state(seed);
        dino_dash::sim::spawner::spawn_obstacle(&mut state);
        let id = state.obstacles[0].id;
        let mut last_x = state.obstacles[0].pos.x;
        for _ in 0..ticks {
            tick(&mut state, &TickInput::default(), dino_dash::consts::SIM_DT);
            let Some(o) = state.obstacles.iter().find(|o| o.id == id) else { break };
            prop_assert!(o.pos.x < last_x);
            last_x = o.pos.x;
        }
    }
}
