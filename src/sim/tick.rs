//! Per-frame simulation tick
//!
//! Core game loop that advances the session deterministically. The world
//! scrolls a fixed distance per tick; timers advance by elapsed time.

use super::collision;
use super::input::TickInput;
use super::session;
use super::spawner;
use super::score;
use super::state::{Cue, GameEvent, GameState, SessionPhase};
use crate::micros;

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.restart {
        session::restart(state);
    }

    // Everything stays frozen until a restart
    if state.phase == SessionPhase::GameOver {
        return;
    }

    let dt_us = micros(dt);
    state.time_ticks += 1;

    apply_input(state, input);
    state.physics.step(&mut state.player, dt);

    session::advance_reveal(state, dt_us);

    if state.phase == SessionPhase::Running {
        spawner::tick_spawner(state, dt_us);
        scroll_world(state);
        score::accrue(state, dt_us);
        spawner::despawn_offscreen(state);
        wrap_clouds(state);
    }

    let contacts = state
        .physics
        .contacts(&state.player, &state.trigger, &state.obstacles);
    for contact in contacts {
        collision::handle_contact(state, contact);
    }

    if state.phase == SessionPhase::Running && state.player.alive {
        let pose = state.player.desired_pose();
        if let Some(pose) = state.player.play(pose) {
            state.emit(GameEvent::Pose(pose));
        }
    }
}

/// Jump and crouch edges; a dead player ignores everything
fn apply_input(state: &mut GameState, input: &TickInput) {
    if !state.player.alive {
        return;
    }

    if input.jump_pressed && state.player.jump(state.config.jump_impulse) {
        state.emit(GameEvent::Sound(Cue::Jump));
    }
    if input.crouch_pressed {
        state.player.crouch();
    }
    if input.crouch_released {
        state.player.stand();
    }
}

/// Move hazards, clouds and the ground texture left
fn scroll_world(state: &mut GameState) {
    let speed = state.scroll_speed();
    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= speed;
    }
    state.ground_scroll += speed;

    let cloud_speed = state.config.cloud_speed;
    for cloud in &mut state.clouds {
        cloud.pos.x -= cloud_speed;
    }
}

fn wrap_clouds(state: &mut GameState) {
    let wrap_x = state.config.world_width + state.config.cloud_wrap_margin;
    for cloud in &mut state.clouds {
        if cloud.right() < 0.0 {
            cloud.pos.x = wrap_x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunnerConfig;
    use crate::consts::SIM_DT;
    use crate::sim::body::Body;
    use crate::sim::player::Pose;
    use crate::sim::spawner::spawn_obstacle;
    use glam::Vec2;

    fn running() -> GameState {
        let mut s = GameState::new(RunnerConfig::default(), 12345).unwrap();
        session::begin_reveal(&mut s);
        while !session::step_reveal(&mut s) {}
        s.drain_events();
        s
    }

    #[test]
    fn test_awaiting_start_world_is_static() {
        let mut s = GameState::new(RunnerConfig::default(), 1).unwrap();
        let clouds: Vec<_> = s.clouds.iter().map(|c| c.pos).collect();
        for _ in 0..120 {
            tick(&mut s, &TickInput::default(), SIM_DT);
        }
        assert_eq!(s.phase, SessionPhase::AwaitingStart);
        assert_eq!(s.score, 0);
        assert!(s.obstacles.is_empty());
        assert_eq!(s.clouds.iter().map(|c| c.pos).collect::<Vec<_>>(), clouds);
        // No pose intents before the run starts
        assert!(s.events.is_empty());
    }

    #[test]
    fn test_score_after_one_second() {
        let mut s = running();
        for _ in 0..60 {
            tick(&mut s, &TickInput::default(), SIM_DT);
        }
        assert_eq!(s.score, 10);
        assert_eq!(s.score_text(), "00010");
    }

    #[test]
    fn test_obstacles_drift_left() {
        let mut s = running();
        spawn_obstacle(&mut s);
        let mut last = s.obstacles[0].pos.x;
        for _ in 0..30 {
            tick(&mut s, &TickInput::default(), SIM_DT);
            let x = s.obstacles[0].pos.x;
            assert!(x < last);
            last = x;
        }
        assert_eq!(s.ground_scroll, 150.0);
    }

    #[test]
    fn test_offscreen_obstacle_removed() {
        let mut s = running();
        let id = spawn_obstacle(&mut s);
        let width = s.obstacles[0].size.x;
        s.obstacles[0].pos.x = -width + 1.0;
        tick(&mut s, &TickInput::default(), SIM_DT);
        assert!(s.obstacles.iter().all(|o| o.id != id));
        for _ in 0..10 {
            tick(&mut s, &TickInput::default(), SIM_DT);
            assert!(s.obstacles.iter().all(|o| o.id != id));
        }
    }

    #[test]
    fn test_cloud_wraps_to_right_edge() {
        let mut s = running();
        s.clouds[0].pos.x = -92.2;
        tick(&mut s, &TickInput::default(), SIM_DT);
        assert_eq!(s.clouds[0].pos.x, 1030.0);
    }

    #[test]
    fn test_jump_and_pose() {
        let mut s = running();
        tick(&mut s, &TickInput::default(), SIM_DT);
        assert_eq!(s.player.pose, Some(Pose::Run));

        let jump = TickInput {
            jump_pressed: true,
            ..Default::default()
        };
        tick(&mut s, &jump, SIM_DT);
        let events = s.drain_events();
        assert!(events.contains(&GameEvent::Sound(Cue::Jump)));
        assert!(events.contains(&GameEvent::Pose(Pose::Airborne)));
        assert!(!s.player.grounded);

        let vy = s.player.vel.y;
        tick(&mut s, &jump, SIM_DT);
        // Second edge mid-air only lets gravity act
        assert!(s.player.vel.y > vy);
        assert!(!s.drain_events().contains(&GameEvent::Sound(Cue::Jump)));
    }

    #[test]
    fn test_crouch_while_running() {
        let mut s = running();
        let press = TickInput {
            crouch_pressed: true,
            ..Default::default()
        };
        tick(&mut s, &press, SIM_DT);
        assert_eq!(s.player.box_size(), Vec2::new(44.0, 58.0));
        assert_eq!(s.player.pose, Some(Pose::CrouchRun));

        let release = TickInput {
            crouch_released: true,
            ..Default::default()
        };
        tick(&mut s, &release, SIM_DT);
        assert_eq!(s.player.box_size(), Vec2::new(44.0, 92.0));
        assert_eq!(s.player.pose, Some(Pose::Run));
    }

    #[test]
    fn test_collision_freezes_world() {
        let mut s = running();
        spawn_obstacle(&mut s);
        let player_box = s.player.hitbox();
        s.obstacles[0].pos = Vec2::new(player_box.left() + 10.0, 340.0);
        s.obstacles[0].size = Vec2::new(30.0, 60.0);
        s.score = 17;

        tick(&mut s, &TickInput::default(), SIM_DT);
        assert_eq!(s.phase, SessionPhase::GameOver);
        assert_eq!(s.score, 0);
        assert_eq!(s.last_score, 17);

        let frozen = s.obstacles[0].pos;
        for _ in 0..10 {
            tick(&mut s, &TickInput::default(), SIM_DT);
        }
        assert_eq!(s.obstacles[0].pos, frozen);

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut s, &restart, SIM_DT);
        assert_eq!(s.phase, SessionPhase::Running);
        assert!(s.obstacles.is_empty());
    }
}
