//! Obstacle spawner
//!
//! Runs only while the session is `Running`. One hazard per elapsed spawn
//! interval, placed past the right edge of the world.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState, Obstacle, ObstacleKind};

/// Advance the spawn timer and spawn everything that came due
pub fn tick_spawner(state: &mut GameState, dt_us: u64) {
    let due = state.spawn_timer.advance(dt_us);
    for _ in 0..due {
        spawn_obstacle(state);
    }
}

/// Draw a variant uniformly over every cactus and bird
pub fn roll_kind(state: &mut GameState) -> ObstacleKind {
    let cactus_count = state.config.obstacles.cactus_count();
    let total = cactus_count + state.config.obstacles.bird_count();
    let draw = state.rng.random_range(1..=total);
    if draw <= cactus_count {
        ObstacleKind::Cactus(draw)
    } else {
        ObstacleKind::Bird(draw - cactus_count)
    }
}

/// Spawn one hazard and return its ID
pub fn spawn_obstacle(state: &mut GameState) -> u32 {
    let kind = roll_kind(state);
    let gap = state
        .rng
        .random_range(state.config.min_gap..=state.config.max_gap);
    let x = state.config.world_width + gap as f32;
    let ground = state.config.world_height;

    let (y, size) = match kind {
        ObstacleKind::Cactus(n) => (ground, state.config.obstacles.cactus_size(n)),
        ObstacleKind::Bird(_) => {
            let presets = state.config.bird_altitudes.len();
            let altitude = state.config.bird_altitudes[state.rng.random_range(0..presets)];
            (ground - altitude, state.config.obstacles.bird_size)
        }
    };

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        kind,
        pos: Vec2::new(x, y),
        size,
    });
    state.spawned_total += 1;

    log::debug!("Spawned {:?} #{} at ({}, {})", kind, id, x, y);
    state.emit(GameEvent::ObstacleSpawned { id, kind });
    if kind.is_flying() {
        state.emit(GameEvent::ObstacleFlap { id });
    }
    id
}

/// Drop every hazard whose right edge has left the world
pub fn despawn_offscreen(state: &mut GameState) {
    let mut removed = Vec::new();
    state.obstacles.retain(|o| {
        let gone = o.pos.x + o.size.x < 0.0;
        if gone {
            removed.push(o.id);
        }
        !gone
    });
    for id in removed {
        log::debug!("Despawned obstacle #{}", id);
        state.emit(GameEvent::ObstacleRemoved { id });
    }
}
