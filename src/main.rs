//! Dino Dash entry point
//!
//! Headless attract mode: the autopilot plays a few runs at a fixed frame
//! rate and the results go to the leaderboard. A windowed host would feed
//! keyboard state into `KeyEdges` and route `GameEvent`s to its renderer
//! and mixer instead of the log.
//!
//! Usage: `dino-dash [config.json|-] [seed] [classic|dense]`

use dino_dash::consts::*;
use dino_dash::sim::{
    GameEvent, GameState, KeyEdges, SessionPhase, TickInput, autopilot, tick,
};
use dino_dash::config::SpacingPreset;
use dino_dash::{HighScores, RunnerConfig};

const HIGH_SCORES_PATH: &str = "dino_dash_scores.json";
/// Runs to play before exiting
const DEMO_RUNS: u32 = 3;
/// Give up on a run after ten simulated minutes
const MAX_TICKS_PER_RUN: u64 = 60 * 60 * 10;

/// Game instance holding all state
struct Game {
    state: GameState,
    accumulator: f32,
    edges: KeyEdges,
    input: TickInput,
    last_phase: SessionPhase,
    run_started_at: u64,
    high_scores: HighScores,
}

impl Game {
    fn new(state: GameState) -> Self {
        Self {
            last_phase: state.phase,
            state,
            accumulator: 0.0,
            edges: KeyEdges::default(),
            input: TickInput::default(),
            run_started_at: 0,
            high_scores: HighScores::load(HIGH_SCORES_PATH),
        }
    }

    /// Run simulation ticks for one rendered frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let mut input = self.edges.sample(autopilot(&self.state));
            input.restart = self.input.restart;
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.restart = false;

            for event in self.state.drain_events() {
                self.present(event);
            }
            self.track_phase();
        }
    }

    /// Stand-in for the renderer and mixer
    fn present(&self, event: GameEvent) {
        match event {
            GameEvent::Pose(pose) => log::debug!("pose: {}", pose.key()),
            GameEvent::HighScore(_) => log::info!("New best: {}", self.state.best_score_text()),
            other => log::debug!("{:?}", other),
        }
    }

    fn track_phase(&mut self) {
        let phase = self.state.phase;
        if phase == self.last_phase {
            return;
        }
        match phase {
            SessionPhase::Running => self.run_started_at = self.state.time_ticks,
            SessionPhase::GameOver => {
                let ticks = self.state.time_ticks - self.run_started_at;
                let score = self.state.last_score;
                match self.high_scores.potential_rank(score) {
                    Some(rank) => {
                        log::info!("Run scored {} (rank #{})", score, rank);
                        self.high_scores.add_score(score, ticks, self.state.seed);
                    }
                    None => log::info!("Run scored {}", score),
                }
            }
            _ => {}
        }
        self.last_phase = phase;
    }

    /// Restart signal from the game-over panel
    fn restart(&mut self) {
        self.input.restart = true;
    }
}

fn run() -> dino_dash::Result<()> {
    let mut args = std::env::args().skip(1);
    let mut config = match args.next() {
        Some(path) if path != "-" => RunnerConfig::load(path)?,
        _ => RunnerConfig::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(12345);
    if let Some(name) = args.next() {
        match SpacingPreset::from_name(&name) {
            Some(preset) => config.apply_preset(preset),
            None => log::warn!("Unknown spacing preset '{}', keeping {}", name, config.spacing.as_str()),
        }
    }

    let state = GameState::new(config, seed)?;
    log::info!("Game initialized with seed: {}", seed);

    let mut game = Game::new(state);
    let mut runs = 0;
    let mut run_ticks = 0u64;

    while runs < DEMO_RUNS {
        game.update(SIM_DT);
        run_ticks += 1;

        if game.state.phase == SessionPhase::GameOver && !game.input.restart {
            runs += 1;
            run_ticks = 0;
            if runs < DEMO_RUNS {
                game.restart();
            }
        } else if run_ticks > MAX_TICKS_PER_RUN {
            log::warn!("Run exceeded {} ticks, stopping", MAX_TICKS_PER_RUN);
            break;
        }
    }

    if let Some(top) = game.high_scores.top_score() {
        log::info!("Top score: {}", top);
    }
    game.high_scores.save(HIGH_SCORES_PATH)
}

fn main() {
    env_logger::init();
    log::info!("Dino Dash (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
