//! Gate Runner entry point
//!
//! Native builds run a headless demo: the autopilot plays a few runs on a
//! simulated 60 Hz clock and reports each score.
//! The browser build drives the library through `gate_runner::web` instead.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;

/// Headless autopilot demo for the Gate Runner simulation.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for gate heights
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Number of runs to play
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,
    /// Simulated seconds after which a run is ended by force
    #[arg(long, value_name = "SECONDS", default_value_t = 120)]
    max_seconds: u32,
    /// JSON tuning file; missing fields keep their defaults
    #[arg(long, value_name = "PATH", env = "GATE_RUNNER_TUNING")]
    tuning: Option<PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("Gate Runner (native demo) starting with seed {}", args.seed);

    let tuning = args.tuning.as_deref().map(load_tuning).unwrap_or_default();
    let mut game = demo::DemoHost::new(args.seed, tuning);
    for run in 1..=args.runs {
        let result = game.play_run(args.max_seconds);
        println!(
            "run {run}: score {} in {} ticks{}{}",
            result.score,
            result.ticks,
            if result.new_high_score { " (new high score)" } else { "" },
            if result.timed_out { " (time cap)" } else { "" }
        );
    }

    println!("high score: {}", game.state.high_score());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is gate_runner::web::wasm_start, this is just to satisfy the compiler
}

/// Read a tuning file, falling back to defaults when it is unreadable or invalid
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &std::path::Path) -> gate_runner::Tuning {
    use gate_runner::Tuning;

    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
    match parsed {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path.display());
            tuning
        }
        Err(e) => {
            log::warn!("Rejected tuning {}: {}, using defaults", path.display(), e);
            Tuning::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use gate_runner::Tuning;
    use gate_runner::consts::HOST_FRAME_MS;
    use gate_runner::sim::{self, GameEvent, GameState};

    /// Outcome of one demo run
    pub struct RunResult {
        pub score: u32,
        pub ticks: u64,
        pub new_high_score: bool,
        pub timed_out: bool,
    }

    /// Headless host: owns the state and the clock
    pub struct DemoHost {
        pub state: GameState,
        now: f64,
    }

    impl DemoHost {
        pub fn new(seed: u64, tuning: Tuning) -> Self {
            let state = GameState::with_tuning(seed, tuning).unwrap_or_else(|e| {
                log::warn!("Invalid tuning ({}), using defaults", e);
                GameState::new(seed)
            });
            Self { state, now: 0.0 }
        }

        /// Play until game over or until `max_seconds` of simulated time pass
        pub fn play_run(&mut self, max_seconds: u32) -> RunResult {
            sim::activate(&mut self.state);
            let max_ticks = (max_seconds as f64 * 1000.0 / HOST_FRAME_MS).round() as u64;

            let mut timed_out = false;
            let mut over = None;
            while over.is_none() {
                if self.state.ticks() >= max_ticks {
                    over = sim::end(&mut self.state);
                    timed_out = true;
                    break;
                }
                if sim::should_activate(&self.state) {
                    sim::activate(&mut self.state);
                }
                self.now += HOST_FRAME_MS;
                over = sim::tick(&mut self.state, self.now)
                    .into_iter()
                    .find(|e| matches!(e, GameEvent::GameOver { .. }));
            }

            let new_high_score = matches!(
                over,
                Some(GameEvent::GameOver {
                    new_high_score: true,
                    ..
                })
            );
            RunResult {
                score: self.state.score(),
                ticks: self.state.ticks(),
                new_high_score,
                timed_out,
            }
        }
    }
}
