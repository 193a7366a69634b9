//! Game state and core simulation types
//!
//! The host owns one `GameState` for the life of the process and only reads
//! it; every mutation goes through the operations in `tick`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first activation
    #[default]
    Idle,
    /// Physics, spawning and collisions active
    Running,
    /// Run ended, state frozen for display
    Over,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Running => "running",
            GamePhase::Over => "over",
        }
    }
}

/// A scrolling obstacle pair with a fixed gap between its segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Identity for render keys only
    pub id: u64,
    /// Left edge
    pub x: f32,
    pub top_height: f32,
    pub bottom_height: f32,
    /// Set once when the flyer's left edge passes the gate's left edge
    pub passed: bool,
}

impl Gate {
    /// Y of the upper segment's lower edge (top of the gap)
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.top_height
    }

    /// Y of the lower segment's upper edge (bottom of the gap)
    #[inline]
    pub fn gap_bottom(&self, playfield_height: f32) -> f32 {
        playfield_height - self.bottom_height
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the gate RNG was created from
    pub(crate) seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) tuning: Tuning,
    pub(crate) phase: GamePhase,
    pub(crate) score: u32,
    /// Never decreases for the life of the state
    pub(crate) high_score: u32,
    pub(crate) flyer_y: f32,
    pub(crate) flyer_velocity: f32,
    /// In spawn order (leftmost first)
    pub(crate) gates: Vec<Gate>,
    /// Host timestamp of the latest spawn
    pub(crate) last_spawn_time: f64,
    /// Ticks simulated in the current run
    pub(crate) ticks: u64,
    /// Next gate ID; never rewinds, so IDs stay unique across runs
    next_gate_id: u64,
}

impl GameState {
    /// Create an idle game state with the reference tuning
    pub fn new(seed: u64) -> Self {
        let tuning = Tuning::default();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            high_score: 0,
            flyer_y: tuning.idle_y,
            flyer_velocity: 0.0,
            gates: Vec::new(),
            last_spawn_time: 0.0,
            ticks: 0,
            next_gate_id: 1,
            tuning,
        }
    }

    /// Create an idle game state with custom tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        let mut state = Self::new(seed);
        state.flyer_y = tuning.idle_y;
        state.tuning = tuning;
        Ok(state)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Top edge of the flyer
    pub fn flyer_y(&self) -> f32 {
        self.flyer_y
    }

    pub fn flyer_velocity(&self) -> f32 {
        self.flyer_velocity
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn last_spawn_time(&self) -> f64 {
        self.last_spawn_time
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new gate ID
    pub(crate) fn next_gate_id(&mut self) -> u64 {
        let id = self.next_gate_id;
        self.next_gate_id += 1;
        id
    }

    /// Roll a gate at `x` with a random upper segment
    pub(crate) fn roll_gate(&mut self, x: f32) -> Gate {
        let top = self
            .rng
            .random_range(self.tuning.top_height_min..=self.tuning.top_height_max);
        self.gate_at(x, top as f32)
    }

    /// Build a gate at `x` whose segments leave exactly one gap
    pub(crate) fn gate_at(&mut self, x: f32, top_height: f32) -> Gate {
        Gate {
            id: self.next_gate_id(),
            x,
            top_height,
            bottom_height: self.tuning.playfield_height - top_height - self.tuning.gap_height,
            passed: false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}
