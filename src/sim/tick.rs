//! Host-driven simulation tick
//!
//! The host calls `tick` once per frame with its clock and `activate` on
//! every player input. Nothing here schedules work or reads a clock.

use serde::{Deserialize, Serialize};

use super::collision::flyer_hits_gate;
use super::state::{GamePhase, GameState};

/// Things that happened during one operation, for audio/HUD hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh run began
    Started,
    /// Activation kicked the flyer upward
    Impulse,
    GateSpawned { id: u64 },
    GateDespawned { id: u64 },
    /// The flyer passed a gate
    Scored { score: u32 },
    /// Emitted once per run, on the tick the run ends
    GameOver {
        score: u32,
        high_score: u32,
        new_high_score: bool,
    },
}

/// Begin a fresh run from any phase
pub fn start(state: &mut GameState) -> GameEvent {
    state.phase = GamePhase::Running;
    state.score = 0;
    state.flyer_y = state.tuning.start_y;
    state.flyer_velocity = 0.0;
    state.gates.clear();
    state.last_spawn_time = 0.0;
    state.ticks = 0;
    log::info!("Run started (high score {})", state.high_score);
    GameEvent::Started
}

/// Single player action: starts/restarts when not running, otherwise kicks upward
pub fn activate(state: &mut GameState) -> GameEvent {
    match state.phase {
        GamePhase::Idle | GamePhase::Over => start(state),
        GamePhase::Running => {
            // Replaces the velocity so repeated inputs can't stack
            state.flyer_velocity = state.tuning.impulse;
            GameEvent::Impulse
        }
    }
}

/// Force the current run to end (e.g. host lost focus); no-op unless running
pub fn end(state: &mut GameState) -> Option<GameEvent> {
    if state.is_running() {
        Some(game_over(state))
    } else {
        None
    }
}

/// Return to the idle title state, keeping the high score
pub fn reset(state: &mut GameState) {
    state.phase = GamePhase::Idle;
    state.score = 0;
    state.flyer_y = state.tuning.idle_y;
    state.flyer_velocity = 0.0;
    state.gates.clear();
    state.last_spawn_time = 0.0;
    state.ticks = 0;
}

/// Advance the running game by one step at host time `now` (ms)
pub fn tick(state: &mut GameState, now: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_running() {
        return events;
    }
    let tuning = state.tuning;
    state.ticks += 1;

    // Semi-implicit Euler: velocity first
    state.flyer_velocity += tuning.gravity;
    state.flyer_y += state.flyer_velocity;

    if state.flyer_y <= 0.0 || state.flyer_y >= tuning.floor_y {
        events.push(game_over(state));
        return events;
    }

    // Scroll, then drop gates that left the screen
    for gate in &mut state.gates {
        gate.x -= tuning.scroll_speed;
    }
    state.gates.retain(|gate| {
        let keep = gate.x > tuning.despawn_x;
        if !keep {
            events.push(GameEvent::GateDespawned { id: gate.id });
        }
        keep
    });

    // At most one spawn per tick regardless of how late the host is
    if now - state.last_spawn_time > tuning.spawn_interval_ms {
        let gate = state.roll_gate(tuning.spawn_x);
        log::debug!(
            "Gate {} spawned at t={:.0} (top {}, bottom {})",
            gate.id,
            now,
            gate.top_height,
            gate.bottom_height
        );
        events.push(GameEvent::GateSpawned { id: gate.id });
        state.gates.push(gate);
        state.last_spawn_time = now;
    }

    let mut crashed = false;
    for gate in &mut state.gates {
        if !gate.passed && gate.x < tuning.flyer_left {
            gate.passed = true;
            state.score += 1;
            log::debug!("Gate {} passed, score {}", gate.id, state.score);
            events.push(GameEvent::Scored { score: state.score });
        }
        if flyer_hits_gate(&tuning, state.flyer_y, gate) {
            crashed = true;
        }
    }
    if crashed {
        events.push(game_over(state));
    }

    events
}

/// Shared Running -> Over transition
fn game_over(state: &mut GameState) -> GameEvent {
    state.phase = GamePhase::Over;
    let new_high_score = state.score > state.high_score;
    if new_high_score {
        state.high_score = state.score;
    }
    log::info!(
        "Game over after {} ticks: score {}, high score {}{}",
        state.ticks,
        state.score,
        state.high_score,
        if new_high_score { " (new!)" } else { "" }
    );
    GameEvent::GameOver {
        score: state.score,
        high_score: state.high_score,
        new_high_score,
    }
}
