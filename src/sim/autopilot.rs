//! Idle/demo mode - a simple controller that plays the game
//!
//! Aims for the gap of the nearest gate still ahead of the flyer and
//! activates whenever the flyer is falling toward that gap's lower edge.

use super::state::{GameState, Gate};

/// Distance kept between the flyer's bottom edge and the gap's bottom edge
pub const BOTTOM_MARGIN: f32 = 20.0;

/// Nearest gate whose right edge has not yet cleared the flyer's left edge
pub fn next_gate(state: &GameState) -> Option<&Gate> {
    let tuning = state.tuning();
    state
        .gates()
        .iter()
        .find(|g| g.x + tuning.gate_width > tuning.flyer_left)
}

/// Bottom edge of the gap the flyer should line up with
pub fn target_gap_bottom(state: &GameState) -> f32 {
    let tuning = state.tuning();
    match next_gate(state) {
        Some(gate) => gate.gap_bottom(tuning.playfield_height),
        // No gate yet: a gap centered in the playfield
        None => (tuning.playfield_height + tuning.gap_height) / 2.0,
    }
}

/// Whether the demo player should activate this frame
pub fn should_activate(state: &GameState) -> bool {
    if !state.is_running() {
        return false;
    }
    let tuning = state.tuning();
    let flyer_bottom = state.flyer_y() + tuning.flyer_height;
    state.flyer_velocity() >= 0.0 && flyer_bottom > target_gap_bottom(state) - BOTTOM_MARGIN
}
