//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - The host decides when to tick and supplies the timestamp
//! - Seeded RNG only
//! - Gates kept in spawn order
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use autopilot::should_activate;
pub use collision::{Rect, flyer_hits_gate, flyer_rect, gate_rects};
pub use state::{GamePhase, GameState, Gate};
pub use tick::{GameEvent, activate, end, reset, start, tick};
