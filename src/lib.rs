//! Gate Runner - side-scrolling gate-dodging game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, gates, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `web`: Browser host bindings (wasm32 only)

pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use tuning::{Tuning, TuningError};

/// Reference game constants (pixels, pixels/tick, milliseconds)
pub mod consts {
    /// Downward acceleration added to the flyer's velocity every tick
    pub const GRAVITY: f32 = 0.1;
    /// Velocity set by an activation while running (negative = up)
    pub const IMPULSE: f32 = -3.0;
    /// Horizontal distance every gate moves per tick
    pub const SCROLL_SPEED: f32 = 2.0;
    /// Minimum host time between two gate spawns
    pub const SPAWN_INTERVAL_MS: f64 = 2000.0;

    /// Playfield dimensions
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;
    pub const FLOOR_Y: f32 = 550.0;

    /// Gate defaults
    pub const GATE_WIDTH: f32 = 60.0;
    pub const GAP_HEIGHT: f32 = 200.0;
    pub const GATE_SPAWN_X: f32 = 500.0;
    pub const GATE_DESPAWN_X: f32 = -60.0;
    /// Inclusive range of the upper segment height
    pub const TOP_HEIGHT_MIN: u32 = 70;
    pub const TOP_HEIGHT_MAX: u32 = 169;

    /// Flyer box (it never moves horizontally)
    pub const FLYER_LEFT: f32 = 100.0;
    pub const FLYER_RIGHT: f32 = 140.0;
    pub const FLYER_HEIGHT: f32 = 40.0;
    /// Flyer position at the start of every run
    pub const FLYER_START_Y: f32 = 200.0;
    /// Flyer resting position while idle
    pub const FLYER_IDLE_Y: f32 = 250.0;

    /// Host frame rate assumed by the demo driver
    pub const HOST_FRAME_MS: f64 = 1000.0 / 60.0;
}
