//! Browser host bindings
//!
//! The page's `requestAnimationFrame` loop calls `tick(performance.now())`
//! and forwards clicks/Space to `activate`. Rendering and audio stay in JS.

use wasm_bindgen::prelude::*;

use crate::sim::{self, GameEvent, GameState};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Game instance owned by the page
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
}

#[wasm_bindgen]
impl WebGame {
    /// New idle game; `tuning_json` may be empty for the reference tuning
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: &str) -> WebGame {
        let seed = js_sys::Date::now() as u64;
        let state = if tuning_json.trim().is_empty() {
            GameState::new(seed)
        } else {
            match Tuning::from_json(tuning_json).and_then(|t| GameState::with_tuning(seed, t)) {
                Ok(state) => state,
                Err(e) => {
                    log::warn!("Rejected tuning, using defaults: {}", e);
                    GameState::new(seed)
                }
            }
        };
        log::info!("Game created with seed: {}", seed);
        WebGame { state }
    }

    pub fn start(&mut self) {
        sim::start(&mut self.state);
    }

    pub fn activate(&mut self) {
        sim::activate(&mut self.state);
    }

    pub fn reset(&mut self) {
        sim::reset(&mut self.state);
    }

    /// Advance one frame; true only on the frame the run ended
    pub fn tick(&mut self, now: f64) -> bool {
        sim::tick(&mut self.state, now)
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
    }

    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        self.state.phase().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    #[wasm_bindgen(getter)]
    pub fn high_score(&self) -> u32 {
        self.state.high_score()
    }

    #[wasm_bindgen(getter)]
    pub fn flyer_y(&self) -> f32 {
        self.state.flyer_y()
    }

    /// Full state as JSON for the renderer (gates keyed by `id`)
    pub fn snapshot(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_else(|e| {
            log::error!("Snapshot failed: {}", e);
            String::from("{}")
        })
    }
}
