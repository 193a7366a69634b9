//! Data-driven game balance
//!
//! Every constant the engine reads lives here so hosts can tweak the feel of
//! the game without touching the simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected tuning values
#[derive(Error, Debug)]
pub enum TuningError {
    #[error("tuning JSON is malformed: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("impulse must point upward (negative), got {0}")]
    ImpulseNotUpward(f32),
    #[error("start_y {start_y} must lie strictly inside (0, {floor_y})")]
    StartOutsidePlayfield { start_y: f32, floor_y: f32 },
    #[error("flyer_right {right} must be greater than flyer_left {left}")]
    EmptyFlyer { left: f32, right: f32 },
    #[error("despawn_x {despawn_x} must be left of spawn_x {spawn_x}")]
    DespawnNotLeftOfSpawn { spawn_x: f32, despawn_x: f32 },
    #[error("top height range {min}..={max} is empty")]
    EmptyTopRange { min: u32, max: u32 },
    #[error("top height {max} plus gap {gap} exceeds playfield height {playfield}")]
    GateTooTall { max: u32, gap: f32, playfield: f32 },
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub impulse: f32,
    pub scroll_speed: f32,
    pub spawn_interval_ms: f64,
    pub gate_width: f32,
    pub gap_height: f32,
    pub playfield_height: f32,
    /// Flyer positions at or beyond this end the run
    pub floor_y: f32,
    pub flyer_left: f32,
    pub flyer_right: f32,
    pub flyer_height: f32,
    pub spawn_x: f32,
    /// Gates at or left of this x are removed
    pub despawn_x: f32,
    pub start_y: f32,
    pub idle_y: f32,
    pub top_height_min: u32,
    /// Inclusive
    pub top_height_max: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            impulse: IMPULSE,
            scroll_speed: SCROLL_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            gate_width: GATE_WIDTH,
            gap_height: GAP_HEIGHT,
            playfield_height: PLAYFIELD_HEIGHT,
            floor_y: FLOOR_Y,
            flyer_left: FLYER_LEFT,
            flyer_right: FLYER_RIGHT,
            flyer_height: FLYER_HEIGHT,
            spawn_x: GATE_SPAWN_X,
            despawn_x: GATE_DESPAWN_X,
            start_y: FLYER_START_Y,
            idle_y: FLYER_IDLE_Y,
            top_height_min: TOP_HEIGHT_MIN,
            top_height_max: TOP_HEIGHT_MAX,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document; missing fields use defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that the values describe a playable field
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("gravity", self.gravity),
            ("scroll_speed", self.scroll_speed),
            ("gate_width", self.gate_width),
            ("gap_height", self.gap_height),
            ("playfield_height", self.playfield_height),
            ("floor_y", self.floor_y),
            ("flyer_height", self.flyer_height),
        ];
        for (field, value) in positive {
            // Written this way so NaN is rejected too
            if !(value > 0.0) {
                return Err(TuningError::NotPositive {
                    field,
                    value: value as f64,
                });
            }
        }
        if !(self.spawn_interval_ms >= 0.0) {
            return Err(TuningError::NotPositive {
                field: "spawn_interval_ms",
                value: self.spawn_interval_ms,
            });
        }
        if !(self.impulse < 0.0) {
            return Err(TuningError::ImpulseNotUpward(self.impulse));
        }
        if !(self.start_y > 0.0 && self.start_y < self.floor_y) {
            return Err(TuningError::StartOutsidePlayfield {
                start_y: self.start_y,
                floor_y: self.floor_y,
            });
        }
        if !(self.flyer_right > self.flyer_left) {
            return Err(TuningError::EmptyFlyer {
                left: self.flyer_left,
                right: self.flyer_right,
            });
        }
        if !(self.despawn_x < self.spawn_x) {
            return Err(TuningError::DespawnNotLeftOfSpawn {
                spawn_x: self.spawn_x,
                despawn_x: self.despawn_x,
            });
        }
        if self.top_height_min > self.top_height_max {
            return Err(TuningError::EmptyTopRange {
                min: self.top_height_min,
                max: self.top_height_max,
            });
        }
        if self.top_height_max as f32 + self.gap_height > self.playfield_height {
            return Err(TuningError::GateTooTall {
                max: self.top_height_max,
                gap: self.gap_height,
                playfield: self.playfield_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.spawn_interval_ms, 2000.0);
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.25, "scroll_speed": 3.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.25);
        assert_eq!(tuning.scroll_speed, 3.0);
        assert_eq!(tuning.impulse, IMPULSE);
        assert_eq!(tuning.floor_y, FLOOR_Y);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse { .. }));
    }

    #[test]
    fn test_rejects_downward_impulse() {
        let err = Tuning::from_json(r#"{ "impulse": 2.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::ImpulseNotUpward(v) if v == 2.0));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let tuning = Tuning {
            start_y: 600.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::StartOutsidePlayfield { .. })
        ));

        let tuning = Tuning {
            flyer_right: 100.0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::EmptyFlyer { .. })));

        let tuning = Tuning {
            despawn_x: 600.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::DespawnNotLeftOfSpawn { .. })
        ));

        let tuning = Tuning {
            top_height_min: 200,
            top_height_max: 100,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::EmptyTopRange { .. })));

        let tuning = Tuning {
            top_height_max: 350,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::GateTooTall { .. })));
    }

    #[test]
    fn test_rejects_non_positive_and_nan() {
        let tuning = Tuning {
            gravity: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NotPositive { field: "gravity", .. })
        ));

        let tuning = Tuning {
            scroll_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NotPositive { field: "scroll_speed", .. })
        ));
    }
}
