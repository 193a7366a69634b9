//! Axis-aligned rectangle collision between the flyer and gate segments
//!
//! Screen coordinates: y grows downward, so a rectangle's `min` is its
//! top-left corner.

use glam::Vec2;

use super::state::Gate;
use crate::tuning::Tuning;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Strict overlap; rectangles that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The flyer's box for a given top edge
pub fn flyer_rect(tuning: &Tuning, flyer_y: f32) -> Rect {
    Rect::new(
        Vec2::new(tuning.flyer_left, flyer_y),
        Vec2::new(tuning.flyer_right, flyer_y + tuning.flyer_height),
    )
}

/// Upper and lower segments of a gate
///
/// The lower segment reaches past the floor so a flyer sinking below the
/// playfield can't slip under it.
pub fn gate_rects(tuning: &Tuning, gate: &Gate) -> [Rect; 2] {
    let left = gate.x;
    let right = gate.x + tuning.gate_width;
    let bottom = tuning
        .playfield_height
        .max(tuning.floor_y + tuning.flyer_height);
    [
        Rect::new(Vec2::new(left, 0.0), Vec2::new(right, gate.top_height)),
        Rect::new(
            Vec2::new(left, gate.gap_bottom(tuning.playfield_height)),
            Vec2::new(right, bottom),
        ),
    ]
}

/// Whether the flyer at `flyer_y` hits either segment of `gate`
pub fn flyer_hits_gate(tuning: &Tuning, flyer_y: f32, gate: &Gate) -> bool {
    let flyer = flyer_rect(tuning, flyer_y);
    gate_rects(tuning, gate).iter().any(|r| flyer.overlaps(r))
}
