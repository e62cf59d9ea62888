//! Pointer-driven parallax.
//!
//! The position chases the pointer target with exponential smoothing, so each
//! frame closes a fixed share of the remaining distance: the error shrinks
//! by `1 - PARALLAX_SMOOTHING` per frame.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::consts::{PARALLAX_MULTIPLIER_PX, PARALLAX_SMOOTHING};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxState {
    pub x: f64,
    pub y: f64,
    pub target_x: f64,
    pub target_y: f64,
}

/// Linear interpolation from `start` toward `end` by `amount`.
#[must_use]
pub fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * end
}

/// Map a pointer coordinate to `[-1, 1]` across an axis of `extent` pixels.
#[must_use]
pub fn normalize_axis(coord: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !extent.is_finite() {
        return 0.0;
    }
    (coord / extent - 0.5) * 2.0
}

/// Parse a `data-depth` value; anything unreadable counts as no depth.
#[must_use]
pub fn parse_depth(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    match raw.trim().parse::<f64>() {
        Ok(depth) if depth.is_finite() => depth,
        Ok(_) => 0.0,
        Err(err) => {
            log::debug!("data-depth {raw:?} ignored: {err}");
            0.0
        }
    }
}

impl ParallaxState {
    /// Point the target at a pointer position inside a `width` x `height` viewport.
    pub fn set_target_from_pointer(&mut self, client_x: f64, client_y: f64, width: f64, height: f64) {
        self.target_x = normalize_axis(client_x, width);
        self.target_y = normalize_axis(client_y, height);
    }

    /// Advance one animation frame.
    pub fn step(&mut self) {
        self.x = lerp(self.x, self.target_x, PARALLAX_SMOOTHING);
        self.y = lerp(self.y, self.target_y, PARALLAX_SMOOTHING);
    }

    /// Pixel displacement for a layer at `depth`.
    #[must_use]
    pub fn offset(&self, depth: f64) -> (f64, f64) {
        (self.x * depth * PARALLAX_MULTIPLIER_PX, self.y * depth * PARALLAX_MULTIPLIER_PX)
    }

    /// CSS transform for a layer at `depth`; `translate3d` keeps it on the compositor.
    #[must_use]
    pub fn transform(&self, depth: f64) -> String {
        let (dx, dy) = self.offset(depth);
        format!("translate3d({dx}px, {dy}px, 0)")
    }

    /// Largest remaining distance to the target on either axis.
    #[must_use]
    pub fn distance_to_target(&self) -> f64 {
        (self.target_x - self.x).abs().max((self.target_y - self.y).abs())
    }
}
