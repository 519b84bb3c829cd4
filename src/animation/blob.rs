//! One decorative blob.
//!
//! A blob is three concentric translucent layers sharing a base color, a
//! position delta, and a continuously advancing pulse phase. It bounces off
//! the edges of the logical canvas and slowly shifts color as it drifts.

use super::color::{self, Rgb};

/// Fixed opacity coefficient per layer, outermost first.
pub const LAYER_ALPHAS: [f64; 3] = [0.4, 0.25, 0.1];

/// Diagonal offset between successive layers.
pub const LAYER_OFFSET: f64 = 5.0;

/// Phase advance per animation tick.
const PHASE_STEP: f64 = 0.02;

/// A moving, pulsing background shape.
#[derive(Debug, Clone)]
pub struct Blob {
    /// Top-left corner of the innermost layer
    pub x: f64,
    pub y: f64,
    /// Velocity in canvas units per tick
    pub dx: f64,
    pub dy: f64,
    /// Diameter of each layer
    pub size: f64,
    base_color: Rgb,
    phase: f64,
}

impl Blob {
    pub fn new(x: f64, y: f64, size: f64, base_color: Rgb, dx: f64, dy: f64, phase: f64) -> Self {
        Self {
            x,
            y,
            dx,
            dy,
            size,
            base_color,
            phase,
        }
    }

    /// Width/height of the bounding box covering all three layers.
    fn extent(&self) -> f64 {
        self.size + LAYER_OFFSET * (LAYER_ALPHAS.len() - 1) as f64
    }

    /// Advance one tick: bounce off canvas edges, move, advance the pulse.
    ///
    /// Velocity components invert once per axis when the bounding box crosses
    /// the corresponding canvas border.
    pub fn advance(&mut self, width: f64, height: f64) {
        if self.x + self.extent() >= width || self.x <= 0.0 {
            self.dx = -self.dx;
        }
        if self.y + self.extent() >= height || self.y <= 0.0 {
            self.dy = -self.dy;
        }
        self.x += self.dx;
        self.y += self.dy;
        self.phase += PHASE_STEP;
    }

    /// Top-left corner of the given layer.
    pub fn layer_origin(&self, layer: usize) -> (f64, f64) {
        let offset = LAYER_OFFSET * layer as f64;
        (self.x + offset, self.y + offset)
    }

    /// Current display color of the given layer.
    ///
    /// Base channels are dimmed by the layer alpha, then pulsed with
    /// per-channel phase offsets so the shift reads as a hue drift.
    pub fn layer_color(&self, layer: usize) -> Rgb {
        let alpha = LAYER_ALPHAS[layer];
        let phase = self.phase + layer as f64;
        (
            color::pulse(self.base_color.0, alpha, phase, 0.0),
            color::pulse(self.base_color.1, alpha, phase, 1.0),
            color::pulse(self.base_color.2, alpha, phase, 2.0),
        )
    }
}
