//! The blob collection.
//!
//! A fixed-size set of blobs created once at startup and advanced on every
//! animation tick for the lifetime of the main window. Entirely decorative:
//! nothing here reads or writes session state.

use super::blob::Blob;
use rand::Rng;
use rand::seq::SliceRandom;

/// Logical canvas width.
pub const CANVAS_WIDTH: f64 = 500.0;

/// Logical canvas height.
pub const CANVAS_HEIGHT: f64 = 350.0;

/// How many blobs drift around the background.
pub const BLOB_COUNT: usize = 12;

/// Base color palette the blobs are drawn from.
const PALETTE: [(u8, u8, u8); 6] = [
    (0xff, 0x6b, 0x6b),
    (0xfe, 0xca, 0x57),
    (0x48, 0xdb, 0xfb),
    (0x1d, 0xd1, 0xa1),
    (0x5f, 0x27, 0xcd),
    (0xff, 0x9f, 0xf3),
];

/// Owns the blobs and the canvas bounds they bounce within.
#[derive(Debug, Clone)]
pub struct BlobField {
    blobs: Vec<Blob>,
}

impl BlobField {
    /// Create the startup collection with randomized positions, sizes,
    /// velocities, and palette colors.
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        let blobs = (0..BLOB_COUNT)
            .map(|_| {
                let size = rng.gen_range(50.0..=150.0);
                let x = rng.gen_range(0.0..CANVAS_WIDTH - 150.0);
                let y = rng.gen_range(0.0..CANVAS_HEIGHT - 150.0);
                let dx = random_speed(&mut rng);
                let dy = random_speed(&mut rng);
                let color = *PALETTE.choose(&mut rng).unwrap_or(&PALETTE[0]);
                let phase = rng.gen_range(0.0..std::f64::consts::PI);
                Blob::new(x, y, size, color, dx, dy, phase)
            })
            .collect();
        Self { blobs }
    }

    /// Advance every blob one tick.
    pub fn advance(&mut self) {
        for blob in &mut self.blobs {
            blob.advance(CANVAS_WIDTH, CANVAS_HEIGHT);
        }
    }

    /// The blobs, for rendering.
    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }
}

impl Default for BlobField {
    fn default() -> Self {
        Self::new()
    }
}

/// A speed in ±(0.2..0.8) canvas units per tick, sign chosen at random.
fn random_speed(rng: &mut impl Rng) -> f64 {
    let magnitude = rng.gen_range(0.2..=0.8);
    if rng.gen_bool(0.5) { magnitude } else { -magnitude }
}
