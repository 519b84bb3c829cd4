//! Decorative background animation.
//!
//! A fixed set of drifting, pulsing blobs rendered behind the timer. The
//! animation advances on the UI tick and has no interaction with session or
//! countdown state.

mod blob;
mod color;
mod field;

pub use blob::{Blob, LAYER_ALPHAS, LAYER_OFFSET};
pub use color::{Rgb, dim, pulse};
pub use field::{BLOB_COUNT, BlobField, CANVAS_HEIGHT, CANVAS_WIDTH};
