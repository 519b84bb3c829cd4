//! Pomoglow - a Pomodoro timer with an animated blob background
//!
//! Alternating work/break countdowns with a per-second worker thread, a
//! looping alarm on expiry, and a purely decorative field of drifting,
//! pulsing blobs behind the clock.

pub mod animation;
pub mod audio;
pub mod cli;
pub mod config;
pub mod countdown;
pub mod error;
pub mod session;
pub mod tui;

pub use error::{PomoglowError, Result};
