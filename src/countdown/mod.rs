//! Countdown worker.
//!
//! One dedicated background thread per active countdown; at most one is alive
//! at a time because the session state machine refuses to start while its
//! running flag is raised. The worker never touches the UI directly: every
//! display update travels over an mpsc channel that the UI loop drains on its
//! own tick.

use log::{debug, info};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Messages published by the countdown worker to the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerUpdate {
    /// Seconds remaining in the active phase
    Remaining(u32),
    /// The countdown reached zero while still running
    Expired,
}

/// Spawn the per-second countdown thread.
///
/// Publishes `Remaining` once per second, then `Expired` exactly once on
/// natural expiry. If `running` is lowered mid-count (a reset), the loop exits
/// on its next poll without publishing `Expired`; reset latency is therefore
/// at most about one second.
pub fn spawn(seconds: u32, running: Arc<AtomicBool>, updates: Sender<TimerUpdate>) -> JoinHandle<()> {
    info!("Countdown worker starting: {}s", seconds);

    thread::spawn(move || {
        let mut count = seconds;

        while count > 0 && running.load(Ordering::SeqCst) {
            // A closed channel means the UI is gone; nothing left to do.
            if updates.send(TimerUpdate::Remaining(count)).is_err() {
                return;
            }
            thread::sleep(Duration::from_secs(1));
            count -= 1;
        }

        if running.load(Ordering::SeqCst) {
            debug!("Countdown expired naturally");
            let _ = updates.send(TimerUpdate::Expired);
        } else {
            debug!("Countdown cancelled at {}s remaining", count);
        }
    })
}
