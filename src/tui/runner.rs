//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, event handler, alarm, and the
//! countdown worker channel. It runs the main loop: render → handle events →
//! process actions → repeat. Worker updates arrive over the mpsc channel and
//! are drained on the tick, so the worker thread never touches the UI.

use super::Tui;
use super::app::{App, PendingAction};
use super::events::{Event, EventHandler};
use super::views::render;
use crate::audio::Alarm;
use crate::config::SessionConfig;
use crate::countdown::{self, TimerUpdate};
use crate::session::format_clock;
use eyre::Result;
use log::{error, info};
use std::sync::mpsc::{self, Receiver, Sender};

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    /// The terminal instance
    terminal: Tui,
    /// Application state and input handling
    app: App,
    /// Event handler for keyboard and tick events
    event_handler: EventHandler,
    /// The looping alarm, rung on phase expiry
    alarm: Alarm,
    /// Sender cloned into each countdown worker
    updates_tx: Sender<TimerUpdate>,
    /// Receiver drained on every tick
    updates_rx: Receiver<TimerUpdate>,
}

impl TuiRunner {
    /// Create a new TUI runner.
    pub fn new(terminal: Tui, alarm: Alarm) -> Self {
        let (updates_tx, updates_rx) = mpsc::channel();
        Self {
            terminal,
            app: App::new(SessionConfig::default()),
            event_handler: EventHandler::default(),
            alarm,
            updates_tx,
            updates_rx,
        }
    }

    /// Get a reference to the app.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the app.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Run the main TUI loop.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        loop {
            // 1. Render current state
            self.terminal.draw(|f| render(self.app.state(), f))?;

            // 2. Handle events (keyboard, tick)
            match self.event_handler.next().await? {
                Event::Key(key) => self.app.handle_key(key),
                Event::Tick => {
                    self.drain_updates();
                    self.app.state_mut().blobs.advance();
                }
                Event::Resize(_, _) => {
                    // Terminal will handle resize on next draw
                }
            }

            // 3. Process pending actions
            self.process_pending_actions();

            // 4. Check for quit
            if self.app.state().should_quit {
                break;
            }
        }

        // Let any live worker wind down and cut the alarm before the
        // terminal is restored.
        self.app.state_mut().session.reset();
        self.alarm.silence();
        info!("TUI main loop ended");
        Ok(())
    }

    /// Drain worker updates published since the last tick.
    fn drain_updates(&mut self) {
        while let Ok(update) = self.updates_rx.try_recv() {
            match update {
                TimerUpdate::Remaining(_) => self.app.apply_update(update),
                TimerUpdate::Expired => self.handle_expiry(),
            }
        }
    }

    /// Run the expiry transition: Running → Idle → Running.
    ///
    /// Notifies the user and immediately auto-advances into the next phase;
    /// the popup and alarm never block the next countdown.
    fn handle_expiry(&mut self) {
        let state = self.app.state_mut();
        let finished = state.phase_label.clone();
        state.completed = state.session.on_expiry();
        info!(
            "Phase expired: {} (pomodoros: {})",
            finished, state.completed
        );

        // A still-open popup just gets the newer label; the alarm keeps
        // looping until acknowledged.
        state.alert = Some(finished);
        if let Err(e) = self.alarm.ring() {
            error!("Failed to ring alarm: {}", e);
        }

        self.start_countdown();
    }

    /// Start the next phase if no countdown is active.
    fn start_countdown(&mut self) {
        let state = self.app.state_mut();
        if let Some((phase, seconds)) = state.session.start(&state.config) {
            state.phase_label = phase.label().to_string();
            state.clock = format_clock(seconds);
            info!("Starting rep {}: {:?} for {}s", state.session.rep_count(), phase, seconds);
            // Detached by design: the worker exits on its own via the flag.
            let _ = countdown::spawn(seconds, state.session.running_flag(), self.updates_tx.clone());
        }
    }

    /// Process pending actions from user input.
    fn process_pending_actions(&mut self) {
        if let Some(action) = self.app.state_mut().pending_action.take() {
            match action {
                PendingAction::StartCountdown => self.start_countdown(),
                PendingAction::DismissAlert => {
                    self.alarm.silence();
                    self.app.state_mut().alert = None;
                }
            }
        }
    }

}
