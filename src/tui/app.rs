//! TUI application state and input handling.
//!
//! `App` owns all mutable UI state and translates key presses into either
//! direct state changes or `PendingAction`s for the runner to execute. Pure
//! state transitions (reset, opening the settings form, committing validated
//! settings) happen here; anything that needs the runner's resources (the
//! worker channel, the alarm sink) is deferred.

use super::settings::SettingsForm;
use crate::animation::BlobField;
use crate::config::SessionConfig;
use crate::countdown::TimerUpdate;
use crate::session::{IDLE_LABEL, SessionState, format_clock};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;

/// What the input layer currently routes keys to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionMode {
    /// Main view key bindings
    Normal,
    /// Settings overlay open, editing durations
    Settings(SettingsForm),
}

/// Actions that need the runner's resources to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Start the next phase's countdown worker
    StartCountdown,
    /// Acknowledge the notification: stop the alarm, close the popup
    DismissAlert,
}

/// All mutable state for the TUI.
#[derive(Debug)]
pub struct AppState {
    /// Rep counter and running flag
    pub session: SessionState,
    /// Configured durations
    pub config: SessionConfig,
    /// Decorative background
    pub blobs: BlobField,
    /// Displayed countdown, `mm:ss`
    pub clock: String,
    /// Displayed phase label
    pub phase_label: String,
    /// Displayed completed-pomodoro count
    pub completed: u32,
    /// Current input mode
    pub mode: InteractionMode,
    /// Finished-phase label while the notification popup is open.
    ///
    /// Kept separate from `mode` so an expiry can fire over the settings
    /// overlay without losing the user's edits.
    pub alert: Option<String>,
    /// Action awaiting the runner
    pub pending_action: Option<PendingAction>,
    /// Whether the application should quit
    pub should_quit: bool,
}

/// Main TUI application.
pub struct App {
    state: AppState,
}

impl App {
    /// Create the startup application state.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: AppState {
                session: SessionState::new(),
                config,
                blobs: BlobField::new(),
                clock: format_clock(0),
                phase_label: IDLE_LABEL.to_string(),
                completed: 0,
                mode: InteractionMode::Normal,
                alert: None,
                pending_action: None,
                should_quit: false,
            },
        }
    }

    /// Get a reference to the state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a mutable reference to the state.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Apply a countdown worker update to the displayed clock.
    pub fn apply_update(&mut self, update: TimerUpdate) {
        if let TimerUpdate::Remaining(secs) = update {
            self.state.clock = format_clock(secs);
        }
    }

    /// Return to the idle state.
    ///
    /// Any live worker notices the lowered flag within a second and exits
    /// without reporting an expiry.
    pub fn reset(&mut self) {
        self.state.session.reset();
        self.state.clock = format_clock(0);
        self.state.phase_label = IDLE_LABEL.to_string();
        self.state.completed = 0;
        info!("Timer reset");
    }

    /// Route a key press according to the current mode.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.should_quit = true;
            return;
        }

        // The notification popup is modal: only acknowledgement (or quit)
        // gets through while it is open.
        if self.state.alert.is_some() {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    self.state.pending_action = Some(PendingAction::DismissAlert);
                }
                KeyCode::Char('q') => self.state.should_quit = true,
                _ => {}
            }
            return;
        }

        match &mut self.state.mode {
            InteractionMode::Normal => self.handle_normal_key(key),
            InteractionMode::Settings(_) => self.handle_settings_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => {
                self.state.pending_action = Some(PendingAction::StartCountdown);
            }
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('o') => {
                self.state.mode = InteractionMode::Settings(SettingsForm::from_config(&self.state.config));
            }
            KeyCode::Char('q') => self.state.should_quit = true,
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        let InteractionMode::Settings(form) = &mut self.state.mode else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.state.mode = InteractionMode::Normal;
            }
            KeyCode::Enter => match form.validate(&self.state.config) {
                Ok(config) => {
                    info!(
                        "Settings applied: work={}s short={}s long={}s",
                        config.work, config.short_break, config.long_break
                    );
                    self.state.config = config;
                    self.state.mode = InteractionMode::Normal;
                }
                Err(e) => {
                    // Reject the whole form; the overlay stays open.
                    form.error = Some(e.to_string());
                }
            },
            KeyCode::Tab | KeyCode::Right => form.next_field(),
            KeyCode::BackTab | KeyCode::Left => form.prev_field(),
            KeyCode::Up => form.row_up(),
            KeyCode::Down => form.row_down(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.push_char(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(SessionConfig::default())
    }

    #[test]
    fn test_startup_state() {
        let app = app();
        let state = app.state();
        assert_eq!(state.clock, "00:00");
        assert_eq!(state.phase_label, IDLE_LABEL);
        assert_eq!(state.completed, 0);
        assert_eq!(state.mode, InteractionMode::Normal);
        assert!(state.alert.is_none());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_start_key_defers_to_runner() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.state().pending_action, Some(PendingAction::StartCountdown));
    }

    #[test]
    fn test_reset_key_clears_display() {
        let mut app = app();
        app.state_mut().session.start(&SessionConfig::default());
        app.state_mut().clock = "12:34".to_string();
        app.state_mut().completed = 3;

        app.handle_key(key(KeyCode::Char('r')));

        let state = app.state();
        assert_eq!(state.clock, "00:00");
        assert_eq!(state.phase_label, IDLE_LABEL);
        assert_eq!(state.completed, 0);
        assert_eq!(state.session.rep_count(), 0);
        assert!(!state.session.is_running());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.state().should_quit);

        let mut app = App::new(SessionConfig::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().should_quit);
    }

    #[test]
    fn test_settings_open_edit_commit() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('o')));
        assert!(matches!(app.state().mode, InteractionMode::Settings(_)));

        // Rewrite work hours to "2" and minutes to "30": h field first
        for c in [KeyCode::Backspace, KeyCode::Char('2')] {
            app.handle_key(key(c));
        }
        app.handle_key(key(KeyCode::Tab));
        for c in [KeyCode::Backspace, KeyCode::Backspace, KeyCode::Char('3'), KeyCode::Char('0')] {
            app.handle_key(key(c));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.state().mode, InteractionMode::Normal);
        assert_eq!(app.state().config.work, 2 * 3600 + 30 * 60);
    }

    #[test]
    fn test_settings_invalid_input_keeps_overlay_and_config() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('o')));
        // Turn the work hours field into "x"
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Enter));

        match &app.state().mode {
            InteractionMode::Settings(form) => assert!(form.error.is_some()),
            other => panic!("settings overlay closed: {:?}", other),
        }
        assert_eq!(app.state().config, SessionConfig::default());
    }

    #[test]
    fn test_settings_escape_discards_edits() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('o')));
        app.handle_key(key(KeyCode::Char('9')));
        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.state().mode, InteractionMode::Normal);
        assert_eq!(app.state().config, SessionConfig::default());
    }

    #[test]
    fn test_alert_is_modal() {
        let mut app = app();
        app.state_mut().alert = Some("Work Session".to_string());

        // Normal bindings are gated off
        app.handle_key(key(KeyCode::Char('s')));
        assert!(app.state().pending_action.is_none());

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().pending_action, Some(PendingAction::DismissAlert));
    }

    #[test]
    fn test_apply_update_formats_clock() {
        let mut app = app();
        app.apply_update(TimerUpdate::Remaining(754));
        assert_eq!(app.state().clock, "12:34");
        // Expired is the runner's concern, not a clock change
        app.apply_update(TimerUpdate::Expired);
        assert_eq!(app.state().clock, "12:34");
    }
}
