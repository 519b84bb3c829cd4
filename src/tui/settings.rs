//! Settings editor form state.
//!
//! Three rows (work, short break, long break), each with hour/minute/second
//! text fields. Fields are free-text buffers so bad input can sit in the form
//! until Apply; validation checks all nine fields before a single config
//! value is written (validation-then-commit, never field-by-field).

use crate::config::SessionConfig;
use crate::error::{PomoglowError, Result};

/// Row labels, in display order.
pub const ROW_LABELS: [&str; 3] = ["Work", "Short Break", "Long Break"];

/// Unit suffix per column.
pub const FIELD_UNITS: [char; 3] = ['h', 'm', 's'];

/// Inclusive upper bound per column: 23 hours, 59 minutes, 59 seconds.
const FIELD_MAX: [u32; 3] = [23, 59, 59];

/// Field buffers cap at three characters.
const FIELD_CAPACITY: usize = 3;

/// Editable state of the settings overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    /// Text buffers, `values[row][col]`
    values: [[String; 3]; 3],
    /// Focused row
    pub row: usize,
    /// Focused column
    pub col: usize,
    /// Validation error from the last failed Apply
    pub error: Option<String>,
}

impl SettingsForm {
    /// Build a form pre-filled from the current configuration.
    pub fn from_config(config: &SessionConfig) -> Self {
        let values = [config.work, config.short_break, config.long_break].map(split_duration);
        Self {
            values,
            row: 0,
            col: 0,
            error: None,
        }
    }

    /// Text of one field.
    pub fn field(&self, row: usize, col: usize) -> &str {
        &self.values[row][col]
    }

    /// Whether the given field has focus.
    pub fn is_focused(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }

    /// Append a character to the focused field.
    pub fn push_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let field = &mut self.values[self.row][self.col];
        if field.len() < FIELD_CAPACITY {
            field.push(c);
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.values[self.row][self.col].pop();
    }

    /// Move focus to the next field, wrapping across rows.
    pub fn next_field(&mut self) {
        if self.col + 1 < FIELD_UNITS.len() {
            self.col += 1;
        } else {
            self.col = 0;
            self.row = (self.row + 1) % ROW_LABELS.len();
        }
    }

    /// Move focus to the previous field, wrapping across rows.
    pub fn prev_field(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else {
            self.col = FIELD_UNITS.len() - 1;
            self.row = (self.row + ROW_LABELS.len() - 1) % ROW_LABELS.len();
        }
    }

    /// Move focus one row up.
    pub fn row_up(&mut self) {
        self.row = (self.row + ROW_LABELS.len() - 1) % ROW_LABELS.len();
    }

    /// Move focus one row down.
    pub fn row_down(&mut self) {
        self.row = (self.row + 1) % ROW_LABELS.len();
    }

    /// Validate every field and produce the new configuration.
    ///
    /// Nothing in `current` is overwritten here; the caller commits the
    /// returned config only on `Ok`. Any parse or range failure rejects the
    /// whole form.
    pub fn validate(&self, current: &SessionConfig) -> Result<SessionConfig> {
        let mut totals = [0u32; 3];
        for (row, total) in totals.iter_mut().enumerate() {
            let mut secs = 0u32;
            for col in 0..FIELD_UNITS.len() {
                let value = parse_field(row, col, &self.values[row][col])?;
                secs += value * [3600, 60, 1][col];
            }
            *total = secs;
        }

        Ok(SessionConfig {
            work: totals[0],
            short_break: totals[1],
            long_break: totals[2],
            sessions_before_long_break: current.sessions_before_long_break,
        })
    }
}

/// Split a second count into (h, m, s) text buffers.
fn split_duration(secs: u32) -> [String; 3] {
    [
        (secs / 3600).to_string(),
        (secs % 3600 / 60).to_string(),
        (secs % 60).to_string(),
    ]
}

/// Parse one field as an integer within its column's range.
fn parse_field(row: usize, col: usize, value: &str) -> Result<u32> {
    let unit_name = match FIELD_UNITS[col] {
        'h' => "hours",
        'm' => "minutes",
        _ => "seconds",
    };
    let parsed: u32 = value.trim().parse().map_err(|_| PomoglowError::InvalidDuration {
        field: ROW_LABELS[row],
        reason: format!("{} must be a number, got \"{}\"", unit_name, value),
    })?;
    if parsed > FIELD_MAX[col] {
        return Err(PomoglowError::InvalidDuration {
            field: ROW_LABELS[row],
            reason: format!("{} must be at most {}", unit_name, FIELD_MAX[col]),
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SettingsForm {
        SettingsForm::from_config(&SessionConfig::default())
    }

    fn set(form: &mut SettingsForm, row: usize, values: [&str; 3]) {
        for (col, value) in values.iter().enumerate() {
            form.values[row][col] = value.to_string();
        }
    }

    #[test]
    fn test_prefilled_from_defaults() {
        let form = form();
        // 1500s = 0h 25m 0s
        assert_eq!(form.field(0, 0), "0");
        assert_eq!(form.field(0, 1), "25");
        assert_eq!(form.field(0, 2), "0");
        // 900s = 0h 15m 0s
        assert_eq!(form.field(2, 1), "15");
    }

    #[test]
    fn test_validate_defaults_round_trip() {
        let current = SessionConfig::default();
        let committed = form().validate(&current).unwrap();
        assert_eq!(committed, current);
    }

    #[test]
    fn test_two_and_a_half_hours_is_9000_seconds() {
        let mut form = form();
        set(&mut form, 0, ["2", "30", "0"]);
        let committed = form.validate(&SessionConfig::default()).unwrap();
        assert_eq!(committed.work, 9000);
    }

    #[test]
    fn test_non_numeric_field_rejects_whole_form() {
        let mut form = form();
        set(&mut form, 0, ["abc", "30", "0"]);
        let err = form.validate(&SessionConfig::default()).unwrap_err();
        assert!(matches!(err, PomoglowError::InvalidDuration { field: "Work", .. }));
    }

    #[test]
    fn test_out_of_range_minutes_rejected() {
        let mut form = form();
        set(&mut form, 1, ["0", "75", "0"]);
        let err = form.validate(&SessionConfig::default()).unwrap_err();
        assert!(matches!(err, PomoglowError::InvalidDuration { field: "Short Break", .. }));
    }

    #[test]
    fn test_out_of_range_hours_rejected() {
        let mut form = form();
        set(&mut form, 2, ["24", "0", "0"]);
        assert!(form.validate(&SessionConfig::default()).is_err());
    }

    #[test]
    fn test_empty_field_rejected() {
        let mut form = form();
        set(&mut form, 0, ["", "25", "0"]);
        assert!(form.validate(&SessionConfig::default()).is_err());
    }

    #[test]
    fn test_bad_row_does_not_leak_other_rows() {
        // Validation must reject everything; no partial commit is possible
        // because validate never mutates the config it was given.
        let current = SessionConfig::default();
        let mut form = SettingsForm::from_config(&current);
        set(&mut form, 0, ["1", "0", "0"]);
        set(&mut form, 2, ["x", "0", "0"]);
        assert!(form.validate(&current).is_err());
        assert_eq!(current, SessionConfig::default());
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = form();
        assert!(form.is_focused(0, 0));
        for _ in 0..3 {
            form.next_field();
        }
        assert!(form.is_focused(1, 0));
        form.prev_field();
        assert!(form.is_focused(0, 2));

        form.row_up();
        assert!(form.is_focused(2, 2));
        form.row_down();
        assert!(form.is_focused(0, 2));
    }

    #[test]
    fn test_editing_respects_capacity() {
        let mut form = form();
        form.values[0][0].clear();
        for c in "12345".chars() {
            form.push_char(c);
        }
        assert_eq!(form.field(0, 0), "123");
        form.backspace();
        assert_eq!(form.field(0, 0), "12");
    }
}
