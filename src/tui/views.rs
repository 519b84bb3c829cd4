//! TUI rendering.
//!
//! The main view draws the blob canvas across the whole frame, then layers
//! the phase label, countdown clock, pomodoro counter, and key hints on top.
//! The settings and notification overlays render last, over everything else.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph,
        canvas::{Canvas, Circle},
    },
};

use super::app::{AppState, InteractionMode};
use super::colors;
use super::settings::{FIELD_UNITS, ROW_LABELS, SettingsForm};
use crate::animation::{CANVAS_HEIGHT, CANVAS_WIDTH, LAYER_ALPHAS};

/// Render the whole frame from the current state.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();
    render_background(state, frame, area);
    render_timer(state, frame, area);

    if let InteractionMode::Settings(form) = &state.mode {
        render_settings(form, frame, area);
    }
    if let Some(label) = &state.alert {
        render_alert(label, frame, area);
    }
}

/// The blob canvas, mapped from its fixed 500x350 logical space.
fn render_background(state: &AppState, frame: &mut Frame, area: Rect) {
    let canvas = Canvas::default()
        .background_color(ratatui::style::Color::Black)
        .marker(Marker::Braille)
        .x_bounds([0.0, CANVAS_WIDTH])
        .y_bounds([0.0, CANVAS_HEIGHT])
        .paint(|ctx| {
            for blob in state.blobs.blobs() {
                // Outermost (largest offset) first so inner layers sit on top
                for layer in (0..LAYER_ALPHAS.len()).rev() {
                    let (x, y) = blob.layer_origin(layer);
                    let (r, g, b) = blob.layer_color(layer);
                    let radius = blob.size / 2.0;
                    ctx.draw(&Circle {
                        x: x + radius,
                        // Canvas y points up; blob space points down
                        y: CANVAS_HEIGHT - (y + radius),
                        radius,
                        color: ratatui::style::Color::Rgb(r, g, b),
                    });
                }
            }
        });
    frame.render_widget(canvas, area);
}

/// Phase label, clock, counter, and the key-hint row.
fn render_timer(state: &AppState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(15), // top padding
            Constraint::Length(1),      // phase label
            Constraint::Percentage(15),
            Constraint::Length(1), // clock
            Constraint::Percentage(10),
            Constraint::Length(1), // pomodoro counter
            Constraint::Min(0),
            Constraint::Length(1), // key hints
        ])
        .split(area);

    let phase = Paragraph::new(state.phase_label.as_str())
        .style(Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(phase, chunks[1]);

    let clock = Paragraph::new(state.clock.as_str())
        .style(Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(clock, chunks[3]);

    let counter = Paragraph::new(format!("Pomodoros: {}", state.completed))
        .style(Style::default().fg(colors::TEXT))
        .alignment(Alignment::Center);
    frame.render_widget(counter, chunks[5]);

    let hints = Line::from(vec![
        Span::styled("s", Style::default().fg(colors::ACCENT)),
        Span::styled(" start │ ", Style::default().fg(colors::DIM)),
        Span::styled("r", Style::default().fg(colors::ACCENT)),
        Span::styled(" reset │ ", Style::default().fg(colors::DIM)),
        Span::styled("o", Style::default().fg(colors::ACCENT)),
        Span::styled(" settings │ ", Style::default().fg(colors::DIM)),
        Span::styled("q", Style::default().fg(colors::ACCENT)),
        Span::styled(" quit", Style::default().fg(colors::DIM)),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[7]);
}

/// The settings overlay: three duration rows plus any validation error.
fn render_settings(form: &SettingsForm, frame: &mut Frame, area: Rect) {
    let popup = centered_rect(46, 9, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::ACCENT))
        .title(" Settings ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // work
            Constraint::Length(1), // short break
            Constraint::Length(1), // long break
            Constraint::Length(1), // spacer
            Constraint::Length(1), // error
            Constraint::Length(1), // hints
        ])
        .split(inner);

    for (row, label) in ROW_LABELS.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!(" {:<12}", label),
            Style::default().fg(colors::TEXT),
        )];
        for (col, unit) in FIELD_UNITS.iter().enumerate() {
            let style = if form.is_focused(row, col) {
                Style::default().fg(colors::TEXT).bg(colors::ACCENT)
            } else {
                Style::default().fg(colors::TEXT)
            };
            spans.push(Span::styled(format!("[{:>3}]", form.field(row, col)), style));
            spans.push(Span::styled(format!("{} ", unit), Style::default().fg(colors::DIM)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), rows[row]);
    }

    if let Some(error) = &form.error {
        let error_line = Paragraph::new(error.as_str())
            .style(Style::default().fg(colors::ERROR))
            .alignment(Alignment::Center);
        frame.render_widget(error_line, rows[4]);
    }

    let hints = Paragraph::new("Enter apply │ Esc cancel │ Tab next field")
        .style(Style::default().fg(colors::DIM))
        .alignment(Alignment::Center);
    frame.render_widget(hints, rows[5]);
}

/// The notification popup shown on phase expiry.
fn render_alert(finished_label: &str, frame: &mut Frame, area: Rect) {
    let popup = centered_rect(30, 5, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::ACCENT))
        .title(" Pomodoro Finished ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(format!("{} Finished!", finished_label))
        .style(Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(message, rows[0]);

    let ok = Paragraph::new("[ OK ]")
        .style(Style::default().fg(colors::ACCENT))
        .alignment(Alignment::Center);
    frame.render_widget(ok, rows[2]);
}

/// A fixed-size rect centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
