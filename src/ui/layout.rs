//! Layout components (page area, status bar)

use crate::app::App;
use crate::state::SubmissionState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into page content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state.form.state();

    let indicator = match state {
        SubmissionState::Editing => Span::styled(" ● ", Style::default().fg(Color::Cyan)),
        SubmissionState::Submitting => Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
        SubmissionState::Submitted => Span::styled(" ✔ ", Style::default().fg(Color::Green)),
    };

    let mut spans = vec![
        indicator,
        Span::styled(get_hints(state), Style::default().fg(Color::Gray)),
    ];

    if let Some(receipt) = app.state.form.receipt() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!(
                "Ref {} · {}",
                receipt.reference,
                receipt.submitted_at.format("%H:%M:%S UTC")
            ),
            Style::default().fg(Color::Green),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current lifecycle state
fn get_hints(state: SubmissionState) -> String {
    match state {
        SubmissionState::Editing => format!(
            "Tab/↓:next  S-Tab/↑:prev  Enter/{}:send  Esc:dismiss",
            crate::platform::SUBMIT_SHORTCUT
        ),
        SubmissionState::Submitting => "Sending your enquiry...".to_string(),
        SubmissionState::Submitted => "Enter/q/Esc:back to homepage".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_status_line() {
        let (content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_hints_per_state() {
        assert!(get_hints(SubmissionState::Editing).contains("Ctrl+S:send"));
        assert_eq!(
            get_hints(SubmissionState::Submitting),
            "Sending your enquiry..."
        );
        assert!(get_hints(SubmissionState::Submitted).contains("homepage"));
    }
}
