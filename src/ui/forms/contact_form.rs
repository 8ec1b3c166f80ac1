//! Contact form rendering: the ten inputs and the submit button

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::state::{AppState, Field, SUBMIT_BUTTON_INDEX};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::success_message;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};
use std::ops::Range;

/// Frames of the spinner shown while submitting
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Draw the form, or the success message once the enquiry was accepted
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.form.is_submitted() {
        success_message::draw(frame, area, &state.form.values().email);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(FIELD_HEIGHT),     // Fields
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .split(area);

    draw_fields(frame, chunks[0], state);
    draw_submit_button(frame, chunks[1], state);
}

fn draw_fields(frame: &mut Frame, area: Rect, state: &AppState) {
    let capacity = (area.height / FIELD_HEIGHT) as usize;
    let active = state.active_form_field.min(Field::ALL.len() - 1);
    let window = visible_window(active, Field::ALL.len(), capacity);

    let constraints: Vec<Constraint> = window
        .clone()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, field) in Field::ALL[window].iter().enumerate() {
        draw_field(
            frame,
            rows[row],
            *field,
            state.form.values().get(*field),
            state.form.errors().get(*field),
            state.active_form_field == field.index(),
        );
    }
}

fn draw_submit_button(frame: &mut Frame, area: Rect, state: &AppState) {
    let label = submit_label(state);
    render_button(
        frame,
        area,
        &label,
        state.active_form_field == SUBMIT_BUTTON_INDEX,
        !state.form.is_submitting(),
        Color::Magenta,
    );
}

/// Button text for the current lifecycle state
pub fn submit_label(state: &AppState) -> String {
    if state.form.is_submitting() {
        let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
        format!("{spinner} Processing...")
    } else {
        "Send Enquiry →".to_string()
    }
}

/// Range of field indices to draw so that `active` stays visible
fn visible_window(active: usize, total: usize, capacity: usize) -> Range<usize> {
    if capacity >= total {
        return 0..total;
    }
    if capacity == 0 {
        return 0..0;
    }
    let start = active.saturating_sub(capacity - 1);
    start..start + capacity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Notification, SubmissionState};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    mod window {
        use super::*;

        #[test]
        fn test_everything_fits() {
            assert_eq!(visible_window(7, 10, 12), 0..10);
        }

        #[test]
        fn test_scrolls_to_keep_active_visible() {
            assert_eq!(visible_window(0, 10, 4), 0..4);
            assert_eq!(visible_window(3, 10, 4), 0..4);
            assert_eq!(visible_window(4, 10, 4), 1..5);
            assert_eq!(visible_window(9, 10, 4), 6..10);
        }

        #[test]
        fn test_no_room() {
            assert_eq!(visible_window(5, 10, 0), 0..0);
        }
    }

    mod label {
        use super::*;

        #[test]
        fn test_idle_label() {
            assert_eq!(submit_label(&AppState::default()), "Send Enquiry →");
        }

        #[test]
        fn test_processing_label() {
            let mut state = AppState::default();
            for (field, value) in [
                (Field::Name, "Jo"),
                (Field::Email, "jo@x.com"),
                (Field::Phone, "12345"),
                (Field::BrandName, "Acme"),
                (Field::Category, "Fashion"),
                (Field::Query, "Need pricing"),
            ] {
                state.form.handle_change(field, value.to_string());
            }
            let mut sink: Vec<Notification> = Vec::new();
            state.form.begin_submit(&mut sink);
            assert_eq!(state.form.state(), SubmissionState::Submitting);
            assert!(submit_label(&state).ends_with("Processing..."));
        }
    }

    #[test]
    fn test_draws_labels_and_errors() {
        let mut state = AppState::default();
        state.form.validate();
        let text = render(&state, 70, 40);
        assert!(text.contains("Name*"));
        assert!(text.contains("Name must be at least 2 characters long"));
        assert!(text.contains("Send Enquiry"));
    }

    #[test]
    fn test_draws_success_message_when_submitted() {
        let mut state = AppState::default();
        for (field, value) in [
            (Field::Name, "Jo"),
            (Field::Email, "jo@x.com"),
            (Field::Phone, "12345"),
            (Field::BrandName, "Acme"),
            (Field::Category, "Fashion"),
            (Field::Query, "Need pricing"),
        ] {
            state.form.handle_change(field, value.to_string());
        }
        let mut sink: Vec<Notification> = Vec::new();
        state.form.begin_submit(&mut sink);
        state
            .form
            .complete_submit(Ok(crate::enquiry::EnquiryReceipt::new()), &mut sink);

        let text = render(&state, 80, 30);
        assert!(text.contains("Thank You!"));
        assert!(!text.contains("Send Enquiry"));
    }
}
