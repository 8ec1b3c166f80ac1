//! Page shell: marketing panel on the left, the contact form on the right

use super::forms::draw_contact_form;
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Below this width the welcome panel is hidden
const TWO_COLUMN_MIN_WIDTH: u16 = 90;
/// Width of the welcome panel in two-column mode
const WELCOME_WIDTH: u16 = 34;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let form_area = if inner.width >= TWO_COLUMN_MIN_WIDTH {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(WELCOME_WIDTH), Constraint::Min(0)])
            .split(inner);
        draw_welcome(frame, columns[0]);
        columns[1]
    } else {
        inner
    };

    draw_form_panel(frame, form_area, state);
}

fn draw_welcome(frame: &mut Frame, area: Rect) {
    let panel = Block::default()
        .style(Style::default().bg(Color::Magenta).fg(Color::White));
    let inner = panel.inner(area);
    frame.render_widget(panel, area);

    let padded = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(7)])
        .margin(2)
        .split(inner);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("We're excited to hear from you and learn more about your brand."),
        Line::from(""),
        Line::from("Fill out the form and our team will get back to you within 24 hours."),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(intro, padded[0]);

    let contact = Paragraph::new(vec![
        Line::from(Span::styled(
            "⌖ Our Location",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  123 Business Ave, Suite 100"),
        Line::from(""),
        Line::from(Span::styled(
            "✆ Contact Us",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  info@udm.com"),
    ]);
    frame.render_widget(contact, padded[1]);
}

fn draw_form_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Heading
            Constraint::Min(0),    // Form
        ])
        .horizontal_margin(2)
        .vertical_margin(1)
        .split(area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let heading = Paragraph::new(vec![
        Line::from(Span::styled("Fuel Your Brand's Goals", bold)),
        Line::from(vec![
            Span::styled("with ", bold),
            Span::styled("UDM", bold.fg(Color::Magenta)),
        ]),
        Line::from(Span::styled(
            "You will get a response within 24 hours. We will reach you soon.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(heading, chunks[0]);

    draw_contact_form(frame, chunks[1], state);
}
