//! Confirmation shown after the enquiry was accepted

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draw the confirmation for `email`
pub fn draw(frame: &mut Frame, area: Rect, email: &str) {
    let paragraph = Paragraph::new(success_lines(email))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Confirmation text with `email` embedded verbatim
pub fn success_lines(email: &str) -> Vec<Line<'_>> {
    let muted = Style::default().fg(Color::Gray);
    vec![
        Line::from(""),
        Line::from(Span::styled(
            "( ✔ )",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Thank You!",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Your enquiry has been successfully submitted. We will reach out to you at ",
                muted,
            ),
            Span::styled(email, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" within 24 hours.", muted),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "In the meantime, feel free to explore our services or follow us on social media for the latest updates.",
            Style::default().fg(Color::Magenta),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("← ", Style::default().fg(Color::Magenta)),
            Span::styled("Back to Homepage", Style::default().fg(Color::Magenta)),
            Span::styled("  (Enter)", Style::default().fg(Color::DarkGray)),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embeds_email_verbatim() {
        let lines = success_lines("Jo.Smith+brand@Example.com");
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l
            == "Your enquiry has been successfully submitted. We will reach out to you at Jo.Smith+brand@Example.com within 24 hours."));
    }

    #[test]
    fn test_has_heading_and_back_hint() {
        let text: Vec<String> = success_lines("a@b.co").iter().map(|l| l.to_string()).collect();
        assert!(text.contains(&"Thank You!".to_string()));
        assert!(text.iter().any(|l| l.contains("Back to Homepage")));
    }

    #[test]
    fn test_empty_email_still_renders() {
        assert_eq!(success_lines("").len(), 10);
    }
}
