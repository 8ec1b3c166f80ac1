//! Field rendering utilities for forms

use crate::state::Field;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one bordered field
pub const FIELD_HEIGHT: u16 = 3;

/// Draw one input: bordered box titled with the label, error in the bottom border
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    value: &str,
    error: Option<&str>,
    is_active: bool,
) {
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    // Keep the tail of long values visible while typing
    let inner_width = area.width.saturating_sub(3) as usize;
    let char_count = value.chars().count();
    let visible: String = if char_count > inner_width {
        value.chars().skip(char_count - inner_width).collect()
    } else {
        value.to_string()
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(visible, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let mut block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.block(block), area);
}

/// Label with the required marker where applicable
fn field_title(field: Field) -> Line<'static> {
    let mut spans = vec![Span::raw(format!(" {}", field.label()))];
    if field.is_required() {
        spans.push(Span::styled("*", Style::default().fg(Color::Red)));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_title_has_marker() {
        assert_eq!(field_title(Field::BrandName).to_string(), " Brand Name* ");
    }

    #[test]
    fn test_optional_title_has_no_marker() {
        assert_eq!(field_title(Field::Website).to_string(), " Brand website/ ecommerce store ");
        assert_eq!(field_title(Field::Instagram).to_string(), " Instagram Handle ");
    }
}
