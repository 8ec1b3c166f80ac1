//! Toast notifications drawn over the top-right corner

use crate::state::{Notification, NotificationQueue, Severity};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum toast width including borders
const TOAST_WIDTH: u16 = 44;

/// Render the toast stack, newest on top
pub fn render_toasts(frame: &mut Frame, queue: &NotificationQueue) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);
    let mut y = area.y;

    for toast in queue.toasts().iter().rev() {
        let lines = toast_lines(&toast.notification, width.saturating_sub(4) as usize);
        let height = lines.len() as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }

        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y,
            width,
            height,
        };
        let border_color = match toast.notification.severity {
            Severity::Normal => Color::Green,
            Severity::Destructive => Color::Red,
        };

        frame.render_widget(Clear, toast_area);
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .style(Style::default().bg(Color::Black)),
        );
        frame.render_widget(paragraph, toast_area);

        y += height;
    }
}

/// Title line followed by the wrapped description
fn toast_lines(notification: &Notification, max_width: usize) -> Vec<Line<'static>> {
    let title_color = match notification.severity {
        Severity::Normal => Color::Green,
        Severity::Destructive => Color::Red,
    };
    let mut lines = vec![Line::from(Span::styled(
        format!(" {}", notification.title),
        Style::default()
            .fg(title_color)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.extend(
        wrap_text(&notification.description, max_width)
            .into_iter()
            .map(|l| Line::from(format!(" {l}"))),
    );
    lines
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let width = current_line.chars().count() + word.chars().count() + 1;
            if width > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}
