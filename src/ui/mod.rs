//! UI module for rendering the TUI

mod components;
mod enquiry_page;
mod forms;
mod layout;
mod success_message;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (page_area, status_area) = layout::create_layout(frame.area());

    enquiry_page::draw(frame, page_area, &app.state);
    layout::draw_status_bar(frame, status_area, app);

    // Toasts float over everything else
    components::render_toasts(frame, &app.state.notifications);
}
