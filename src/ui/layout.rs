use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use super::{
    components::{render_footer, render_title, render_toasts},
    feedback::render_feedback_card,
    search::{render_search_box, render_suggestions},
    ticker::render_ticker_panel,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title and search box
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[0]);

    render_title(f, header_chunks[0]);
    render_search_box(f, app, header_chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Selected ticker
            Constraint::Percentage(60), // Feedback card
        ])
        .split(chunks[1]);

    render_ticker_panel(f, app, main_chunks[0]);
    render_feedback_card(f, app, main_chunks[1]);
    render_footer(f, app, chunks[2]);

    // Overlays last so they sit on top
    render_suggestions(f, app, header_chunks[1]);
    render_toasts(f, app);
}
