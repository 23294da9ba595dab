use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::feedback::form::FEEDBACK_PLACEHOLDER;
use super::components::focus_style;

pub fn render_feedback_card(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Feedback;

    let card = Block::default()
        .borders(Borders::ALL)
        .title("Share Your Feedback")
        .border_style(focus_style(focused));
    let inner = card.inner(area);
    f.render_widget(card, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Min(3),    // Message
            Constraint::Length(3), // Button
        ])
        .split(inner);

    let description = Paragraph::new("Help us improve Lukz by sharing your thoughts and suggestions")
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    f.render_widget(description, chunks[0]);

    let message = app.feedback.message();
    let textarea = if message.is_empty() {
        Paragraph::new(FEEDBACK_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(message).style(Style::default().fg(Color::White))
    };
    f.render_widget(
        textarea
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).border_style(focus_style(focused))),
        chunks[1],
    );

    let button_style = if app.feedback.is_submitting() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(app.feedback.button_label())
        .style(button_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, chunks[2]);
}
