use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn render_ticker_panel(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.panel.snapshot();

    let last_change = snapshot
        .last_changed
        .map(|t| t.format("%H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "-".to_string());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            snapshot.symbol.clone(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Changes this session: {}", snapshot.changes)),
        Line::from(format!("Last change: {last_change}")),
    ];

    let panel = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default()
            .borders(Borders::ALL)
            .title("Selected Ticker"));
    f.render_widget(panel, area);
}
