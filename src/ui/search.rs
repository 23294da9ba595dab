use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::search::SEARCH_PLACEHOLDER;
use super::components::focus_style;

pub fn render_search_box(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Search;
    let query = app.search.query_text();

    let line = if query.is_empty() {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![Span::raw("> "), Span::raw(query)])
    };

    let input = Paragraph::new(line)
        .block(Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(focus_style(focused)));
    f.render_widget(input, area);

    if focused {
        // Border plus the "> " prompt
        let x = area.x + 3 + query.chars().count() as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

/// Suggestion panel, drawn below the search box only when it has entries.
pub fn render_suggestions(f: &mut Frame, app: &App, search_area: Rect) {
    if !app.search.panel_visible() {
        return;
    }

    let screen = f.area();
    let top = search_area.bottom();
    let available = screen.bottom().saturating_sub(top);
    let wanted = app.search.suggestions().len() as u16 + 2;
    let height = wanted.min(available);
    if height < 3 {
        return;
    }

    let area = Rect {
        x: search_area.x,
        y: top,
        width: search_area.width,
        height,
    };

    let items: Vec<ListItem> = app
        .search
        .suggestions()
        .iter()
        .enumerate()
        .map(|(i, symbol)| {
            let style = if i == app.search.highlighted() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(symbol.as_str(), style)))
        })
        .collect();

    f.render_widget(Clear, area);
    let list = List::new(items).block(Block::default()
        .borders(Borders::ALL)
        .title(format!("Suggestions ({})", app.search.suggestions().len()))
        .border_style(Style::default().fg(Color::Yellow)));
    f.render_widget(list, area);
}
