use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::toast::{Toast, ToastKind};

/// Border style for a widget, highlighted when it has focus.
pub fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("Lukz Ticker Dashboard")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let footer_text = match app.focus {
        Focus::None => "/: Search | f: Feedback | Tab: Next widget | q: Quit",
        Focus::Search => "Type to filter | ↑↓: Highlight | Enter: Select | Esc: Close | Tab: Next widget",
        Focus::Feedback => "Type your message | Enter: Submit | Esc: Leave | Tab: Next widget",
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(app.focus.to_string()));
    f.render_widget(footer, area);
}

/// Stack toasts in the bottom right corner, newest at the bottom.
pub fn render_toasts(f: &mut Frame, app: &App) {
    let screen = f.area();
    let width = 46.min(screen.width);
    let height = 4;
    let mut bottom = screen.height.saturating_sub(4);

    for toast in app.toaster.iter().rev() {
        if bottom < height {
            break;
        }
        let area = Rect {
            x: screen.width.saturating_sub(width + 1),
            y: bottom - height,
            width,
            height,
        };
        render_toast(f, toast, area);
        bottom -= height;
    }
}

fn render_toast(f: &mut Frame, toast: &Toast, area: Rect) {
    let color = match toast.kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
    };

    let text = vec![
        Line::from(Span::styled(
            toast.title.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(toast.description.as_str()),
    ];

    f.render_widget(Clear, area);
    let block = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default()
            .borders(Borders::ALL)
            .title(toast.created_at.format("%H:%M:%S").to_string())
            .border_style(Style::default().fg(color)));
    f.render_widget(block, area);
}
