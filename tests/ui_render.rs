//! Render the dashboard into ratatui's `TestBackend` and inspect the screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use lukz_dashboard::{render_ui, App, Settings, SymbolCatalog};

const WIDTH: u16 = 110;
const HEIGHT: u16 = 32;

fn app() -> App {
    App::new(Settings {
        api_url: "http://127.0.0.1:9".to_string(),
        api_key: String::new(),
        default_ticker: "MSFT".to_string(),
        catalog: SymbolCatalog::common(),
    })
    .unwrap()
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_input(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| render_ui(f, app)).unwrap();

    terminal
        .backend()
        .buffer()
        .content()
        .chunks(WIDTH as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn initial_screen_shows_all_widgets() {
    let text = screen(&app());
    assert!(text.contains("Selected Ticker"));
    // Only the ticker panel shows the default; the placeholder names AAPL
    assert!(text.contains("MSFT"));
    assert!(text.contains("Search ticker (e.g. AAPL)"));
    assert!(text.contains("Share Your Feedback"));
    assert!(text.contains("Enter your feedback here..."));
    assert!(text.contains("Submit Feedback"));
    assert!(!text.contains("Suggestions"));
}

#[test]
fn suggestions_render_only_while_visible() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    assert!(!screen(&app).contains("Suggestions"));

    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Char('v'));
    let text = screen(&app);
    assert!(text.contains("Suggestions (1)"));
    assert!(text.contains("NVDA"));

    press(&mut app, KeyCode::Char('x'));
    assert!(!screen(&app).contains("Suggestions"));
}

#[test]
fn selection_re_renders_the_ticker_panel() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);

    let text = screen(&app);
    assert!(text.contains("JPM"));
    assert!(text.contains("Changes this session: 1"));
    assert!(!text.contains("Suggestions"));
}

#[test]
fn validation_toast_is_drawn() {
    let mut app = app();
    press(&mut app, KeyCode::Char('f'));
    press(&mut app, KeyCode::Enter);

    let text = screen(&app);
    assert!(text.contains("Please enter your feedback message"));
}
