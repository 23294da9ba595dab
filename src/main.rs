use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dotenv::dotenv;
use futures_util::FutureExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
    panic::AssertUnwindSafe
};
use cli_log::*;
use clap::Parser;

use lukz_dashboard::{App, Cli, Settings, render_ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    init_cli_log!();
    info!("Starting Lukz ticker dashboard...");

    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli)?;

    // Gracefully handle panics and restore the terminal
    let result = AssertUnwindSafe(run_tui_app(settings)).catch_unwind().await;

    // Restore terminal state
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).ok();

    match result {
        Ok(res) => res,
        Err(panic) => {
            eprintln!("\n\nApplication panicked: {panic:?}\n\n");
            Err(anyhow::anyhow!("Application panicked"))
        }
    }
}

async fn run_tui_app(settings: Settings) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // The app owns the ticker provider for the whole session
    let mut app = App::new(settings)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal before returning
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        info!("App error: {err:?}");
    }

    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let tick_rate = Duration::from_millis(lukz_dashboard::config::TICK_RATE_MS);
    let mut last_ui_update = Instant::now();
    let ui_update_rate = Duration::from_millis(lukz_dashboard::config::UI_UPDATE_RATE_MS);

    loop {
        if crossterm::event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key_input(key)? {
                    return Ok(()); // Exit requested
                }
            }
        }

        // Pick up finished feedback requests and expire toasts
        app.update();

        // Force UI update at least once per second so toast timestamps stay fresh
        let force_redraw = last_ui_update.elapsed() >= ui_update_rate;

        if app.take_redraw() || force_redraw {
            terminal.draw(|f| render_ui(f, app))?;
            last_ui_update = Instant::now();
        }

        // Yield to the runtime so the spawned feedback request can make progress
        tokio::time::sleep(tick_rate).await;
    }
}
