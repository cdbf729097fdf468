//! login-form - terminal login form
//!
//! Collects an email and password, rejects submissions with an empty field,
//! and reports accepted credentials to the configured sink.

use anyhow::Result;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use login_form::app::App;
use login_form::config::FormConfig;
use login_form::{logging, ui};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let config = FormConfig::load()?;
    let _log_guard = logging::init(&config)?;
    tracing::info!(sink = ?config.sink_kind(), "Starting login form");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!("Exiting after error: {err:?}");
    }

    // Returned rather than exiting so the log guard drops and flushes
    result
}

/// Draw, then handle one event to completion before reading the next
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Ignore release/repeat reports on terminals that send them
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key).await;
                }
                Event::Paste(text) => app.handle_paste(text),
                _ => {}
            }
        }

        app.poll_signed_in();

        if app.should_quit() {
            tracing::info!("Quit requested");
            return Ok(());
        }
    }
}
