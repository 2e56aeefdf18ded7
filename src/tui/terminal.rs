//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::api::BudgetApi;
use crate::controller::ReceiptsBudgetsClient;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore terminal before printing panic info
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// Both lists are fetched once on start; after that every request is
/// triggered by a key press.
pub fn run_tui<A: BudgetApi>(client: ReceiptsBudgetsClient<A>) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(client);

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    result
}

fn event_loop<A: BudgetApi>(terminal: &mut Tui, app: &mut App<A>) -> Result<()> {
    terminal.draw(|frame| super::views::render(frame, app))?;
    app.client.load();

    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;

        let event = events
            .next()
            .map_err(|_| anyhow::anyhow!("terminal event reader stopped"))?;

        if let Some(pending) = handle_event(app, event) {
            // Show "Uploading..." before the request blocks
            terminal.draw(|frame| super::views::render(frame, app))?;
            app.client.finish_upload(pending);
        }
    }

    Ok(())
}
