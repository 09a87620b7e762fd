//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::store::FoodStore;
use crate::ui;
use crate::workers::{EventSender, FlowRunner};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::{error::Error, io};
use tokio::sync::mpsc;

/// Runs the dashboard in the terminal
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. Wiring the flow runner to the UI loop
/// 3. Cancelling outstanding requests on exit
///
/// # Arguments
/// * `session` - Session data from setup
/// * `with_background` - Whether to enable background colors
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    let environment = session.environment().clone();
    print_session_starting("TUI", &environment.api_url());

    let (sender, receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let store: Arc<dyn FoodStore> = session.store;
    let runner = FlowRunner::new(store, EventSender::new(sender), session.token.clone());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(environment, receiver, runner, with_background);
    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    print_session_shutdown();
    session.token.cancel();
    result?;
    print_session_exit_success();

    Ok(())
}
