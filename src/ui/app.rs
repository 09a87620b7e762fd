//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::{key_poll_interval, splash_duration};
use crate::environment::Environment;
use crate::events::Event as FlowEvent;
use crate::ui::dashboard::{DashboardView, Request, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::FlowRunner;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::mpsc;

/// The different screens in the application.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Menu cards, activity log and modals.
    Dashboard,
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state. Exists from the start so the initial load is not
    /// lost behind the splash screen.
    view: Box<DashboardView>,

    /// Receives flow outcomes from request tasks.
    event_receiver: mpsc::Receiver<FlowEvent>,

    /// Spawns store requests and cancels them on exit.
    runner: FlowRunner,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<FlowEvent>,
        runner: FlowRunner,
        with_background_color: bool,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            view: Box::new(DashboardView::new(
                environment,
                Instant::now(),
                with_background_color,
            )),
            event_receiver,
            runner,
        }
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    /// Start the initial load. Runs once per app.
    fn mount(&self) {
        self.runner.spawn_load();
    }

    /// Hand a dashboard request to the runner. Returns false on quit.
    fn dispatch(&self, request: Request) -> bool {
        match request {
            Request::Add(draft) => {
                self.runner.spawn_add(draft);
            }
            Request::Update(editing, draft) => {
                self.runner.spawn_update(editing, draft);
            }
            Request::Delete(id) => {
                self.runner.spawn_delete(id);
            }
            Request::Quit => {
                self.runner.shutdown();
                return false;
            }
        }
        true
    }

    /// Move queued flow outcomes into the dashboard and advance a frame.
    fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.view.add_event(event);
        }
        self.view.update();
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    app.mount();

    // UI event loop
    loop {
        app.drain_events();
        terminal.draw(|f| render(f, &app))?;

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration() {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(key_poll_interval())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                match app.current_screen {
                    // Any key press skips the splash screen
                    Screen::Splash => app.current_screen = Screen::Dashboard,
                    Screen::Dashboard => {
                        if let Some(request) = app.view.handle_key(key) {
                            if !app.dispatch(request) {
                                return Ok(());
                            }
                        }
                    }
                }
            }
        }

        // Let request tasks make progress between frames
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, app.view()),
    }
}
