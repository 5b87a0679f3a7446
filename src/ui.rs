// src/ui.rs

pub mod chat;
pub mod footer;
pub mod quit_confirm;

use crate::config;
use crate::errors::PanelResult;
use crate::key_handlers;
use crate::{App, AppState};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

/// Enum for the two kinds of loop events.
enum Event {
    Input(CEvent),
    Tick,
}

/// Runs the terminal UI until the user confirms quitting.
pub async fn run_ui(mut app: App) -> PanelResult<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Main loop: draw, then dispatch the next input or tick event. All
/// state mutation happens here on the loop task.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> PanelResult<()> {
    let tick_rate = Duration::from_millis(config::get_config().tick_rate_ms);
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // Input pump: polls crossterm and emits ticks
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(event) = event::read() {
                    if tx.send(Event::Input(event)).await.is_err() {
                        return;
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        terminal.draw(|f| ui(f, app))?;

        match rx.recv().await {
            Some(Event::Input(CEvent::Key(key))) => match app.state {
                AppState::Chat => key_handlers::handle_chat_input(key, app),
                AppState::QuitConfirm => key_handlers::handle_quit_confirm_input(key, app),
                AppState::Quit => {}
            },
            Some(Event::Input(_)) => {}
            Some(Event::Tick) => app.widget.tick(Instant::now()),
            None => break,
        }

        if app.state == AppState::Quit {
            break;
        }
    }

    Ok(())
}

/// Renders the UI for the current application state.
pub fn ui(f: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)].as_ref())
        .split(f.area());

    match app.state {
        AppState::Chat => chat::draw_chat(f, chunks[0], app),
        AppState::QuitConfirm => quit_confirm::draw_quit_confirm(f, chunks[0]),
        AppState::Quit => {}
    }

    footer::draw_footer(f, chunks[1], app);
}
