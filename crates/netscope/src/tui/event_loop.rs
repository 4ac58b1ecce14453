//! Event Loop - terminal lifecycle, key handling, snapshot application
//!
//! The loop drains accepted snapshots from the scheduler each iteration and
//! reconciles them into the view state, draws, then polls for input with a
//! short timeout. Fetching never happens here; the scheduler owns it.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::fetcher::SnapshotFetcher;
use crate::reconcile::reconcile;
use crate::scheduler::{self, SchedulerHandle};
use crate::view::ViewState;
use netscope_common::TelemetrySnapshot;

use super::render::draw;

/// Run the dashboard until the user quits.
pub async fn run(config: &Config) -> Result<()> {
    let fetcher = SnapshotFetcher::new(&config.api_url, config.request_timeout())?;
    let (scheduler, mut snapshots) =
        scheduler::spawn(fetcher, config.default_minutes, config.refresh_period());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = ViewState::new(config.default_minutes);
    let result = run_event_loop(&mut terminal, &mut state, &scheduler, &mut snapshots).await;

    // Restore terminal (always attempt cleanup)
    let cleanup_result = restore_terminal(&mut terminal);

    result.and(cleanup_result)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut ViewState,
    scheduler: &SchedulerHandle,
    snapshots: &mut mpsc::Receiver<TelemetrySnapshot>,
) -> Result<()> {
    loop {
        // Apply every accepted snapshot that arrived since the last pass.
        // Each one fully replaces the rendered content, so applying the
        // backlog in order converges on the newest.
        while let Ok(snapshot) = snapshots.try_recv() {
            reconcile(&snapshot, state);
        }

        terminal.draw(|f| draw(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => break,
                    (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Left, _) | (KeyCode::Char('['), _) => {
                        change_selection(state, scheduler, -1);
                    }
                    (KeyCode::Right, _) | (KeyCode::Char(']'), _) => {
                        change_selection(state, scheduler, 1);
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

/// Step the time-range menu. The new window takes effect for every later
/// fetch, and one fetch fires right away rather than waiting out the timer.
fn change_selection(state: &mut ViewState, scheduler: &SchedulerHandle, step: isize) {
    if let Some(minutes) = state.cycle_selection(step) {
        scheduler.selection_changed(minutes);
    }
}
