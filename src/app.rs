use crate::config::Config;
use crate::error::AppError;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{BufferLogger, LogBuffer};
use crate::state::{SessionId, Sessions, State, StateError};
use crate::tables::Tables;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::sync::Arc;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Oversees table loading, the session arena and terminal output.
///
pub struct App {
    sessions: Sessions<State>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config) -> Result<()> {
        let log = LogBuffer::new();
        BufferLogger::new(config.log_level, log.clone()).init()?;

        info!("Starting application...");
        let tables = Arc::new(Tables::load(&config.tables_dir)?);

        let mut app = App {
            sessions: Sessions::new(),
            config,
        };
        let session = app
            .sessions
            .open(State::new(Arc::clone(&tables), &app.config, log)?);
        debug!("Opened session {}", session);

        let result = app.start_ui(session);

        if let Some(state) = app.sessions.close(session) {
            if let Err(e) = app.save_preferences(&state) {
                error!("Failed to save config on exit: {}", e);
            }
        }

        info!("Exiting application...");
        result
    }

    /// Store the language and theme of the session. Command line overrides
    /// are left out of the file.
    ///
    fn save_preferences(&self, state: &State) -> Result<(), AppError> {
        let mut stored = self.config.reload()?;
        stored.locale = state.locale();
        stored.theme_name = state.theme().name.clone();
        stored.save()?;
        info!("Saved configuration");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored whatever the
    /// loop returns.
    ///
    fn start_ui(&mut self, session: SessionId) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut terminal = setup_terminal()?;
        let result = self.run(&mut terminal, session);
        let restored = restore_terminal(&mut terminal);
        result?;
        restored
    }

    fn run(&mut self, terminal: &mut Term, session: SessionId) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let state = self
                .sessions
                .get_mut(session)
                .ok_or(StateError::SessionNotFound(session))?;
            if let Err(e) = state.reconcile_sidebar() {
                warn!("Failed to reconcile sidebar: {}", e);
            }
            terminal.draw(|frame| crate::ui::render(frame, state))?;
            if !terminal_event_handler.handle_next(state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Term, AppError> {
    enable_raw_mode().map_err(|e| AppError::Terminal(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
