use crate::error::AppError;
use crate::state::{Focus, State, StateError, PAGE_SCROLL};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// What the main loop should do after a key.
///
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread. The
    /// thread stops once the receiving side is dropped.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => warn!("Failed to read terminal event: {}", e),
                },
                Ok(false) => {}
                Err(e) => warn!("Failed to poll terminal events: {}", e),
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(key, state)? == Outcome::Continue),
            Event::Tick => Ok(true),
        }
    }
}

/// Apply one key press to the state.
///
/// Page ids that fail validation are logged and leave the state as it was.
/// Anything else is returned to the caller.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> Result<Outcome, AppError> {
    let result = match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('q'),
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return Ok(Outcome::Exit);
        }
        KeyEvent {
            code: KeyCode::Tab | KeyCode::BackTab,
            ..
        } => {
            state.toggle_focus();
            Ok(())
        }
        KeyEvent {
            code: KeyCode::Char('j') | KeyCode::Down,
            ..
        } => match state.focus() {
            Focus::Sidebar => state.select_sidebar_next(),
            Focus::Page => {
                state.scroll_down(1);
                Ok(())
            }
        },
        KeyEvent {
            code: KeyCode::Char('k') | KeyCode::Up,
            ..
        } => match state.focus() {
            Focus::Sidebar => state.select_sidebar_prev(),
            Focus::Page => {
                state.scroll_up(1);
                Ok(())
            }
        },
        KeyEvent {
            code: KeyCode::PageDown,
            ..
        } => {
            state.scroll_down(PAGE_SCROLL);
            Ok(())
        }
        KeyEvent {
            code: KeyCode::PageUp,
            ..
        } => {
            state.scroll_up(PAGE_SCROLL);
            Ok(())
        }
        KeyEvent {
            code: KeyCode::Home,
            ..
        } => {
            state.scroll_top();
            Ok(())
        }
        KeyEvent {
            code: KeyCode::Enter | KeyCode::Char('n'),
            ..
        } => state.press_button().map(|_| ()),
        KeyEvent {
            code: KeyCode::Char(c @ '1'..='9'),
            ..
        } => state.jump_to(c as usize - '1' as usize),
        KeyEvent {
            code: KeyCode::Char('l'),
            ..
        } => state.toggle_locale(),
        KeyEvent {
            code: KeyCode::Char('t'),
            ..
        } => {
            state.cycle_theme();
            Ok(())
        }
        KeyEvent {
            code: KeyCode::Char('d'),
            ..
        } => {
            state.toggle_log();
            Ok(())
        }
        _ => Ok(()),
    };

    match result {
        Ok(()) => Ok(Outcome::Continue),
        Err(AppError::State(StateError::InvalidPage(page))) => {
            warn!("Ignoring navigation to invalid page: {}", page);
            Ok(Outcome::Continue)
        }
        Err(e) => Err(e),
    }
}
