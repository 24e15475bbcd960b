//! Event handling module.
//!
//! This module reads keyboard and terminal events from crossterm's async
//! event stream and converts them into application actions.

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;

use crate::pattern;

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Start or stop the breathing session
    ToggleSession,
    /// Stop the session and restore default settings
    Reset,
    /// Select the next breathing pattern
    NextPattern,
    /// Select the previous breathing pattern
    PreviousPattern,
    /// Select a pattern by its position in the table
    SelectPattern(usize),
    /// Increase the breath pace by one step
    PaceUp,
    /// Decrease the breath pace by one step
    PaceDown,
    /// Lengthen the session by one step
    SessionLonger,
    /// Shorten the session by one step
    SessionShorter,
    /// Type in a pace value
    EditPace,
    /// Type in a session length
    EditSession,
    /// Show help
    Help,
    /// Submit the current input
    Enter,
    /// Leave the current dialog
    Back,
    /// Character input (for text entry mode)
    Char(char),
    /// Backspace key (for text entry mode)
    Backspace,
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler {
    /// Async stream of terminal events
    events: EventStream,
}

impl EventHandler {
    /// Creates a new event handler reading from the terminal.
    pub fn new() -> Self {
        Self {
            events: EventStream::new(),
        }
    }

    /// Waits for the next terminal event and converts it to an Action.
    ///
    /// `input_mode` selects the text entry key map. Returns Ok(None) for
    /// events that map to nothing (key releases, resizes, unbound keys).
    /// A closed event stream is treated as a request to quit.
    pub async fn next(&mut self, input_mode: bool) -> io::Result<Option<Action>> {
        match self.events.next().await {
            Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                if input_mode {
                    Ok(key_to_input_action(key_event))
                } else {
                    Ok(key_to_action(key_event))
                }
            }
            Some(Ok(_)) => Ok(None),
            Some(Err(e)) => Err(e),
            None => Ok(Some(Action::Quit)),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a key event to an input-mode action.
pub(crate) fn key_to_input_action(key: KeyEvent) -> Option<Action> {
    // Check for Ctrl+C (quit)
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) => Some(Action::Char(c)),
        _ => None,
    }
}

/// Converts a key event to an application action.
pub(crate) fn key_to_action(key: KeyEvent) -> Option<Action> {
    // Check for Ctrl+C first (quit)
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Session
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleSession),
        KeyCode::Char('r') => Some(Action::Reset),

        // Patterns
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextPattern),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousPattern),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            (index < pattern::patterns().len()).then_some(Action::SelectPattern(index))
        }

        // Sliders
        KeyCode::Up | KeyCode::Char('k') => Some(Action::PaceUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::PaceDown),
        KeyCode::Char(']') | KeyCode::Char('+') => Some(Action::SessionLonger),
        KeyCode::Char('[') | KeyCode::Char('-') => Some(Action::SessionShorter),
        KeyCode::Char('p') => Some(Action::EditPace),
        KeyCode::Char('d') => Some(Action::EditSession),

        // General
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),

        // No matching action
        _ => None,
    }
}
