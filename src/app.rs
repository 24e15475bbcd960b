//! Application state and logic.
//!
//! This module contains the application state, view management and the
//! handling of user actions and timer events.

use std::time::Duration;

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::constants::TICK_INTERVAL;
use crate::event::Action;
use crate::scheduler::Scheduler;
use crate::session::Session;
use crate::settings::{self, Settings, PACE_RANGE, SESSION_RANGE};

/// The different views/screens in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Breathing canvas and controls
    Session,
    /// Text input mode (for typing a setting value)
    Input(EntryField),
}

/// Settings that can be typed in by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    /// Breath pace in bpm
    Pace,
    /// Session length in minutes
    SessionLength,
}

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
}

/// Main application state.
pub struct App {
    /// Current view/screen
    pub current_view: View,
    /// Status message to display
    pub status: Option<StatusMessage>,
    /// Pattern, pace and session length
    pub settings: Settings,
    /// Cycle state of the current session
    pub session: Session,
    /// Timers of the running session
    pub scheduler: Scheduler,
    /// Wall clock time the running session began
    pub started_at: Option<DateTime<Local>>,

    // --- Input state ---
    /// Current input buffer for text entry
    pub input_buffer: String,

    /// Ring the terminal bell on the next loop iteration
    bell_pending: bool,

    // --- Help visibility ---
    pub show_help: bool,
}

impl App {
    /// Creates a new application instance with the given settings.
    pub fn new(settings: Settings) -> Self {
        let session = Session::new(settings.pattern());
        Self {
            current_view: View::Session,
            status: None,
            settings,
            session,
            scheduler: Scheduler::new(),
            started_at: None,
            input_buffer: String::new(),
            bell_pending: false,
            show_help: false,
        }
    }

    /// Handles an action and returns true if the app should quit.
    pub fn handle_event(&mut self, action: Action) -> bool {
        // Handle help toggle from any view except text entry
        if action == Action::Help && self.current_view == View::Session {
            self.show_help = !self.show_help;
            return false;
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return false;
        }

        match self.current_view {
            View::Session => self.handle_session_action(action),
            View::Input(field) => self.handle_input_action(action, field),
        }
    }

    /// Handles actions on the main screen.
    fn handle_session_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::ToggleSession => self.toggle_session(),
            Action::Reset => self.reset_settings(),
            Action::NextPattern => {
                self.settings.next_pattern();
                self.pattern_changed();
            }
            Action::PreviousPattern => {
                self.settings.previous_pattern();
                self.pattern_changed();
            }
            Action::SelectPattern(index) => {
                if self.settings.select_pattern(index) {
                    self.pattern_changed();
                }
            }
            Action::PaceUp => self.step_pace(1),
            Action::PaceDown => self.step_pace(-1),
            Action::SessionLonger => self.step_session(1),
            Action::SessionShorter => self.step_session(-1),
            Action::EditPace => self.start_entry(EntryField::Pace),
            Action::EditSession => self.start_entry(EntryField::SessionLength),
            Action::Back => self.clear_status(),
            _ => {}
        }
        false
    }

    /// Handles actions during text input.
    fn handle_input_action(&mut self, action: Action, field: EntryField) -> bool {
        match action {
            Action::Quit => return true,
            Action::Back => {
                self.input_buffer.clear();
                self.current_view = View::Session;
            }
            Action::Enter => self.submit_input(field),
            Action::Char(c) => self.input_char(c),
            Action::Backspace => self.input_backspace(),
            _ => {}
        }
        false
    }

    // --- Session control ---

    /// Starts a session if idle, stops it if running.
    pub fn toggle_session(&mut self) {
        if self.session.is_running() {
            self.stop_session();
            self.set_status("Session stopped", false);
        } else {
            self.start_session();
        }
    }

    /// Starts a session with the current settings.
    pub fn start_session(&mut self) {
        let length = self.settings.session_length();
        self.session.start(self.settings.pattern(), length);
        self.scheduler.start(TICK_INTERVAL, length);
        self.started_at = Some(Local::now());
        self.set_status(
            &format!(
                "Breathing: {} for {}",
                self.settings.pattern().name,
                settings::format_minutes(self.settings.session_minutes)
            ),
            false,
        );
    }

    /// Cancels the timers and puts the circle back at rest.
    pub fn stop_session(&mut self) {
        if self.scheduler.is_armed() {
            debug!("cancelling session timers");
            self.scheduler.cancel();
        }
        self.session.stop(self.settings.pattern());
        self.started_at = None;
    }

    /// Advances the animation by one tick.
    pub fn on_tick(&mut self, dt: Duration) {
        self.session
            .tick(dt, self.settings.pattern(), self.settings.pace);
    }

    /// Called when the session length has elapsed.
    pub fn on_session_end(&mut self) {
        let cycles = self.session.cycles();
        info!(cycles, "session complete");
        self.stop_session();
        self.set_status(
            &format!("Session complete - {cycles} breaths. Well done!"),
            false,
        );
    }

    /// Stops any session and restores all default settings.
    pub fn reset_settings(&mut self) {
        self.stop_session();
        self.settings.reset();
        self.session = Session::new(self.settings.pattern());
        self.set_status("Settings reset to defaults", false);
    }

    fn pattern_changed(&mut self) {
        let pattern = self.settings.pattern();
        debug!(pattern = pattern.name, "pattern selected");
        if !self.session.is_running() {
            self.session = Session::new(pattern);
        }
        let pace_note = if pattern.uses_pace {
            format!("pace {}", settings::format_pace(self.settings.pace))
        } else {
            "fixed timing".to_string()
        };
        self.set_status(&format!("Pattern: {} ({pace_note})", pattern.name), false);
    }

    // --- Slider adjustments ---

    fn step_pace(&mut self, steps: i32) {
        if !self.settings.pace_enabled() {
            self.set_status("This pattern has fixed timing - pace is ignored", true);
            return;
        }
        self.settings.step_pace(steps);
        self.set_status(
            &format!("Pace: {}", settings::format_pace(self.settings.pace)),
            false,
        );
    }

    fn step_session(&mut self, steps: i32) {
        self.settings.step_session(steps);
        let note = if self.session.is_running() {
            " (applies to the next session)"
        } else {
            ""
        };
        self.set_status(
            &format!(
                "Duration: {}{note}",
                settings::format_minutes(self.settings.session_minutes)
            ),
            false,
        );
    }

    // --- Input handling ---

    fn start_entry(&mut self, field: EntryField) {
        if field == EntryField::Pace && !self.settings.pace_enabled() {
            self.set_status("This pattern has fixed timing - pace is ignored", true);
            return;
        }
        self.input_buffer.clear();
        self.current_view = View::Input(field);
    }

    fn submit_input(&mut self, field: EntryField) {
        let input = std::mem::take(&mut self.input_buffer);
        self.current_view = View::Session;

        let (range, current) = match field {
            EntryField::Pace => (PACE_RANGE, self.settings.pace),
            EntryField::SessionLength => (SESSION_RANGE, self.settings.session_minutes),
        };
        let outcome = settings::apply_entry(&range, current, &input);
        if outcome.alert {
            self.bell_pending = true;
        }

        let shown = match field {
            EntryField::Pace => {
                self.settings.pace = outcome.value;
                format!("Pace: {}", settings::format_pace(outcome.value))
            }
            EntryField::SessionLength => {
                self.settings.session_minutes = outcome.value;
                format!("Duration: {}", settings::format_minutes(outcome.value))
            }
        };

        if outcome.alert {
            self.set_status(&format!("Invalid entry '{}' - {shown}", input.trim()), true);
        } else {
            self.set_status(&shown, false);
        }
    }

    /// Appends a character to the input buffer.
    pub fn input_char(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    /// Removes the last character from the input buffer.
    pub fn input_backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Whether keys should go to the text entry dialog.
    pub fn is_editing(&self) -> bool {
        matches!(self.current_view, View::Input(_))
    }

    /// Returns true once per requested bell.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    // --- Status message helpers ---

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{PhaseKind, DEFAULT_PATTERN};

    fn app() -> App {
        App::new(Settings::default())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(Action::Char(c));
        }
    }

    #[tokio::test]
    async fn test_toggle_starts_and_stops() {
        let mut app = app();
        app.handle_event(Action::ToggleSession);
        assert!(app.session.is_running());
        assert!(app.scheduler.is_armed());
        assert!(app.started_at.is_some());

        app.handle_event(Action::ToggleSession);
        assert!(!app.session.is_running());
        assert!(!app.scheduler.is_armed());
        assert!(app.started_at.is_none());
        assert_eq!(app.session.state().progress, 0.0);
    }

    #[tokio::test]
    async fn test_tick_after_stop_is_ignored() {
        let mut app = app();
        app.start_session();
        app.on_tick(TICK_INTERVAL);
        assert!(app.session.state().progress > 0.0);

        app.stop_session();
        app.on_tick(TICK_INTERVAL);
        assert_eq!(app.session.state().progress, 0.0);
        assert_eq!(app.session.state().current_phase, PhaseKind::Exhale);
    }

    #[tokio::test]
    async fn test_session_end_stops_and_reports() {
        let mut app = app();
        app.start_session();
        app.on_tick(Duration::from_secs(12));
        app.on_session_end();

        assert!(!app.session.is_running());
        assert!(!app.scheduler.is_armed());
        let status = app.status.as_ref().unwrap();
        assert!(status.text.starts_with("Session complete - 1 breaths"));
        assert!(!status.is_error);
    }

    #[tokio::test]
    async fn test_reset_stops_and_restores_defaults() {
        let mut app = app();
        app.handle_event(Action::SelectPattern(3));
        app.handle_event(Action::SessionLonger);
        app.handle_event(Action::ToggleSession);
        app.on_tick(Duration::from_secs(3));

        app.handle_event(Action::Reset);
        assert!(!app.session.is_running());
        assert!(!app.scheduler.is_armed());
        assert_eq!(app.settings, Settings::default());
        assert_eq!(app.settings.pattern().name, DEFAULT_PATTERN);
        assert_eq!(app.session.state().progress, 0.0);
    }

    #[test]
    fn test_pace_disabled_for_fixed_pattern() {
        let mut app = app();
        app.handle_event(Action::SelectPattern(3));
        let pace = app.settings.pace;

        app.handle_event(Action::PaceUp);
        assert_eq!(app.settings.pace, pace);
        assert!(app.status.as_ref().unwrap().is_error);

        app.handle_event(Action::EditPace);
        assert_eq!(app.current_view, View::Session);
    }

    #[test]
    fn test_pace_steps_on_paced_pattern() {
        let mut app = app();
        app.handle_event(Action::PaceUp);
        assert_eq!(app.settings.pace, 6.0);
        app.handle_event(Action::PaceDown);
        app.handle_event(Action::PaceDown);
        assert_eq!(app.settings.pace, 5.0);
    }

    #[test]
    fn test_manual_entry_valid() {
        let mut app = app();
        app.handle_event(Action::EditSession);
        assert_eq!(app.current_view, View::Input(EntryField::SessionLength));
        assert!(app.is_editing());

        type_text(&mut app, "12.5");
        app.handle_event(Action::Enter);
        assert_eq!(app.current_view, View::Session);
        assert_eq!(app.settings.session_minutes, 12.5);
        assert!(!app.take_bell());
    }

    #[test]
    fn test_manual_entry_out_of_range_clamps_and_rings() {
        let mut app = app();
        app.handle_event(Action::EditPace);
        type_text(&mut app, "42");
        app.handle_event(Action::Enter);

        assert_eq!(app.settings.pace, 9.0);
        assert!(app.take_bell());
        assert!(!app.take_bell());
        assert!(app.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_manual_entry_garbage_keeps_value() {
        let mut app = app();
        app.handle_event(Action::EditPace);
        type_text(&mut app, "slow");
        app.handle_event(Action::Backspace);
        app.handle_event(Action::Enter);

        assert_eq!(app.settings.pace, 5.5);
        assert!(app.take_bell());
    }

    #[test]
    fn test_escape_cancels_entry() {
        let mut app = app();
        app.handle_event(Action::EditSession);
        type_text(&mut app, "30");
        app.handle_event(Action::Back);

        assert_eq!(app.current_view, View::Session);
        assert_eq!(app.settings.session_minutes, 5.0);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn test_quit_keys_while_typing_are_characters() {
        let mut app = app();
        app.handle_event(Action::EditPace);
        assert!(!app.handle_event(Action::Char('q')));
        assert_eq!(app.input_buffer, "q");
        assert!(app.handle_event(Action::Quit));
    }

    #[test]
    fn test_help_toggles_and_any_key_closes() {
        let mut app = app();
        app.handle_event(Action::Help);
        assert!(app.show_help);

        // Closing help swallows the key
        assert!(!app.handle_event(Action::Quit));
        assert!(!app.show_help);
        assert!(app.handle_event(Action::Quit));
    }

    #[test]
    fn test_pattern_change_while_idle_rests_on_new_pattern() {
        let mut app = app();
        app.handle_event(Action::PreviousPattern);
        assert_eq!(app.settings.pattern().name, "4-7-8 (+hold)");
        assert_eq!(app.session.state().current_phase, PhaseKind::Exhale);
        assert!(!app.session.is_running());
    }

    #[tokio::test]
    async fn test_pattern_change_while_running_keeps_session() {
        let mut app = app();
        app.start_session();
        app.on_tick(Duration::from_secs(1));
        let progress = app.session.state().progress;

        app.handle_event(Action::NextPattern);
        assert!(app.session.is_running());
        assert_eq!(app.session.state().progress, progress);
    }
}
