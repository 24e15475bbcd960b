//! Bounded session settings.
//!
//! Pace and session length behave like sliders: every value is snapped to a
//! fixed step and clamped into a fixed range, so the engine never sees a
//! zero or negative pace.

use std::time::Duration;

use tracing::{info, warn};

use crate::cli::Cli;
use crate::constants::{pace, session};
use crate::error::ConfigError;
use crate::pattern::{self, BreathingPattern};

/// Range, step and default of a slider-like setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// Breath pace, in breaths per minute.
pub const PACE_RANGE: SliderRange = SliderRange {
    min: pace::MIN,
    max: pace::MAX,
    step: pace::STEP,
    default: pace::DEFAULT,
};

/// Session length, in minutes.
pub const SESSION_RANGE: SliderRange = SliderRange {
    min: session::MIN,
    max: session::MAX,
    step: session::STEP,
    default: session::DEFAULT,
};

impl SliderRange {
    /// Rounds to the nearest step, then clamps into range. NaN maps to the
    /// default.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        ((value / self.step).round() * self.step).clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Position of `value` along the range, in [0, 1].
    pub fn fraction(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Moves `value` by a whole number of steps, staying in range.
    pub fn step_by(&self, value: f64, steps: i32) -> f64 {
        self.snap(value + f64::from(steps) * self.step)
    }
}

/// Result of a manual entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryOutcome {
    /// Value to store
    pub value: f64,
    /// Whether the user should hear the bell
    pub alert: bool,
}

/// Parses a number typed by the user.
pub fn parse_number(text: &str) -> Result<f64, ConfigError> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ConfigError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(ConfigError::NotFinite);
    }
    Ok(value)
}

/// Applies manually entered text to a setting.
///
/// Unparseable text keeps `current`. Out of range values are clamped to the
/// nearest bound. Both cases raise the alert; neither is an error.
pub fn apply_entry(range: &SliderRange, current: f64, text: &str) -> EntryOutcome {
    match parse_number(text) {
        Ok(raw) => {
            let value = range.snap(raw);
            let alert = !range.contains(raw);
            if alert {
                warn!(entered = raw, clamped = value, "setting out of range, clamped");
            }
            EntryOutcome { value, alert }
        }
        Err(e) => {
            warn!(error = %e, "rejected setting entry");
            EntryOutcome {
                value: current,
                alert: true,
            }
        }
    }
}

/// Formats a pace value, e.g. "5.5 bpm".
pub fn format_pace(bpm: f64) -> String {
    format!("{bpm:.1} bpm")
}

/// Formats a session length in its shortest form, e.g. "5 min" or "0.5 min".
pub fn format_minutes(minutes: f64) -> String {
    format!("{minutes} min")
}

/// User-adjustable settings for the next (or current) session.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Index of the selected pattern in the pattern table
    pattern_index: usize,
    /// Breath pace in breaths per minute
    pub pace: f64,
    /// Session length in minutes
    pub session_minutes: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pattern_index: pattern::default_index(),
            pace: PACE_RANGE.default,
            session_minutes: SESSION_RANGE.default,
        }
    }
}

impl Settings {
    /// Builds startup settings from the command line.
    ///
    /// An unknown pattern or a non-finite pace or duration is an error.
    /// Finite pace and duration are snapped into range with a warning, the
    /// same way the sliders would.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let (pattern_index, selected) = pattern::find(&cli.pattern)
            .ok_or_else(|| ConfigError::UnknownPattern(cli.pattern.clone()))?;
        if !cli.pace.is_finite() || !cli.duration.is_finite() {
            return Err(ConfigError::NotFinite);
        }

        let pace = PACE_RANGE.snap(cli.pace);
        if pace != cli.pace {
            warn!(requested = cli.pace, using = pace, "adjusted pace to slider range");
        }
        if !selected.uses_pace && pace != PACE_RANGE.default {
            info!(pattern = selected.name, "pattern has fixed timing, pace is ignored");
        }
        let session_minutes = SESSION_RANGE.snap(cli.duration);
        if session_minutes != cli.duration {
            warn!(
                requested = cli.duration,
                using = session_minutes,
                "adjusted session length to slider range"
            );
        }

        Ok(Self {
            pattern_index,
            pace,
            session_minutes,
        })
    }

    /// Restores every setting to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The selected pattern.
    pub fn pattern(&self) -> &'static BreathingPattern {
        pattern::patterns()
            .get(self.pattern_index)
            .unwrap_or_else(pattern::default_pattern)
    }

    pub fn pattern_index(&self) -> usize {
        self.pattern_index
    }

    /// Selects a pattern by table index. Returns false for an invalid index.
    pub fn select_pattern(&mut self, index: usize) -> bool {
        if index < pattern::patterns().len() {
            self.pattern_index = index;
            true
        } else {
            false
        }
    }

    pub fn next_pattern(&mut self) {
        let len = pattern::patterns().len();
        self.pattern_index = if self.pattern_index >= len - 1 {
            0
        } else {
            self.pattern_index + 1
        };
    }

    pub fn previous_pattern(&mut self) {
        let len = pattern::patterns().len();
        self.pattern_index = if self.pattern_index == 0 {
            len - 1
        } else {
            self.pattern_index - 1
        };
    }

    /// Whether the pace setting has any effect on the selected pattern.
    pub fn pace_enabled(&self) -> bool {
        self.pattern().uses_pace
    }

    pub fn step_pace(&mut self, steps: i32) {
        self.pace = PACE_RANGE.step_by(self.pace, steps);
    }

    pub fn step_session(&mut self, steps: i32) {
        self.session_minutes = SESSION_RANGE.step_by(self.session_minutes, steps);
    }

    /// Configured session length.
    pub fn session_length(&self) -> Duration {
        Duration::from_secs_f64(self.session_minutes * 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_snap_rounds_to_step() {
        assert_eq!(PACE_RANGE.snap(5.3), 5.5);
        assert_eq!(PACE_RANGE.snap(5.2), 5.0);
        assert_eq!(SESSION_RANGE.snap(7.74), 7.5);
    }

    #[test]
    fn test_snap_clamps_to_bounds() {
        assert_eq!(PACE_RANGE.snap(0.0), 2.0);
        assert_eq!(PACE_RANGE.snap(-4.0), 2.0);
        assert_eq!(PACE_RANGE.snap(12.0), 9.0);
        assert_eq!(SESSION_RANGE.snap(0.1), 0.5);
        assert_eq!(SESSION_RANGE.snap(600.0), 60.0);
    }

    #[test]
    fn test_step_by_stays_in_range() {
        assert_eq!(PACE_RANGE.step_by(5.5, 1), 6.0);
        assert_eq!(PACE_RANGE.step_by(9.0, 1), 9.0);
        assert_eq!(PACE_RANGE.step_by(2.0, -1), 2.0);
        assert_eq!(SESSION_RANGE.step_by(5.0, -3), 3.5);
    }

    #[test]
    fn test_fraction() {
        assert_eq!(PACE_RANGE.fraction(2.0), 0.0);
        assert_eq!(PACE_RANGE.fraction(9.0), 1.0);
        assert_eq!(PACE_RANGE.fraction(5.5), 0.5);
    }

    #[test]
    fn test_apply_entry_valid() {
        let outcome = apply_entry(&PACE_RANGE, 5.5, " 7 ");
        assert_eq!(outcome, EntryOutcome { value: 7.0, alert: false });

        let outcome = apply_entry(&PACE_RANGE, 5.5, "6.3");
        assert_eq!(outcome, EntryOutcome { value: 6.5, alert: false });
    }

    #[test]
    fn test_apply_entry_clamps_with_alert() {
        let outcome = apply_entry(&PACE_RANGE, 5.5, "20");
        assert_eq!(outcome, EntryOutcome { value: 9.0, alert: true });

        let outcome = apply_entry(&SESSION_RANGE, 5.0, "0");
        assert_eq!(outcome, EntryOutcome { value: 0.5, alert: true });
    }

    #[test]
    fn test_apply_entry_garbage_keeps_current() {
        let outcome = apply_entry(&PACE_RANGE, 6.0, "fast");
        assert_eq!(outcome, EntryOutcome { value: 6.0, alert: true });

        let outcome = apply_entry(&SESSION_RANGE, 5.0, "");
        assert_eq!(outcome, EntryOutcome { value: 5.0, alert: true });
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert_eq!(parse_number("inf"), Err(ConfigError::NotFinite));
        assert_eq!(parse_number("NaN"), Err(ConfigError::NotFinite));
        assert_eq!(
            parse_number("abc"),
            Err(ConfigError::NotANumber("abc".to_string()))
        );
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_pace(5.5), "5.5 bpm");
        assert_eq!(format_pace(6.0), "6.0 bpm");
        assert_eq!(format_minutes(5.0), "5 min");
        assert_eq!(format_minutes(0.5), "0.5 min");
        assert_eq!(format_minutes(12.5), "12.5 min");
    }

    #[test]
    fn test_pattern_cycling_wraps() {
        let mut settings = Settings::default();
        let count = pattern::patterns().len();
        settings.previous_pattern();
        assert_eq!(settings.pattern_index(), count - 1);
        settings.next_pattern();
        assert_eq!(settings.pattern_index(), 0);
        assert!(!settings.select_pattern(count));
        assert!(settings.select_pattern(count - 1));
        assert_eq!(settings.pattern().name, "4-7-8 (+hold)");
        assert!(!settings.pace_enabled());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut settings = Settings::default();
        settings.select_pattern(2);
        settings.step_pace(3);
        settings.step_session(10);
        assert_ne!(settings, Settings::default());

        settings.reset();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.pattern().name, pattern::DEFAULT_PATTERN);
        assert_eq!(settings.pace, 5.5);
        assert_eq!(settings.session_minutes, 5.0);
    }

    #[test]
    fn test_session_length() {
        let settings = Settings {
            session_minutes: 0.5,
            ..Settings::default()
        };
        assert_eq!(settings.session_length(), Duration::from_secs(30));
    }

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from(["breathtui", "-P", "Vitality (2:1)", "-p", "11", "-d", "2.2"])
            .unwrap();
        let settings = Settings::from_cli(&cli).unwrap();
        assert_eq!(settings.pattern().name, "Vitality (2:1)");
        assert_eq!(settings.pace, 9.0);
        assert_eq!(settings.session_minutes, 2.0);
    }

    #[test]
    fn test_from_cli_rejects_non_finite() {
        for args in [
            ["breathtui", "--pace", "NaN"],
            ["breathtui", "--pace", "inf"],
            ["breathtui", "--duration", "nan"],
            ["breathtui", "--duration", "-inf"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert_eq!(Settings::from_cli(&cli), Err(ConfigError::NotFinite), "{args:?}");
        }
    }

    #[test]
    fn test_snap_maps_nan_to_default() {
        assert_eq!(PACE_RANGE.snap(f64::NAN), PACE_RANGE.default);
        assert_eq!(SESSION_RANGE.snap(f64::NAN), SESSION_RANGE.default);
        assert_eq!(SESSION_RANGE.step_by(f64::NAN, 1), SESSION_RANGE.default);
    }

    #[test]
    fn test_from_cli_unknown_pattern() {
        let cli = Cli::try_parse_from(["breathtui", "--pattern", "square"]).unwrap();
        assert_eq!(
            Settings::from_cli(&cli),
            Err(ConfigError::UnknownPattern("square".to_string()))
        );
    }
}
