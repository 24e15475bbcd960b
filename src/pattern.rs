//! Breathing pattern table.
//!
//! A pattern is an ordered list of phase durations paired with the kind of
//! each phase. The table is compiled in and never changes at runtime.

use ratatui::style::Color;

/// One segment of a breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Inhale,
    Hold,
    Exhale,
}

impl PhaseKind {
    /// Capitalized label shown on screen.
    pub fn label(self) -> &'static str {
        match self {
            PhaseKind::Inhale => "Inhale",
            PhaseKind::Hold => "Hold",
            PhaseKind::Exhale => "Exhale",
        }
    }

    /// Lowercase key used in logs and the pattern listing.
    pub fn key(self) -> &'static str {
        match self {
            PhaseKind::Inhale => "inhale",
            PhaseKind::Hold => "hold",
            PhaseKind::Exhale => "exhale",
        }
    }

    /// Arc and label color for this phase.
    pub fn color(self) -> Color {
        match self {
            PhaseKind::Inhale => Color::Rgb(52, 152, 219), // #3498db
            PhaseKind::Hold => Color::Rgb(46, 204, 113),   // #2ecc71
            PhaseKind::Exhale => Color::Rgb(230, 126, 34), // #e67e22
        }
    }
}

/// A named breathing pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreathingPattern {
    /// Display name, unique within the table
    pub name: &'static str,
    /// Relative duration of each phase
    pub phases: &'static [f64],
    /// Whether the cycle length follows the pace setting
    pub uses_pace: bool,
    /// Kind of each phase, positionally paired with `phases`
    pub labels: &'static [PhaseKind],
}

impl BreathingPattern {
    /// Sum of all phase durations.
    pub fn total_units(&self) -> f64 {
        self.phases.iter().sum()
    }

    /// Phase shown while no session is running.
    ///
    /// The first exhale in the pattern, so the idle circle matches where a
    /// finished cycle leaves it.
    pub fn rest_phase(&self) -> PhaseKind {
        self.labels
            .iter()
            .copied()
            .find(|kind| *kind == PhaseKind::Exhale)
            .unwrap_or(PhaseKind::Exhale)
    }

    /// Durations formatted as a ratio, e.g. "4-7-8".
    pub fn ratio(&self) -> String {
        self.phases
            .iter()
            .map(|d| format!("{d}"))
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Name of the pattern selected at startup and after a reset.
pub const DEFAULT_PATTERN: &str = "Balanced (1:1)";

const INHALE_EXHALE: &[PhaseKind] = &[PhaseKind::Inhale, PhaseKind::Exhale];

static PATTERNS: [BreathingPattern; 4] = [
    BreathingPattern {
        name: "Balanced (1:1)",
        phases: &[1.0, 1.0],
        uses_pace: true,
        labels: INHALE_EXHALE,
    },
    BreathingPattern {
        name: "Calm (1:2)",
        phases: &[1.0, 2.0],
        uses_pace: true,
        labels: INHALE_EXHALE,
    },
    BreathingPattern {
        name: "Vitality (2:1)",
        phases: &[2.0, 1.0],
        uses_pace: true,
        labels: INHALE_EXHALE,
    },
    BreathingPattern {
        name: "4-7-8 (+hold)",
        phases: &[4.0, 7.0, 8.0],
        uses_pace: false,
        labels: &[PhaseKind::Inhale, PhaseKind::Hold, PhaseKind::Exhale],
    },
];

/// All built-in patterns in display order.
pub fn patterns() -> &'static [BreathingPattern] {
    &PATTERNS
}

/// Looks up a pattern by its exact name, returning its table position too.
pub fn find(name: &str) -> Option<(usize, &'static BreathingPattern)> {
    PATTERNS.iter().enumerate().find(|(_, p)| p.name == name)
}

/// Index of [`DEFAULT_PATTERN`].
pub fn default_index() -> usize {
    find(DEFAULT_PATTERN).map_or(0, |(index, _)| index)
}

/// The default pattern.
pub fn default_pattern() -> &'static BreathingPattern {
    &PATTERNS[default_index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_are_well_formed() {
        for pattern in patterns() {
            assert!(!pattern.phases.is_empty(), "{} has no phases", pattern.name);
            assert_eq!(pattern.phases.len(), pattern.labels.len(), "{}", pattern.name);
            assert!(pattern.phases.iter().all(|d| *d > 0.0), "{}", pattern.name);
            assert!(pattern.total_units() > 0.0);
        }
    }

    #[test]
    fn test_pattern_names_are_unique() {
        for (i, a) in patterns().iter().enumerate() {
            for b in &patterns()[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_default_pattern_exists() {
        assert!(find(DEFAULT_PATTERN).is_some());
        assert_eq!(default_pattern().name, DEFAULT_PATTERN);
        assert_eq!(patterns()[default_index()].name, DEFAULT_PATTERN);
    }

    #[test]
    fn test_find_is_exact() {
        assert!(find("4-7-8 (+hold)").is_some());
        assert!(find("4-7-8").is_none());
        assert!(find("balanced (1:1)").is_none());
        assert_eq!(find("Calm (1:2)").map(|(index, _)| index), Some(1));
    }

    #[test]
    fn test_rest_phase_is_exhale() {
        for pattern in patterns() {
            assert_eq!(pattern.rest_phase(), PhaseKind::Exhale);
        }
    }

    #[test]
    fn test_rest_phase_defaults_without_exhale() {
        let pattern = BreathingPattern {
            name: "hold only",
            phases: &[3.0],
            uses_pace: false,
            labels: &[PhaseKind::Hold],
        };
        assert_eq!(pattern.rest_phase(), PhaseKind::Exhale);
    }

    #[test]
    fn test_ratio_formatting() {
        assert_eq!(find("4-7-8 (+hold)").map(|(_, p)| p.ratio()), Some("4-7-8".to_string()));
        assert_eq!(find("Calm (1:2)").map(|(_, p)| p.ratio()), Some("1-2".to_string()));
    }
}
