//! Cycle progress engine.
//!
//! Pure functions mapping a normalized cycle position to the current phase,
//! the progress within that phase and the size of the breathing circle.

use crate::constants::circle::MAX_ARC_DEGREES;
use crate::pattern::{BreathingPattern, PhaseKind};

/// Where the cycle currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSnapshot {
    /// Phase the progress value falls in
    pub phase: PhaseKind,
    /// Index of that phase within the pattern
    pub index: usize,
    /// Fraction of the phase already elapsed, in [0, 1]
    pub fraction: f64,
    /// Time left in the phase, in seconds
    pub remaining_secs: f64,
}

/// Length of one full breathing cycle in seconds.
pub fn cycle_seconds(pattern: &BreathingPattern, pace_bpm: f64) -> f64 {
    if pattern.uses_pace {
        60.0 / pace_bpm
    } else {
        pattern.total_units()
    }
}

/// Moves `prev` forward by `tick_secs` worth of cycle, wrapping into [0, 1).
pub fn advance(prev: f64, tick_secs: f64, pattern: &BreathingPattern, pace_bpm: f64) -> f64 {
    let cycle = cycle_seconds(pattern, pace_bpm);
    debug_assert!(cycle > 0.0, "cycle length must be positive");

    let next = (prev + tick_secs / cycle).rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for values just below zero
    if next >= 1.0 {
        0.0
    } else {
        next
    }
}

/// Number of cycle ends crossed when advancing `prev` by `tick_secs`.
///
/// Counts every crossing, so a single long tick after a stall still reports
/// each completed cycle.
pub fn completed_cycles(prev: f64, tick_secs: f64, pattern: &BreathingPattern, pace_bpm: f64) -> u32 {
    let next = advance(prev, tick_secs, pattern, pace_bpm);
    let whole = prev + tick_secs / cycle_seconds(pattern, pace_bpm) - next;
    whole.round().max(0.0) as u32
}

/// Splits a cycle position into phase, in-phase fraction and time left.
///
/// Phase boundaries are closed on the left, so a value sitting exactly on a
/// boundary belongs to the following phase. If rounding carries the position
/// past every phase, the last phase is reported as complete.
pub fn resolve_phase(progress: f64, pattern: &BreathingPattern, pace_bpm: f64) -> PhaseSnapshot {
    let total = pattern.total_units();
    let secs_per_unit = cycle_seconds(pattern, pace_bpm) / total;
    let t = progress * total;

    let mut offset = 0.0;
    for (index, (&duration, &phase)) in pattern.phases.iter().zip(pattern.labels).enumerate() {
        if t < offset + duration {
            let into = t - offset;
            return PhaseSnapshot {
                phase,
                index,
                fraction: into / duration,
                remaining_secs: (duration - into) * secs_per_unit,
            };
        }
        offset += duration;
    }

    let index = pattern.labels.len() - 1;
    PhaseSnapshot {
        phase: pattern.labels[index],
        index,
        fraction: 1.0,
        remaining_secs: 0.0,
    }
}

/// Circle size multiplier for a phase at the given fraction.
pub fn scale_factor(phase: PhaseKind, fraction: f64) -> f64 {
    match phase {
        PhaseKind::Inhale => 0.2 + 0.8 * fraction,
        PhaseKind::Exhale => 1.0 - 0.8 * fraction,
        PhaseKind::Hold => 1.0,
    }
}

/// Sweep of the progress arc in degrees.
pub fn arc_extent(fraction: f64) -> f64 {
    (MAX_ARC_DEGREES * fraction).min(MAX_ARC_DEGREES)
}
