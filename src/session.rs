//! Breathing session state.
//!
//! [`Session`] owns the only mutable animation state, the [`CycleState`],
//! and advances it once per tick while running. Timers live in the
//! [`Scheduler`](crate::scheduler::Scheduler); the session only reacts to
//! the ticks it is given.

use std::time::Duration;

use tracing::{debug, info};

use crate::engine::{self, PhaseSnapshot};
use crate::pattern::{BreathingPattern, PhaseKind};

/// Position within the current breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleState {
    /// Fraction of the cycle elapsed, in [0, 1)
    pub progress: f64,
    /// Phase the progress value resolved to on the last tick
    pub current_phase: PhaseKind,
}

impl CycleState {
    /// Start-of-cycle state showing the pattern's rest phase.
    pub fn resting(pattern: &BreathingPattern) -> Self {
        Self {
            progress: 0.0,
            current_phase: pattern.rest_phase(),
        }
    }
}

/// Everything the renderer needs from one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreathFrame {
    /// Resolved phase
    pub snapshot: PhaseSnapshot,
    /// Circle size multiplier
    pub scale: f64,
}

/// A breathing session and its cycle state.
#[derive(Debug, Clone)]
pub struct Session {
    state: CycleState,
    running: bool,
    /// Configured session length
    length: Duration,
    /// Time spent running so far
    elapsed: Duration,
    /// Completed breathing cycles
    cycles: u32,
    /// Output of the latest tick, cleared when the session stops
    frame: Option<BreathFrame>,
}

impl Session {
    /// Creates an idle session resting on `pattern`.
    pub fn new(pattern: &BreathingPattern) -> Self {
        Self {
            state: CycleState::resting(pattern),
            running: false,
            length: Duration::ZERO,
            elapsed: Duration::ZERO,
            cycles: 0,
            frame: None,
        }
    }

    /// Starts a fresh session from the beginning of the cycle.
    pub fn start(&mut self, pattern: &BreathingPattern, length: Duration) {
        self.reset(pattern);
        self.length = length;
        self.running = true;
        info!(
            pattern = pattern.name,
            length_secs = length.as_secs_f64(),
            "session started"
        );
    }

    /// Stops the session and puts the cycle back at rest.
    pub fn stop(&mut self, pattern: &BreathingPattern) {
        if self.running {
            info!(
                elapsed_secs = self.elapsed.as_secs_f64(),
                cycles = self.cycles,
                "session stopped"
            );
        }
        self.running = false;
        self.reset(pattern);
    }

    fn reset(&mut self, pattern: &BreathingPattern) {
        self.state = CycleState::resting(pattern);
        self.elapsed = Duration::ZERO;
        self.cycles = 0;
        self.frame = None;
    }

    /// Advances the cycle by `dt`.
    ///
    /// Returns `None` without touching any state when the session is not
    /// running, which covers a tick that was already queued when the session
    /// stopped.
    pub fn tick(&mut self, dt: Duration, pattern: &BreathingPattern, pace_bpm: f64) -> Option<BreathFrame> {
        if !self.running {
            return None;
        }

        let previous = self.state.progress;
        let dt_secs = dt.as_secs_f64();
        let progress = engine::advance(previous, dt_secs, pattern, pace_bpm);
        self.cycles += engine::completed_cycles(previous, dt_secs, pattern, pace_bpm);

        let snapshot = engine::resolve_phase(progress, pattern, pace_bpm);
        if snapshot.phase != self.state.current_phase {
            debug!(
                from = self.state.current_phase.key(),
                to = snapshot.phase.key(),
                progress,
                "phase change"
            );
        }

        self.state = CycleState {
            progress,
            current_phase: snapshot.phase,
        };
        self.elapsed = (self.elapsed + dt).min(self.length);

        let frame = BreathFrame {
            snapshot,
            scale: engine::scale_factor(snapshot.phase, snapshot.fraction),
        };
        self.frame = Some(frame);
        Some(frame)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Latest tick output, if running.
    pub fn frame(&self) -> Option<&BreathFrame> {
        self.frame.as_ref()
    }

    /// Circle size to draw right now.
    pub fn scale(&self) -> f64 {
        self.frame.map_or(1.0, |f| f.scale)
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Session time left.
    pub fn remaining(&self) -> Duration {
        self.length.saturating_sub(self.elapsed)
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }
}
