//! Per-player countdown clocks
//!
//! A [`Timer`] never reads wall-clock time itself. Its owner feeds it
//! elapsed time from a [`Clock`] and receives [`TimerEvent`]s back, so
//! pause and reset take effect immediately: time reported after a pause
//! or reset is discarded, never turned into a late tick.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock. Clones share the same time, so a test can keep one
/// handle while the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Paused,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Remaining time changed (or was reset)
    Tick { remaining: u32 },
    /// Reached zero; fires once until the next reset
    Expired,
}

/// Countdown of whole time units
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    duration: u32,
    remaining: u32,
    state: TimerState,
    unit: Duration,
    /// Elapsed time not yet converted into ticks
    pending: Duration,
}

impl Timer {
    /// Countdown of `duration` seconds
    pub fn new(duration: u32) -> Self {
        Self::with_unit(duration, Duration::from_secs(1))
    }

    pub fn with_unit(duration: u32, unit: Duration) -> Self {
        debug_assert!(!unit.is_zero());
        Self {
            duration,
            remaining: duration,
            state: TimerState::Paused,
            unit,
            pending: Duration::ZERO,
        }
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    #[inline]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }

    /// Paused → running. No-op when running or expired.
    pub fn start(&mut self) -> bool {
        if self.is_running() || self.is_expired() {
            return false;
        }
        self.state = TimerState::Running;
        self.pending = Duration::ZERO;
        true
    }

    /// Idempotent
    pub fn pause(&mut self) {
        self.state = TimerState::Paused;
        self.pending = Duration::ZERO;
    }

    /// Back to full duration, paused. Reports the full duration.
    pub fn reset(&mut self) -> TimerEvent {
        self.remaining = self.duration;
        self.pause();
        TimerEvent::Tick {
            remaining: self.remaining,
        }
    }

    /// One elapsed unit. Ignored unless running.
    pub fn tick(&mut self) -> Vec<TimerEvent> {
        if !self.is_running() {
            return Vec::new();
        }

        self.remaining = self.remaining.saturating_sub(1);
        let mut events = vec![TimerEvent::Tick {
            remaining: self.remaining,
        }];

        if self.remaining == 0 {
            self.pause();
            events.push(TimerEvent::Expired);
        }
        events
    }

    /// Feed elapsed time; emits one tick per whole unit while running.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        if !self.is_running() {
            return events;
        }

        self.pending += elapsed;
        while self.is_running() && self.pending >= self.unit {
            self.pending -= self.unit;
            events.extend(self.tick());
        }
        events
    }
}

/// Format seconds as zero-padded `MM:SS`
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
