//! Simulation time model.
//!
//! # Design
//!
//! Time is a continuous logical quantity measured in minutes.  `SimTime`
//! wraps an `f64` and imposes a total order on it (`f64::total_cmp`) so that
//! times can key ordered collections such as the event queue.
//!
//! `SimClock` holds the current instant.  Only the scheduler advances it, and
//! it never moves backwards: an attempt to do so is reported as
//! [`CoreError::ClockRegression`].

use std::cmp::Ordering;
use std::fmt;

use crate::{CoreError, CoreResult};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation instant, in minutes since the start of the run.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Minutes since the start of the run.
    #[inline]
    pub fn minutes(self) -> f64 {
        self.0
    }

    /// `true` for finite, non-negative instants, the only ones a run can
    /// ever reach.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Minutes elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl From<f64> for SimTime {
    fn from(minutes: f64) -> Self {
        SimTime(minutes)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.2}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The logical clock of one run.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    now: SimTime,
}

impl SimClock {
    /// A clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Move the clock forward to `t`.  Staying at the same instant is fine;
    /// moving backwards is an error and leaves the clock untouched.
    pub fn advance_to(&mut self, t: SimTime) -> CoreResult<()> {
        if t < self.now {
            return Err(CoreError::ClockRegression { now: self.now, requested: t });
        }
        self.now = t;
        Ok(())
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.now.0.max(0.0);
        let minutes = whole.trunc() as u64;
        write!(f, "{} ({}h{:02}m)", self.now, minutes / 60, minutes % 60)
    }
}
