//! Run configuration.
//!
//! `SimConfig` carries the knobs of the scheduler itself (horizon, seed,
//! arrival cadence).  `Capacities` carries the three worker counts of the
//! airport scenario, the only values a user supplies.

use tracing::warn;

use crate::{CoreError, CoreResult, SimTime};

/// Default simulation horizon, in minutes.
pub const DEFAULT_HORIZON: f64 = 3_600.0;

/// Default master seed.
pub const DEFAULT_SEED: u64 = 123;

/// Default minutes between two consecutive arrivals.
pub const DEFAULT_ARRIVAL_INTERVAL: f64 = 1.0;

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Events at or after this instant are never executed by `Sim::run`.
    pub horizon: SimTime,

    /// Master RNG seed.  The same seed always produces identical samples.
    pub seed: u64,

    /// Minutes between arrivals.  The first arrival happens at time zero.
    pub arrival_interval: f64,

    /// Stop spawning after this many entities.  `None` spawns until the
    /// horizon.
    pub max_arrivals: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            horizon:          SimTime(DEFAULT_HORIZON),
            seed:             DEFAULT_SEED,
            arrival_interval: DEFAULT_ARRIVAL_INTERVAL,
            max_arrivals:     None,
        }
    }
}

impl SimConfig {
    /// Check that the horizon and arrival interval describe a runnable
    /// simulation.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.horizon.is_valid() || self.horizon.0 <= 0.0 {
            return Err(CoreError::Config(format!(
                "horizon must be a positive number of minutes, got {}",
                self.horizon.0
            )));
        }
        if !self.arrival_interval.is_finite() || self.arrival_interval <= 0.0 {
            return Err(CoreError::Config(format!(
                "arrival interval must be a positive number of minutes, got {}",
                self.arrival_interval
            )));
        }
        Ok(())
    }
}

// ── Capacities ────────────────────────────────────────────────────────────────

/// Worker counts at the three airport stages.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capacities {
    pub gate:     u32,
    pub security: u32,
    pub checkin:  u32,
}

impl Default for Capacities {
    /// 1 at the gate, 3 at security, 2 at check-in.
    fn default() -> Self {
        Self { gate: 1, security: 3, checkin: 2 }
    }
}

impl Capacities {
    /// Build from explicit counts; every count must be at least 1.
    pub fn new(gate: u32, security: u32, checkin: u32) -> CoreResult<Self> {
        for (name, value) in [("gate", gate), ("security", security), ("check-in", checkin)] {
            if value == 0 {
                return Err(CoreError::Config(format!(
                    "{name} capacity must be at least 1"
                )));
            }
        }
        Ok(Self { gate, security, checkin })
    }

    /// Parse the three counts from user-supplied text.
    pub fn parse(gate: &str, security: &str, checkin: &str) -> CoreResult<Self> {
        Self::new(
            parse_count("gate", gate)?,
            parse_count("security", security)?,
            parse_count("check-in", checkin)?,
        )
    }

    /// Like [`parse`](Self::parse), but any invalid field replaces all three
    /// counts with [`Capacities::default`].  Returns the error that caused
    /// the fallback so the caller can tell the user.
    pub fn parse_or_default(
        gate:     &str,
        security: &str,
        checkin:  &str,
    ) -> (Self, Option<CoreError>) {
        match Self::parse(gate, security, checkin) {
            Ok(caps) => (caps, None),
            Err(e) => {
                let defaults = Self::default();
                warn!(error = %e, ?defaults, "falling back to default capacities");
                (defaults, Some(e))
            }
        }
    }
}

fn parse_count(name: &str, raw: &str) -> CoreResult<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::Config(format!(
            "{name} capacity {raw:?} is not a whole number"
        )));
    }
    raw.parse::<u32>()
        .map_err(|e| CoreError::Config(format!("{name} capacity {raw:?}: {e}")))
}
