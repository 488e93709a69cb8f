//! The arrival generator: the one process that never completes.

use qn_core::{EntityId, SimTime};

use crate::Process;

/// What one firing of the generator produces.
#[derive(Debug)]
pub struct Arrival {
    /// The newly arrived entity, in `Created` state.
    pub process: Process,
    /// When the generator wants to fire again; `None` once the arrival cap
    /// is reached.
    pub next_at: Option<SimTime>,
}

/// Spawns one entity per `interval` minutes with strictly increasing IDs.
#[derive(Debug)]
pub struct ArrivalGenerator {
    interval:  f64,
    seed:      u64,
    next_id:   EntityId,
    remaining: Option<u64>,
}

impl ArrivalGenerator {
    /// `max_arrivals = None` spawns forever; the scheduler's horizon is what
    /// stops it.
    pub fn new(interval: f64, seed: u64, max_arrivals: Option<u64>) -> Self {
        Self {
            interval,
            seed,
            next_id: EntityId(0),
            remaining: max_arrivals,
        }
    }

    /// Spawn the next entity at `now`.  Returns `None` if the cap has
    /// already been reached.
    pub fn fire(&mut self, now: SimTime) -> Option<Arrival> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }

        let id = self.next_id;
        self.next_id = id.next();

        let next_at = match self.remaining {
            Some(0) => None,
            _ => Some(now + self.interval),
        };
        Some(Arrival { process: Process::new(id, now, self.seed), next_at })
    }

    /// Number of entities spawned so far.
    pub fn spawned(&self) -> u64 {
        self.next_id.0
    }
}
