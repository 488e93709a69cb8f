//! Plain data row types written by output backends.

use serde::Serialize;

/// One completed entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaitSampleRow {
    pub entity_id:     u64,
    /// Simulation time at which the entity left the last stage.
    pub completed_at:  f64,
    pub total_elapsed: f64,
}

/// End-of-run counters of one stage's pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolSummaryRow {
    pub stage:         u16,
    pub name:          String,
    pub capacity:      u32,
    pub grants:        u64,
    pub queued_grants: u64,
    pub peak_queue:    u64,
    /// Entities still queued when the run stopped.
    pub waiting:       u64,
}
