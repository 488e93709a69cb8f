//! One completed entity's transit time.

use qn_core::EntityId;

/// Total time from arrival to leaving the last stage, in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitSample {
    pub entity_id:     EntityId,
    pub total_elapsed: f64,
}
