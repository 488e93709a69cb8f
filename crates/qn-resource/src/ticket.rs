//! The token for one granted pool slot.

use qn_core::{EntityId, StageId};

/// Proof that `holder` occupies one slot of pool `pool`.
///
/// Only [`ResourcePool`][crate::ResourcePool] creates tickets, and
/// [`ResourcePool::release`][crate::ResourcePool::release] consumes them.
/// Neither `Clone` nor `Copy`: a slot is released once, by whoever holds
/// the ticket.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a ticket leaks a pool slot; pass it to ResourcePool::release"]
pub struct Ticket {
    pool:   StageId,
    holder: EntityId,
}

impl Ticket {
    pub(crate) fn new(pool: StageId, holder: EntityId) -> Self {
        Self { pool, holder }
    }

    /// The pool this slot belongs to.
    pub fn pool(&self) -> StageId {
        self.pool
    }

    /// The entity the slot was granted to.
    pub fn holder(&self) -> EntityId {
        self.holder
    }
}
