//! `ResourcePool`: a fixed number of interchangeable slots plus a FIFO of
//! entities waiting for one.

use std::collections::VecDeque;

use qn_core::{EntityId, StageId};

use crate::{ResourceError, ResourceResult, Ticket};

/// Running counters kept by every pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Slots handed out in total, immediately or after waiting.
    pub grants:        u64,
    /// Grants that went to an entity which had to wait in the FIFO.
    pub queued_grants: u64,
    /// Longest the wait queue has ever been.
    pub peak_queue:    usize,
}

/// A bounded-capacity shared resource with strict FIFO waiting.
///
/// Invariant: `0 <= in_use <= capacity` after every call.
#[derive(Debug)]
pub struct ResourcePool {
    id:       StageId,
    capacity: u32,
    in_use:   u32,
    waiting:  VecDeque<EntityId>,
    stats:    PoolStats,
}

impl ResourcePool {
    /// Create a pool with `capacity` slots.  Capacity is fixed for the
    /// pool's lifetime and must be at least 1.
    pub fn new(id: StageId, capacity: u32) -> ResourceResult<Self> {
        if capacity == 0 {
            return Err(ResourceError::ZeroCapacity(id));
        }
        Ok(Self {
            id,
            capacity,
            in_use: 0,
            waiting: VecDeque::new(),
            stats: PoolStats::default(),
        })
    }

    /// Ask for a slot on behalf of `who`.
    ///
    /// Returns `Some(ticket)` when a slot is free.  Otherwise `who` joins the
    /// tail of the wait queue and `None` is returned; the slot will arrive
    /// later as the return value of some [`release`](Self::release).
    pub fn request(&mut self, who: EntityId) -> Option<Ticket> {
        if self.in_use < self.capacity {
            self.in_use += 1;
            self.stats.grants += 1;
            return Some(Ticket::new(self.id, who));
        }
        self.waiting.push_back(who);
        self.stats.peak_queue = self.stats.peak_queue.max(self.waiting.len());
        None
    }

    /// Give a slot back.
    ///
    /// If anyone is waiting, the slot passes directly to the head of the
    /// queue and that entity's new ticket is returned; `in_use` is unchanged
    /// in that case, so nobody else can slip in between.
    pub fn release(&mut self, ticket: Ticket) -> ResourceResult<Option<Ticket>> {
        if ticket.pool() != self.id {
            return Err(ResourceError::ForeignTicket {
                pool:        self.id,
                ticket_pool: ticket.pool(),
                holder:      ticket.holder(),
            });
        }

        match self.waiting.pop_front() {
            Some(next) => {
                self.stats.grants += 1;
                self.stats.queued_grants += 1;
                Ok(Some(Ticket::new(self.id, next)))
            }
            None => {
                // Tickets only come from this pool, so at least one is out.
                self.in_use -= 1;
                Ok(None)
            }
        }
    }

    pub fn id(&self) -> StageId {
        self.id
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Slots currently held.
    pub fn in_use(&self) -> u32 {
        self.in_use
    }

    /// Slots free right now.
    pub fn available(&self) -> u32 {
        self.capacity - self.in_use
    }

    /// Number of entities waiting for a slot.
    pub fn queue_len(&self) -> usize {
        self.waiting.len()
    }

    /// Waiting entities, head of the queue first.
    pub fn waiting(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.waiting.iter().copied()
    }

    pub fn stats(&self) -> PoolStats {
        self.stats
    }
}
