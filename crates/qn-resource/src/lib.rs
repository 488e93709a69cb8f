//! `qn-resource`: capacity-limited pools that entities contend for.
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`pool`]   | `ResourcePool`, `PoolStats`                     |
//! | [`ticket`] | `Ticket`: proof of one granted slot            |
//! | [`error`]  | `ResourceError`, `ResourceResult<T>`            |
//!
//! A pool never blocks anything itself.  `request` either hands back a
//! [`Ticket`] or parks the requester in the FIFO; `release` consumes a ticket
//! and, when someone is parked, hands the freed slot straight to the head of
//! the FIFO.  Waking the new holder is the scheduler's job.

pub mod error;
pub mod pool;
pub mod ticket;


pub use error::{ResourceError, ResourceResult};
pub use pool::{PoolStats, ResourcePool};
pub use ticket::Ticket;
