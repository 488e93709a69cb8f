//! `qn-schedule`: the time-ordered event queue.
//!
//! # Crate layout
//!
//! | Module         | Contents                                         |
//! |----------------|--------------------------------------------------|
//! | [`event_queue`]| `EventQueue<T>` (`BTreeMap<(SimTime, seq), T>`), `Event<T>` |
//! | [`error`]      | `ScheduleError`, `ScheduleResult<T>`             |
//!
//! # Ordering model (summary)
//!
//! ```text
//! key      = (wake_time, sequence_id)
//! pop      = smallest key
//! sequence = strictly increasing counter assigned by schedule()
//! ```
//!
//! Two events at the same instant therefore leave the queue in the order
//! they were scheduled.

pub mod error;
pub mod event_queue;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use event_queue::{Event, EventQueue};
