//! `qn-process`: what an entity does, one resumption at a time.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`stage`]    | `Stage`, `ServiceRange`, `Pipeline` (incl. the airport one)  |
//! | [`intent`]   | `Wakeup` (why a process resumes), `Intent` (what it asks for) |
//! | [`process`]  | `Process`, `ProcessState`                                    |
//! | [`arrivals`] | `ArrivalGenerator`, `Arrival`                                |
//! | [`error`]    | `ProcessError`, `ProcessResult<T>`                           |
//!
//! # Design notes
//!
//! A process is a resumable state machine, not a coroutine.  The scheduler
//! calls [`Process::resume`] with a [`Wakeup`]; the process updates its own
//! state and answers with [`Intent`]s.  The scheduler then applies those
//! intents in order (touching pools, the event queue and the statistics
//! collector), so a process never mutates shared state directly.
//!
//! ```text
//! Created   --Start-------------> Waiting(s0)        [Request(s0)]
//! Waiting   --Granted(ticket)---> InService(s)       [Hold{s, d}]
//! InService --ServiceDone-------> Waiting(s+1)       [Release, Request(s+1)]
//! InService --ServiceDone-------> Completed          [Release, Complete(sample)]   (last stage)
//! ```

pub mod arrivals;
pub mod error;
pub mod intent;
pub mod process;
pub mod stage;

#[cfg(test)]
mod tests;

pub use arrivals::{Arrival, ArrivalGenerator};
pub use error::{ProcessError, ProcessResult};
pub use intent::{Intent, Wakeup};
pub use process::{Process, ProcessState};
pub use stage::{Pipeline, ServiceRange, Stage};
