//! `qn-sim`: the discrete-event scheduler of the queue-net framework.
//!
//! # Event loop
//!
//! ```text
//! while next event time < until:
//!   ① Pop      earliest (wake_time, sequence_id) off the EventQueue.
//!   ② Advance  SimClock moves to wake_time (never backwards).
//!   ③ Resume   Arrivals: spawn an entity, reschedule the generator.
//!              Entity:   Process::resume(wakeup) → Vec<Intent>.
//!   ④ Apply    Request / Hold / Release / Complete, in order.
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | Uses `FxHashMap` for the live-process table.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use qn_core::{Capacities, SimConfig};
//! use qn_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default())
//!     .capacities(Capacities::default())
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! let mean = sim.mean_wait()?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Activation, ProcessTable, Sim};
