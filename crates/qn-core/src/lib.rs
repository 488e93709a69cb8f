//! `qn-core`: foundational types for the queue-net simulation framework.
//!
//! This crate is a dependency of every other `qn-*` crate.  It has no `qn-*`
//! dependencies and minimal external ones (`rand`, `thiserror`, `tracing`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `EntityId`, `StageId`                                   |
//! | [`time`]   | `SimTime`, `SimClock`                                   |
//! | [`config`] | `SimConfig`, `Capacities`                               |
//! | [`rng`]    | `EntityRng` (per-entity)                                |
//! | [`error`]  | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config, time, and IDs.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Capacities, SimConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{EntityId, StageId};
pub use rng::EntityRng;
pub use time::{SimClock, SimTime};
