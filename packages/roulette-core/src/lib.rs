//! Low level core functionality shared by every package in the roulette workspace.
//!
//! Included in this crate:
//! - Match phase handling: [`competition`]
//! - Monotonic time sources: [`time`]
//! - Console logging: [`logger`]
//! - Shared subsystem handles: [`handle`]

pub mod competition;
pub mod handle;
pub mod logger;
pub mod time;
