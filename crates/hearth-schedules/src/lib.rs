//! `hearth-schedules` — persistence for per-schedule rule documents.
//!
//! # Overview
//!
//! [`ScheduleStore`] keeps the full `schedule_id -> document` mapping in
//! memory and mirrors it to a hidden JSON file in the storage directory.
//! The mapping is loaded once at startup; every mutation queues a full
//! rewrite of the backing file that the mutating caller never waits for.
//! A fetch issued right after an update therefore sees the new value even
//! while the file on disk is still stale.

pub mod error;
pub mod store;

pub use error::{Result, ScheduleError};
pub use store::{ScheduleStore, PERSISTENCE};
