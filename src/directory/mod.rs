//! In-memory activity directory
//!
//! The directory is the single piece of shared state in the service: a
//! mapping from activity name to activity record, seeded once at startup
//! and mutated in place by signup and unregister calls.

pub mod seed;
pub mod store;

pub use store::{ActivityDirectory, DirectoryError};
