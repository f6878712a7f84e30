//! Database layer - storage gateway and repositories
//!
//! # Design Principles
//!
//! - One pooled connection per request, wrapped in a `Session` (unit of work)
//! - Liveness is checked before a pooled connection is reused
//! - Sessions never auto-commit; the caller decides with `finish`/`commit`
//! - Rely on DB constraints for lengths and ranges, surface violations as errors
//! - No retries here; retry policy belongs to the caller

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod session;

pub use error::StoreError;
pub use pool::{Backend, Store};
pub use repos::*;
pub use session::Session;
