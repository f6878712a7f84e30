//! Repository implementations for database access
//!
//! Repositories borrow a caller-supplied `Session`; they never commit.

pub mod items;

pub use items::ItemRepo;
