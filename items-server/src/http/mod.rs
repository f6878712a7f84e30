//! HTTP server layer
//!
//! Axum server with:
//! - Server-rendered pages for the item list and forms
//! - Post/redirect/get with signed flash cookies
//! - Request tracing and timeouts
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod flash;
pub mod routes;
pub mod server;

pub use error::HttpError;
pub use server::{build_router, run_server, ServerError};
