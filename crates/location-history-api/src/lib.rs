//! Location history API — axum routes, error mapping, and shared state.
//!
//! The binary entry point lives in `main.rs`; everything else is exposed
//! here so integration tests can build the same router the server runs.

pub mod error;
pub mod routes;
pub mod state;
