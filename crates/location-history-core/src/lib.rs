//! Location History Core — shared domain abstractions.
//!
//! This crate defines the coordinate record, the history error taxonomy, and
//! the repository trait that all other crates depend on. It contains no
//! transport or storage code.

pub mod error;
pub mod location;
pub mod repository;
