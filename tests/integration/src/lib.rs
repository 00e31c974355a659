//! Integration test utilities for the commenting subsystem
//!
//! Provides helpers for assembling a full service stack against a real
//! database, plus an in-memory content resolver standing in for the host
//! application's models.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
