//! Shared test utilities for skillbook.

pub mod fixtures;
