//! Property tests over the library API.

mod sort_tests;
mod strategies;
