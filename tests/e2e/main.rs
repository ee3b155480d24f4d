//! E2E test suite entry point.

mod config_workflow;
mod fixture;
mod render_workflow;
