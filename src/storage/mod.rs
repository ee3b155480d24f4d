//! Storage layer for skillbook
//!
//! A single JSON file, loaded and rewritten wholesale.

pub mod json_store;

pub use json_store::{DATE_FORMAT, SkillsStore, from_json, to_json};
