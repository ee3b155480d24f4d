//! Error handling for skillbook.
//!
//! This module provides:
//! - [`SkillsError`]: The main error enum for all skillbook operations
//! - [`ValidationError`]: Structured result of operator-input checks
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestions and context

mod codes;
mod suggestions;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::{suggest_for_error, suggest_similar_skills};

/// Main error type for skillbook operations.
#[derive(Error, Debug)]
pub enum SkillsError {
    #[error("Error loading {}: {reason}", .path.display())]
    StoreRead { path: PathBuf, reason: String },

    #[error("Error saving {}: {reason}", .path.display())]
    StoreWrite { path: PathBuf, reason: String },

    #[error("Category \"{category}\" not found!")]
    CategoryNotFound {
        category: String,
        available: Vec<String>,
    },

    #[error("Skill \"{0}\" already exists!")]
    DuplicateSkill(String),

    #[error("Skill \"{name}\" not found!")]
    SkillNotFound {
        name: String,
        similar: Vec<String>,
    },

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Arguments clap rejected for a known command, or no command at all.
    #[error("Invalid usage: {0}")]
    Usage(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Store check failed: {} problem(s) found", .problems.len())]
    InvariantViolated { problems: Vec<String> },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Fetch failed for {source_name}: {reason}")]
    Fetch { source_name: String, reason: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Explicit presence/type checks on operator input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("skill name must not be empty")]
    EmptyName,

    #[error("category name must not be empty")]
    EmptyCategory,

    #[error("level \"{0}\" is not a whole number")]
    LevelNotInteger(String),

    #[error("level {0} is outside 0-100")]
    LevelOutOfRange(i64),
}

impl SkillsError {
    /// Get the error code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::StoreRead { .. } => ErrorCode::StoreReadError,
            Self::StoreWrite { .. } => ErrorCode::StoreWriteError,
            Self::CategoryNotFound { .. } => ErrorCode::CategoryNotFound,
            Self::DuplicateSkill(_) => ErrorCode::DuplicateSkill,
            Self::SkillNotFound { .. } => ErrorCode::SkillNotFound,
            Self::InvalidCommand(_) | Self::Usage(_) => ErrorCode::InvalidCommand,
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::InvariantViolated { .. } => ErrorCode::InvariantViolated,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::Fetch { .. } => ErrorCode::FetchFailed,
            Self::Json(_) => ErrorCode::SerializationError,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::StoreRead { path, .. } | Self::StoreWrite { path, .. } => {
                Some(serde_json::json!({ "path": path.display().to_string() }))
            }
            Self::CategoryNotFound {
                category,
                available,
            } => Some(serde_json::json!({ "category": category, "available": available })),
            Self::DuplicateSkill(name) => Some(serde_json::json!({ "skill": name })),
            Self::SkillNotFound { name, similar } => {
                Some(serde_json::json!({ "skill": name, "similar": similar }))
            }
            Self::InvariantViolated { problems } => {
                Some(serde_json::json!({ "problems": problems }))
            }
            Self::InvalidCommand(command) => Some(serde_json::json!({ "command": command })),
            Self::Fetch { source_name, .. } => Some(serde_json::json!({ "source": source_name })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_skills_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "SKILL_NOT_FOUND")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 101)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    pub recoverable: bool,

    /// Error category (e.g., "skill", "storage")
    pub category: String,
}

impl StructuredError {
    /// Create a structured error from a `SkillsError`.
    #[must_use]
    pub fn from_skills_error(err: &SkillsError) -> Self {
        let code = err.code();
        let context = err.context();
        let suggestion = suggest_for_error(code, context.as_ref());

        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            suggestion,
            context,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }
}

/// Result type alias using `SkillsError`.
pub type Result<T> = std::result::Result<T, SkillsError>;
