//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Skill errors
//! - 2xx: Category errors
//! - 3xx: Config errors
//! - 4xx: Command errors
//! - 5xx: Network errors
//! - 6xx: Storage errors
//! - 8xx: Validation errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for JSON output.
///
/// Each variant maps to a numeric code (e.g., `SkillNotFound` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Skill errors (1xx)
    // ========================================
    /// E101: No skill with the given name exists in any category
    SkillNotFound,
    /// E102: A skill with the given name already exists somewhere in the store
    DuplicateSkill,

    // ========================================
    // Category errors (2xx)
    // ========================================
    /// E201: The named category does not exist
    CategoryNotFound,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Config file has invalid syntax or values
    ConfigInvalid,

    // ========================================
    // Command errors (4xx)
    // ========================================
    /// E401: Command name missing or unrecognized
    InvalidCommand,

    // ========================================
    // Network errors (5xx)
    // ========================================
    /// E501: Remote skills document could not be fetched
    FetchFailed,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Store file missing, unreadable, or not valid JSON
    StoreReadError,
    /// E602: Store file could not be written
    StoreWriteError,
    /// E605: Serialization/deserialization failed
    SerializationError,

    // ========================================
    // Validation errors (8xx)
    // ========================================
    /// E801: Operator input failed validation
    ValidationFailed,
    /// E802: Store file violates a data invariant
    InvariantViolated,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `SkillNotFound` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::SkillNotFound => 101,
            Self::DuplicateSkill => 102,

            Self::CategoryNotFound => 201,

            Self::ConfigInvalid => 301,

            Self::InvalidCommand => 401,

            Self::FetchFailed => 501,

            Self::StoreReadError => 601,
            Self::StoreWriteError => 602,
            Self::SerializationError => 605,

            Self::ValidationFailed => 801,
            Self::InvariantViolated => 802,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::SkillNotFound => "Run `skillbook list` to see every skill and its exact name",
            Self::DuplicateSkill => "Skill names are unique across all categories. Use `skillbook update` to change an existing skill",
            Self::CategoryNotFound => "Categories are never created implicitly. Pick one of the existing categories shown by `skillbook list`",
            Self::ConfigInvalid => "Check TOML syntax in the config file and the SKILLBOOK_* environment variables",
            Self::InvalidCommand => "Run `skillbook help` to see the available commands",
            Self::FetchFailed => "Check the render source URL and that the server answers with 200 and a JSON body",
            Self::StoreReadError => "Check that the skills file exists and is valid JSON, or point --store at the right file",
            Self::StoreWriteError => "Check disk space and write permissions on the skills file and its directory",
            Self::SerializationError => "The data format may be corrupted. Check the skills file for validity",
            Self::ValidationFailed => "Names must be non-empty and levels must be whole numbers from 0 to 100",
            Self::InvariantViolated => "Run `skillbook check` and fix the reported entries in the skills file",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::SerializationError)
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "skill",
            2 => "category",
            3 => "config",
            4 => "command",
            5 => "network",
            6 => "storage",
            8 => "validation",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::SkillNotFound,
            Self::DuplicateSkill,
            Self::CategoryNotFound,
            Self::ConfigInvalid,
            Self::InvalidCommand,
            Self::FetchFailed,
            Self::StoreReadError,
            Self::StoreWriteError,
            Self::SerializationError,
            Self::ValidationFailed,
            Self::InvariantViolated,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
