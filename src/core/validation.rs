//! Operator input checks.
//!
//! Every argument that reaches a mutation goes through one of these parsers
//! first, so the mutation code only ever sees well-formed values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MIN_LEVEL: i64 = 0;
pub const MAX_LEVEL: i64 = 100;

/// What to do with a level outside 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelPolicy {
    /// Fail with `ValidationError::LevelOutOfRange`.
    #[default]
    Reject,
    /// Pull the value into range.
    Clamp,
}

impl FromStr for LevelPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "clamp" => Ok(Self::Clamp),
            other => Err(format!("unknown level policy '{other}' (expected reject or clamp)")),
        }
    }
}

impl fmt::Display for LevelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => f.write_str("reject"),
            Self::Clamp => f.write_str("clamp"),
        }
    }
}

/// A proficiency level known to be in 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Level(u8);

impl Level {
    /// Parse operator input. Surrounding whitespace and a trailing `%` are
    /// accepted; anything else that is not a whole number is rejected.
    pub fn parse(raw: &str, policy: LevelPolicy) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        let value: i64 = digits
            .parse()
            .map_err(|_| ValidationError::LevelNotInteger(raw.to_string()))?;
        Self::from_value(value, policy)
    }

    pub fn from_value(value: i64, policy: LevelPolicy) -> Result<Self, ValidationError> {
        let value = match policy {
            LevelPolicy::Reject if !(MIN_LEVEL..=MAX_LEVEL).contains(&value) => {
                return Err(ValidationError::LevelOutOfRange(value));
            }
            LevelPolicy::Reject => value,
            LevelPolicy::Clamp => value.clamp(MIN_LEVEL, MAX_LEVEL),
        };
        u8::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::LevelOutOfRange(value))
    }

    #[must_use]
    pub fn value(self) -> i64 {
        i64::from(self.0)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trimmed, non-empty skill name.
pub fn skill_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Trimmed, non-empty category name.
pub fn category_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(trimmed.to_string())
}

/// An optional level argument: `None` or an empty string means "not supplied".
pub fn optional_level(
    raw: Option<&str>,
    policy: LevelPolicy,
) -> Result<Option<Level>, ValidationError> {
    match raw {
        Some(value) if !value.trim().is_empty() => Level::parse(value, policy).map(Some),
        _ => Ok(None),
    }
}

/// An optional free-text argument: `None` or an empty string means "not supplied".
#[must_use]
pub fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
        .map(ToString::to_string)
}
