//! Output formats and the JSON envelopes shared by every command.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ErrorCode, Result, SkillsError};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Emoji badges and colors (default)
    #[default]
    Human,
    /// One JSON object per invocation on stdout
    Json,
    /// ASCII badges, no colors
    Plain,
}

impl OutputFormat {
    /// Check if this format should use colors and emoji
    #[must_use]
    pub const fn use_colors(&self) -> bool {
        matches!(self, Self::Human)
    }

    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json)
    }
}

#[derive(Debug, Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    RobotResponse {
        status: RobotStatus::Ok,
        timestamp: Utc::now(),
        version: crate::VERSION.to_string(),
        data,
    }
}

/// The JSON object printed on stdout when a command fails in JSON mode.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: bool,
    pub code: ErrorCode,
    pub numeric_code: u16,
    pub message: String,
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl From<&SkillsError> for ErrorReport {
    fn from(err: &SkillsError) -> Self {
        let structured = err.to_structured();
        Self {
            error: true,
            code: structured.code,
            numeric_code: structured.numeric_code,
            message: structured.message,
            suggestion: structured.suggestion,
            context: structured.context,
        }
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

/// Print a command failure the way `format` expects.
///
/// JSON goes to stdout so callers can parse it; the text formats go to stderr.
pub fn report_error(err: &SkillsError, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let report = ErrorReport::from(err);
            match serde_json::to_string(&report) {
                Ok(json) => println!("{json}"),
                Err(_) => eprintln!("Error: {err}"),
            }
        }
        OutputFormat::Human => {
            eprintln!("{} {}", "❌".red(), err.to_string().red());
            if let Some(hint) = error_hint(err) {
                eprintln!("{}", hint.dimmed());
            }
        }
        OutputFormat::Plain => {
            eprintln!("Error: {err}");
            if let Some(hint) = error_hint(err) {
                eprintln!("{hint}");
            }
        }
    }
}

/// Extra line printed under a text-mode error, when the error carries one.
#[must_use]
pub fn error_hint(err: &SkillsError) -> Option<String> {
    match err {
        SkillsError::CategoryNotFound { available, .. } => {
            Some(format!("Available categories: {}", available.join(", ")))
        }
        SkillsError::SkillNotFound { similar, .. } if !similar.is_empty() => {
            Some(format!("Did you mean: {}?", similar.join(", ")))
        }
        SkillsError::StoreRead { .. } | SkillsError::Validation(_) | SkillsError::Config(_) => {
            Some(err.to_structured().suggestion)
        }
        _ => None,
    }
}
