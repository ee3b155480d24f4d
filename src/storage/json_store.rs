//! The `skills.json` file store.
//!
//! The file is the only state: every invocation loads it whole and every
//! successful mutation rewrites it whole.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::core::SkillsDocument;
use crate::error::{Result, SkillsError};
use crate::utils::fs::write_atomic;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Handle to one skills file on disk.
#[derive(Debug, Clone)]
pub struct SkillsStore {
    path: PathBuf,
}

impl SkillsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the document.
    pub fn load(&self) -> Result<SkillsDocument> {
        let raw = std::fs::read_to_string(&self.path).map_err(|err| SkillsError::StoreRead {
            path: self.path.clone(),
            reason: err.to_string(),
        })?;
        let doc = from_json(&raw).map_err(|err| SkillsError::StoreRead {
            path: self.path.clone(),
            reason: format!("invalid JSON: {err}"),
        })?;
        debug!(
            path = %self.path.display(),
            categories = doc.skill_categories.len(),
            skills = doc.skill_count(),
            "loaded skills store"
        );
        for skill in doc.skill_categories.iter().flat_map(|c| &c.skills) {
            if let Some(raw) = &skill.unreadable_level {
                warn!(skill = %skill.name, level = %raw, "level is not a whole number, reading it as 0");
            }
        }
        Ok(doc)
    }

    /// Stamp `lastUpdated` with today's UTC date and overwrite the file.
    pub fn save(&self, doc: &mut SkillsDocument) -> Result<()> {
        self.save_dated(doc, Utc::now().date_naive())
    }

    /// Same as [`save`](Self::save) with an explicit date.
    ///
    /// On failure `doc.last_updated` keeps its previous value.
    pub fn save_dated(&self, doc: &mut SkillsDocument, date: NaiveDate) -> Result<()> {
        let previous = std::mem::replace(&mut doc.last_updated, date.format(DATE_FORMAT).to_string());

        let written = to_json(doc).and_then(|json| {
            write_atomic(&self.path, json.as_bytes()).map_err(|err| SkillsError::StoreWrite {
                path: self.path.clone(),
                reason: err.to_string(),
            })
        });

        if let Err(err) = written {
            doc.last_updated = previous;
            return Err(err);
        }

        info!(
            path = %self.path.display(),
            last_updated = %doc.last_updated,
            "saved skills store"
        );
        Ok(())
    }
}

/// Serialize with 2-space indentation and no trailing newline.
pub fn to_json(doc: &SkillsDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

pub fn from_json(raw: &str) -> serde_json::Result<SkillsDocument> {
    serde_json::from_str(raw)
}
