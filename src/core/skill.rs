//! Skills document model.
//!
//! Mirrors the on-disk `skills.json` contract:
//!
//! ```json
//! {
//!   "skillCategories": [
//!     { "name": "Frontend", "skills": [ { "name": "JavaScript", "level": 95, "description": "..." } ] }
//!   ],
//!   "lastUpdated": "2024-01-31"
//! }
//! ```
//!
//! Keys this crate does not know about are carried in `extra` so a
//! load/save cycle never drops hand-added data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The whole skills store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsDocument {
    /// Categories in display order.
    pub skill_categories: Vec<Category>,
    /// `YYYY-MM-DD` of the last successful write.
    #[serde(default)]
    pub last_updated: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named group of skills, rendered as one section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Sorted by descending level.
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One competency with its proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawSkill")]
pub struct Skill {
    pub name: String,
    /// Signed so legacy out-of-range values still load; input is range-checked.
    pub level: i64,
    pub description: String,
    /// The stored `level` JSON when it was not a whole number (e.g. `null`).
    /// Such skills load with level 0 and are reported by `check`.
    #[serde(skip)]
    pub unreadable_level: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// On-disk shape of a skill before the level is interpreted.
#[derive(Deserialize)]
struct RawSkill {
    name: String,
    #[serde(default)]
    level: Value,
    #[serde(default)]
    description: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<RawSkill> for Skill {
    fn from(raw: RawSkill) -> Self {
        let (level, unreadable_level) = match whole_number(&raw.level) {
            Some(level) => (level, None),
            None => (0, Some(raw.level.to_string())),
        };
        Self {
            name: raw.name,
            level,
            description: raw.description,
            unreadable_level,
            extra: raw.extra,
        }
    }
}

/// Integers, and floats with no fractional part, as `i64`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::float_cmp)]
fn whole_number(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(level) = number.as_i64() {
        return Some(level);
    }
    let float = number.as_f64()?;
    let level = float as i64;
    (level as f64 == float).then_some(level)
}

impl SkillsDocument {
    /// Category names in document order.
    #[must_use]
    pub fn category_names(&self) -> Vec<String> {
        self.skill_categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Every skill name in the document, in display order.
    #[must_use]
    pub fn skill_names(&self) -> Vec<&str> {
        self.skill_categories
            .iter()
            .flat_map(|c| c.skills.iter().map(|s| s.name.as_str()))
            .collect()
    }

    /// Total number of skill records across all categories.
    #[must_use]
    pub fn skill_count(&self) -> usize {
        self.skill_categories.iter().map(|c| c.skills.len()).sum()
    }
}

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>, skills: Vec<Skill>) -> Self {
        Self {
            name: name.into(),
            skills,
            extra: Map::new(),
        }
    }

    /// Stable sort, highest level first.
    pub fn sort_skills(&mut self) {
        self.skills.sort_by(|a, b| b.level.cmp(&a.level));
    }

    /// Whether the skills are already in descending-level order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.skills.windows(2).all(|pair| pair[0].level >= pair[1].level)
    }
}

impl Skill {
    #[must_use]
    pub fn new(name: impl Into<String>, level: i64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            description: description.into(),
            unreadable_level: None,
            extra: Map::new(),
        }
    }
}

/// Description used when a skill is added without one.
#[must_use]
pub fn default_description(name: &str) -> String {
    format!("Professional experience with {name}")
}
