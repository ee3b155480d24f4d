//! The three store mutations.
//!
//! Each function checks everything it needs before touching the document, so
//! an `Err` always leaves the document exactly as it was. Persisting is the
//! caller's job.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::lookup::{find_category, find_skill};
use super::skill::{Skill, SkillsDocument, default_description};
use super::validation::{self, Level, LevelPolicy};
use crate::error::{Result, SkillsError, ValidationError, suggest_similar_skills};

/// Validated arguments for `add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSkill {
    pub name: String,
    pub level: Level,
    pub category: String,
    pub description: Option<String>,
}

impl NewSkill {
    pub fn parse(
        name: &str,
        level: &str,
        category: &str,
        description: Option<&str>,
        policy: LevelPolicy,
    ) -> std::result::Result<Self, ValidationError> {
        Ok(Self {
            name: validation::skill_name(name)?,
            level: Level::parse(level, policy)?,
            category: validation::category_name(category)?,
            description: validation::optional_text(description),
        })
    }
}

/// Fields to change on an existing skill. `None` leaves the field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillPatch {
    pub level: Option<Level>,
    pub description: Option<String>,
}

impl SkillPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.level.is_none() && self.description.is_none()
    }
}

/// What a successful mutation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Outcome {
    Added {
        skill: String,
        category: String,
        level: i64,
    },
    Updated {
        skill: String,
        category: String,
        level: i64,
        description: String,
    },
    Removed {
        skill: String,
        category: String,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added {
                skill, category, ..
            } => write!(f, "Added \"{skill}\" to {category} category"),
            Self::Updated { skill, .. } => write!(f, "Updated \"{skill}\""),
            Self::Removed { skill, .. } => write!(f, "Removed \"{skill}\""),
        }
    }
}

/// Add a skill to an existing category and re-sort that category.
pub fn add_skill(doc: &mut SkillsDocument, new: NewSkill) -> Result<Outcome> {
    let category_index =
        find_category(doc, &new.category).ok_or_else(|| SkillsError::CategoryNotFound {
            category: new.category.clone(),
            available: doc.category_names(),
        })?;

    if let Some(existing) = find_skill(doc, &new.name) {
        debug!(
            requested = %new.name,
            existing = %existing.skill.name,
            category = %existing.category.name,
            "duplicate skill name"
        );
        return Err(SkillsError::DuplicateSkill(new.name));
    }

    let description = new
        .description
        .unwrap_or_else(|| default_description(&new.name));
    let category = &mut doc.skill_categories[category_index];
    category
        .skills
        .push(Skill::new(new.name.clone(), new.level.value(), description));
    category.sort_skills();

    Ok(Outcome::Added {
        skill: new.name,
        category: category.name.clone(),
        level: new.level.value(),
    })
}

/// Apply a partial update to a skill and re-sort its category.
pub fn update_skill(doc: &mut SkillsDocument, name: &str, patch: SkillPatch) -> Result<Outcome> {
    let (category_index, skill_index) = locate(doc, name)?;

    let category = &mut doc.skill_categories[category_index];
    let skill = &mut category.skills[skill_index];
    if let Some(level) = patch.level {
        skill.level = level.value();
        skill.unreadable_level = None;
    }
    if let Some(description) = patch.description {
        skill.description = description;
    }
    let outcome = Outcome::Updated {
        skill: skill.name.clone(),
        category: category.name.clone(),
        level: skill.level,
        description: skill.description.clone(),
    };
    category.sort_skills();

    Ok(outcome)
}

/// Remove a skill from whichever category holds it.
pub fn remove_skill(doc: &mut SkillsDocument, name: &str) -> Result<Outcome> {
    let (category_index, skill_index) = locate(doc, name)?;

    let category = &mut doc.skill_categories[category_index];
    let removed = category.skills.remove(skill_index);

    Ok(Outcome::Removed {
        skill: removed.name,
        category: category.name.clone(),
    })
}

fn locate(doc: &SkillsDocument, name: &str) -> Result<(usize, usize)> {
    find_skill(doc, name)
        .map(|found| (found.category_index, found.skill_index))
        .ok_or_else(|| SkillsError::SkillNotFound {
            name: name.to_string(),
            similar: suggest_similar_skills(name, &doc.skill_names(), 3),
        })
}
