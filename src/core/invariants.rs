//! Whole-document invariant checks used by `skillbook check`.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::skill::SkillsDocument;
use super::validation::{MAX_LEVEL, MIN_LEVEL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    EmptyCategoryName { position: usize },
    DuplicateCategory { name: String, first: String },
    EmptySkillName { category: String },
    DuplicateSkill { name: String, first: String, first_category: String, category: String },
    LevelOutOfRange { skill: String, level: i64 },
    UnreadableLevel { skill: String, raw: String },
    Unsorted { category: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategoryName { position } => {
                write!(f, "category #{} has an empty name", position + 1)
            }
            Self::DuplicateCategory { name, first } => {
                write!(f, "category \"{name}\" duplicates \"{first}\"")
            }
            Self::EmptySkillName { category } => {
                write!(f, "a skill in \"{category}\" has an empty name")
            }
            Self::DuplicateSkill {
                name,
                first,
                first_category,
                category,
            } => write!(
                f,
                "skill \"{name}\" in \"{category}\" duplicates \"{first}\" in \"{first_category}\""
            ),
            Self::LevelOutOfRange { skill, level } => {
                write!(f, "skill \"{skill}\" has level {level} outside {MIN_LEVEL}-{MAX_LEVEL}")
            }
            Self::UnreadableLevel { skill, raw } => {
                write!(f, "skill \"{skill}\" has level {raw}, not a whole number")
            }
            Self::Unsorted { category } => {
                write!(f, "skills in \"{category}\" are not sorted by level")
            }
        }
    }
}

/// Every invariant violation in the document, in document order.
#[must_use]
pub fn check_document(doc: &SkillsDocument) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut categories: HashMap<String, &str> = HashMap::new();
    let mut skills: HashMap<String, (&str, &str)> = HashMap::new();

    for (position, category) in doc.skill_categories.iter().enumerate() {
        if category.name.trim().is_empty() {
            violations.push(Violation::EmptyCategoryName { position });
        } else if let Some(first) = categories.get(&category.name.to_lowercase()) {
            violations.push(Violation::DuplicateCategory {
                name: category.name.clone(),
                first: (*first).to_string(),
            });
        } else {
            categories.insert(category.name.to_lowercase(), &category.name);
        }

        for skill in &category.skills {
            if skill.name.trim().is_empty() {
                violations.push(Violation::EmptySkillName {
                    category: category.name.clone(),
                });
            } else if let Some((first, first_category)) = skills.get(&skill.name.to_lowercase()) {
                violations.push(Violation::DuplicateSkill {
                    name: skill.name.clone(),
                    first: (*first).to_string(),
                    first_category: (*first_category).to_string(),
                    category: category.name.clone(),
                });
            } else {
                skills.insert(skill.name.to_lowercase(), (&skill.name, &category.name));
            }

            if let Some(raw) = &skill.unreadable_level {
                violations.push(Violation::UnreadableLevel {
                    skill: skill.name.clone(),
                    raw: raw.clone(),
                });
            } else if !(MIN_LEVEL..=MAX_LEVEL).contains(&skill.level) {
                violations.push(Violation::LevelOutOfRange {
                    skill: skill.name.clone(),
                    level: skill.level,
                });
            }
        }

        if !category.is_sorted() {
            violations.push(Violation::Unsorted {
                category: category.name.clone(),
            });
        }
    }

    violations
}
