//! Display model for the rendered skills section.
//!
//! Built from a document once, then filtered in place. Filtering only flips
//! `visible` flags; the document itself is never touched.

use serde::Serialize;

use super::tier::SkillTier;
use crate::core::SkillsDocument;
use crate::core::validation::{MAX_LEVEL, MIN_LEVEL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillsView {
    pub categories: Vec<CategoryView>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub name: String,
    pub skills: Vec<SkillView>,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillView {
    pub name: String,
    pub level: i64,
    /// Progress bar width in percent, always 0-100.
    pub width: u8,
    pub description: String,
    pub tier: SkillTier,
    pub visible: bool,
}

impl SkillsView {
    #[must_use]
    pub fn build(doc: &SkillsDocument) -> Self {
        Self {
            categories: doc
                .skill_categories
                .iter()
                .map(|category| CategoryView {
                    name: category.name.clone(),
                    skills: category
                        .skills
                        .iter()
                        .map(|skill| SkillView {
                            name: skill.name.clone(),
                            level: skill.level,
                            width: bar_width(skill.level),
                            description: skill.description.clone(),
                            tier: SkillTier::for_level(skill.level),
                            visible: true,
                        })
                        .collect(),
                    visible: !category.skills.is_empty(),
                })
                .collect(),
            last_updated: doc.last_updated.clone(),
        }
    }

    /// Show only skills whose name contains `query`, ignoring case. A blank
    /// query shows everything. Categories with nothing visible are hidden.
    pub fn apply_filter(&mut self, query: &str) {
        let needle = query.trim().to_lowercase();
        for category in &mut self.categories {
            for skill in &mut category.skills {
                skill.visible = needle.is_empty() || skill.name.to_lowercase().contains(&needle);
            }
            category.visible = category.skills.iter().any(|skill| skill.visible);
        }
    }

    #[must_use]
    pub fn visible_skill_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|category| &category.skills)
            .filter(|skill| skill.visible)
            .count()
    }
}

fn bar_width(level: i64) -> u8 {
    u8::try_from(level.clamp(MIN_LEVEL, MAX_LEVEL)).unwrap_or(0)
}
