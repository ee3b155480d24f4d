//! Case-insensitive lookups over a skills document.

use super::skill::{Category, Skill, SkillsDocument};

/// Where a skill lives in the document.
#[derive(Debug, Clone, Copy)]
pub struct SkillMatch<'a> {
    pub category: &'a Category,
    pub category_index: usize,
    pub skill_index: usize,
    pub skill: &'a Skill,
}

/// Name comparison used for both skills and categories.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Find a skill by name in any category.
#[must_use]
pub fn find_skill<'a>(doc: &'a SkillsDocument, name: &str) -> Option<SkillMatch<'a>> {
    doc.skill_categories
        .iter()
        .enumerate()
        .find_map(|(category_index, category)| {
            category
                .skills
                .iter()
                .position(|skill| names_match(&skill.name, name))
                .map(|skill_index| SkillMatch {
                    category,
                    category_index,
                    skill_index,
                    skill: &category.skills[skill_index],
                })
        })
}

/// Index of the category with the given name.
#[must_use]
pub fn find_category(doc: &SkillsDocument, name: &str) -> Option<usize> {
    doc.skill_categories
        .iter()
        .position(|category| names_match(&category.name, name))
}
