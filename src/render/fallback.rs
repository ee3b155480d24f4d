//! Built-in document shown when the real one cannot be fetched.

use crate::core::{Category, Skill, SkillsDocument};

#[must_use]
pub fn fallback_document() -> SkillsDocument {
    SkillsDocument {
        skill_categories: vec![
            Category::new(
                "Frontend",
                vec![
                    Skill::new("JavaScript", 90, "Modern JavaScript and the DOM"),
                    Skill::new("HTML & CSS", 85, "Semantic markup and responsive layouts"),
                ],
            ),
            Category::new(
                "Backend",
                vec![Skill::new("Node.js", 80, "APIs and server-side tooling")],
            ),
        ],
        ..SkillsDocument::default()
    }
}
