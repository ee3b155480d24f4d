use tempfile::TempDir;

use crate::core::{Category, Skill, SkillsDocument};
use crate::storage::{SkillsStore, to_json};

/// Three categories, each already sorted by level.
pub fn sample_document() -> SkillsDocument {
    SkillsDocument {
        skill_categories: vec![
            Category::new(
                "Frontend",
                vec![
                    Skill::new("JavaScript", 95, "ES6+, async patterns, DOM APIs"),
                    Skill::new("React", 90, "Hooks, context, component design"),
                    Skill::new("CSS", 80, "Flexbox, Grid, animations"),
                ],
            ),
            Category::new(
                "Backend",
                vec![
                    Skill::new("Node.js", 85, "Express, REST APIs"),
                    Skill::new("Python", 75, "Scripting and automation"),
                ],
            ),
            Category::new(
                "DevOps & Tools",
                vec![
                    Skill::new("Git", 88, "Branching strategies, rebasing"),
                    Skill::new("Docker", 70, "Container orchestration"),
                ],
            ),
        ],
        last_updated: "2024-01-15".to_string(),
        ..SkillsDocument::default()
    }
}

/// A skills file inside its own temp directory.
pub struct StoreFixture {
    pub dir: TempDir,
    pub store: SkillsStore,
}

impl StoreFixture {
    /// Store path set, but no file written yet.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = SkillsStore::new(dir.path().join("skills.json"));
        println!("[FIXTURE] Store path: {:?}", store.path());
        Self { dir, store }
    }

    pub fn with_contents(contents: &str) -> Self {
        let fixture = Self::empty();
        std::fs::write(fixture.store.path(), contents).expect("Failed to write store");
        fixture
    }

    pub fn with_document(doc: &SkillsDocument) -> Self {
        Self::with_contents(&to_json(doc).expect("Failed to serialize document"))
    }

    pub fn with_sample() -> Self {
        Self::with_document(&sample_document())
    }

    pub fn read_raw(&self) -> String {
        std::fs::read_to_string(self.store.path()).expect("Failed to read store")
    }
}
