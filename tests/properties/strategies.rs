use proptest::prelude::*;

use skillbook::core::{Category, Skill, SkillsDocument};

/// Names are made unique by suffixing the generation index.
pub fn arb_document() -> impl Strategy<Value = SkillsDocument> {
    prop::collection::vec(prop::collection::vec(("[A-Za-z.+#]{1,10}", 0i64..=100, ".{0,30}"), 0..6), 1..5)
        .prop_map(|categories| {
            let mut next = 0usize;
            let skill_categories = categories
                .into_iter()
                .enumerate()
                .map(|(index, skills)| {
                    let mut category = Category::new(
                        format!("Category {index}"),
                        skills
                            .into_iter()
                            .map(|(stem, level, description)| {
                                next += 1;
                                Skill::new(format!("{stem}-{next}"), level, description)
                            })
                            .collect(),
                    );
                    category.sort_skills();
                    category
                })
                .collect();
            SkillsDocument {
                skill_categories,
                last_updated: "2024-01-15".to_string(),
                ..SkillsDocument::default()
            }
        })
}

#[derive(Debug, Clone)]
pub enum Op {
    Add { level: i64, category: usize },
    Update { target: usize, level: Option<i64> },
    Remove { target: usize },
}

pub fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        (0i64..=100, any::<usize>()).prop_map(|(level, category)| Op::Add { level, category }),
        (any::<usize>(), prop::option::of(0i64..=100))
            .prop_map(|(target, level)| Op::Update { target, level }),
        any::<usize>().prop_map(|target| Op::Remove { target }),
    ];
    prop::collection::vec(op, 1..20)
}
