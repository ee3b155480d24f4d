use proptest::prelude::*;

use skillbook::core::{
    Category, Level, LevelPolicy, NewSkill, SkillPatch, SkillsDocument, add_skill, check_document,
    remove_skill, update_skill,
};
use skillbook::SkillsError;

use super::strategies::{Op, arb_document, arb_ops};

fn nth_skill_name(doc: &SkillsDocument, target: usize) -> Option<String> {
    let names = doc.skill_names();
    if names.is_empty() {
        None
    } else {
        Some(names[target % names.len()].to_string())
    }
}

fn level(value: i64) -> Level {
    Level::from_value(value, LevelPolicy::Reject).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every category stays sorted after any sequence of mutations.
    #[test]
    fn mutations_keep_every_category_sorted(doc in arb_document(), ops in arb_ops()) {
        let mut doc = doc;
        for (step, op) in ops.into_iter().enumerate() {
            match op {
                Op::Add { level: value, category } => {
                    let name = doc.skill_categories[category % doc.skill_categories.len()].name.clone();
                    let new = NewSkill::parse(&format!("added {step}"), &value.to_string(), &name, None, LevelPolicy::Reject).unwrap();
                    add_skill(&mut doc, new).unwrap();
                }
                Op::Update { target, level: value } => {
                    if let Some(name) = nth_skill_name(&doc, target) {
                        let patch = SkillPatch { level: value.map(level), description: None };
                        update_skill(&mut doc, &name, patch).unwrap();
                    }
                }
                Op::Remove { target } => {
                    if let Some(name) = nth_skill_name(&doc, target) {
                        remove_skill(&mut doc, &name).unwrap();
                    }
                }
            }
            prop_assert!(doc.skill_categories.iter().all(Category::is_sorted));
        }
        prop_assert!(check_document(&doc).is_empty());
    }

    /// Ties keep the earlier skill first.
    #[test]
    fn add_is_stable_on_ties(doc in arb_document(), value in 0i64..=100) {
        let mut doc = doc;
        let category = doc.skill_categories[0].name.clone();
        add_skill(&mut doc, NewSkill::parse("first-tie", &value.to_string(), &category, None, LevelPolicy::Reject).unwrap()).unwrap();
        add_skill(&mut doc, NewSkill::parse("second-tie", &value.to_string(), &category, None, LevelPolicy::Reject).unwrap()).unwrap();

        let names: Vec<&str> = doc.skill_categories[0].skills.iter().map(|s| s.name.as_str()).collect();
        let first = names.iter().position(|n| *n == "first-tie").unwrap();
        let second = names.iter().position(|n| *n == "second-tie").unwrap();
        prop_assert!(first < second);
    }

    /// A failed mutation leaves the document untouched.
    #[test]
    fn duplicate_add_changes_nothing(doc in arb_document(), target in any::<usize>(), value in 0i64..=100) {
        let mut doc = doc;
        if let Some(existing) = nth_skill_name(&doc, target) {
            let before = doc.clone();
            let category = doc.skill_categories[0].name.clone();
            let new = NewSkill::parse(&existing.to_uppercase(), &value.to_string(), &category, None, LevelPolicy::Reject).unwrap();
            let err = add_skill(&mut doc, new).unwrap_err();
            prop_assert!(matches!(err, SkillsError::DuplicateSkill(_)));
            prop_assert_eq!(doc, before);
        }
    }
}
