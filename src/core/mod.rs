//! Core skill types and logic

pub mod badge;
pub mod invariants;
pub mod lookup;
pub mod mutations;
pub mod skill;
pub mod validation;

pub use badge::Badge;
pub use invariants::{Violation, check_document};
pub use lookup::{SkillMatch, find_category, find_skill};
pub use mutations::{NewSkill, Outcome, SkillPatch, add_skill, remove_skill, update_skill};
pub use skill::{Category, Skill, SkillsDocument, default_description};
pub use validation::{Level, LevelPolicy};
