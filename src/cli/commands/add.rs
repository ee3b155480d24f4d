//! skillbook add - Add a skill to an existing category

use clap::Args;

use crate::app::AppContext;
use crate::core::{NewSkill, add_skill};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Skill name, unique across all categories
    pub name: String,

    /// Proficiency level, 0-100
    #[arg(allow_negative_numbers = true)]
    pub level: String,

    /// Existing category (case-insensitive)
    pub category: String,

    /// Description (default: "Professional experience with <name>")
    pub description: Option<String>,
}

pub fn run(ctx: &AppContext, args: &AddArgs) -> Result<()> {
    let new = NewSkill::parse(
        &args.name,
        &args.level,
        &args.category,
        args.description.as_deref(),
        ctx.config.levels.policy,
    )?;
    super::apply_mutation(ctx, |doc| add_skill(doc, new))
}
