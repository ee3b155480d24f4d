//! skillbook remove - Remove a skill

use clap::Args;

use crate::app::AppContext;
use crate::core::remove_skill;
use crate::core::validation::skill_name;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Skill name (case-insensitive)
    pub name: String,
}

pub fn run(ctx: &AppContext, args: &RemoveArgs) -> Result<()> {
    let name = skill_name(&args.name)?;
    super::apply_mutation(ctx, |doc| remove_skill(doc, &name))
}
