//! skillbook update - Change a skill's level and/or description

use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::app::AppContext;
use crate::cli::output::OutputFormat;
use crate::core::validation::{optional_level, optional_text, skill_name};
use crate::core::{SkillPatch, update_skill};
use crate::error::{Result, SkillsError};

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Skill name (case-insensitive)
    pub name: String,

    /// New level, 0-100; pass "" to keep the current one
    #[arg(value_name = "LEVEL", allow_negative_numbers = true)]
    pub level: Option<String>,

    /// New description
    #[arg(value_name = "DESCRIPTION")]
    pub description: Option<String>,

    /// New level; a lone positional after it is taken as DESCRIPTION
    #[arg(
        long = "level",
        short = 'l',
        value_name = "LEVEL",
        allow_negative_numbers = true
    )]
    pub level_flag: Option<String>,

    /// New description (same as the positional DESCRIPTION)
    #[arg(long = "description", short = 'd', value_name = "TEXT")]
    pub description_flag: Option<String>,
}

impl UpdateArgs {
    /// Resolve `(level, description)` from the positional and flag forms.
    ///
    /// With `--level`, the first positional after the name is the description.
    fn fields(&self) -> Result<(Option<&str>, Option<&str>)> {
        let positional = (self.level.as_deref(), self.description.as_deref());
        let (level, description) = match (self.level_flag.as_deref(), positional) {
            (Some(_), (_, Some(_))) => {
                return Err(SkillsError::Usage(
                    "--level leaves room for one positional DESCRIPTION, got two".to_string(),
                ));
            }
            (Some(flag), (lone, None)) => (Some(flag), lone),
            (None, fields) => fields,
        };
        match (self.description_flag.as_deref(), description) {
            (Some(_), Some(_)) => Err(SkillsError::Usage(
                "description given both as --description and as a positional".to_string(),
            )),
            (Some(flag), None) => Ok((level, Some(flag))),
            (None, description) => Ok((level, description)),
        }
    }
}

pub fn run(ctx: &AppContext, args: &UpdateArgs) -> Result<()> {
    let name = skill_name(&args.name)?;
    let (level, description) = args.fields()?;
    let patch = SkillPatch {
        level: optional_level(level, ctx.config.levels.policy)?,
        description: optional_text(description),
    };
    let touch_only = patch.is_empty();
    if touch_only {
        info!(skill = %name, "no fields supplied; only lastUpdated changes");
    }
    super::apply_mutation(ctx, |doc| update_skill(doc, &name, patch))?;

    if touch_only {
        let notice = "No level or description given; only lastUpdated was refreshed";
        match ctx.output {
            OutputFormat::Json => {}
            OutputFormat::Human => println!("{} {}", "ℹ".yellow(), notice.yellow()),
            OutputFormat::Plain => println!("Note: {notice}"),
        }
    }
    Ok(())
}
