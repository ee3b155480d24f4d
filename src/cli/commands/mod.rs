//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use colored::Colorize;
use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::cli::output::{OutputFormat, emit_json, robot_ok};
use crate::core::{Outcome, SkillsDocument};
use crate::error::Result;

pub mod add;
pub mod check;
pub mod list;
pub mod remove;
pub mod render;
pub mod update;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Add(args) => add::run(ctx, args),
        Commands::Update(args) => update::run(ctx, args),
        Commands::Remove(args) => remove::run(ctx, args),
        Commands::List(args) => list::run(ctx, args),
        Commands::Check(args) => check::run(ctx, args),
        Commands::Render(args) => render::run(ctx, args),
    }
}

#[derive(Serialize)]
struct MutationReport<'a> {
    #[serde(flatten)]
    outcome: &'a Outcome,
    message: String,
    last_updated: &'a str,
}

/// Load, mutate, save, report. Nothing is written unless `mutate` succeeds.
fn apply_mutation(
    ctx: &AppContext,
    mutate: impl FnOnce(&mut SkillsDocument) -> Result<Outcome>,
) -> Result<()> {
    let mut doc = ctx.store.load()?;
    let outcome = mutate(&mut doc)?;
    ctx.store.save(&mut doc)?;
    info!(store = %ctx.store.path().display(), "{outcome}");

    match ctx.output {
        OutputFormat::Json => emit_json(&robot_ok(MutationReport {
            outcome: &outcome,
            message: outcome.to_string(),
            last_updated: &doc.last_updated,
        })),
        OutputFormat::Human => {
            println!("{} {}", "✅".green(), "Skills data updated successfully!".green());
            println!("{} {outcome}", "✅".green());
            Ok(())
        }
        OutputFormat::Plain => {
            println!("Skills data updated successfully!");
            println!("{outcome}");
            Ok(())
        }
    }
}
