//! skillbook check - Validate the skills file

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_json, robot_ok};
use crate::core::check_document;
use crate::error::{Result, SkillsError};

#[derive(Args, Debug)]
pub struct CheckArgs {}

#[derive(Serialize)]
struct CheckReport {
    store: String,
    categories: usize,
    skills: usize,
    problems: usize,
}

pub fn run(ctx: &AppContext, _args: &CheckArgs) -> Result<()> {
    let doc = ctx.store.load()?;
    let violations = check_document(&doc);
    let path = ctx.store.path().display().to_string();

    if !violations.is_empty() {
        match ctx.output {
            OutputFormat::Json => {}
            OutputFormat::Human => {
                for violation in &violations {
                    println!("  {} {violation}", "✗".red());
                }
            }
            OutputFormat::Plain => {
                for violation in &violations {
                    println!("  - {violation}");
                }
            }
        }
        return Err(SkillsError::InvariantViolated {
            problems: violations.iter().map(ToString::to_string).collect(),
        });
    }

    match ctx.output {
        OutputFormat::Json => emit_json(&robot_ok(CheckReport {
            store: path,
            categories: doc.skill_categories.len(),
            skills: doc.skill_count(),
            problems: 0,
        })),
        OutputFormat::Human => {
            println!(
                "{} {path}: {} categories, {} skills, no problems",
                "✅".green(),
                doc.skill_categories.len(),
                doc.skill_count()
            );
            Ok(())
        }
        OutputFormat::Plain => {
            println!(
                "{path}: {} categories, {} skills, no problems",
                doc.skill_categories.len(),
                doc.skill_count()
            );
            Ok(())
        }
    }
}
