//! skillbook list - Show every skill grouped by category

use std::fmt::Write as _;

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_json, robot_ok};
use crate::core::{Badge, SkillsDocument};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ListArgs {}

#[derive(Serialize)]
struct ListedCategory<'a> {
    name: &'a str,
    skills: Vec<ListedSkill<'a>>,
}

#[derive(Serialize)]
struct ListedSkill<'a> {
    name: &'a str,
    level: i64,
    description: &'a str,
    badge: Badge,
}

#[derive(Serialize)]
struct ListReport<'a> {
    categories: Vec<ListedCategory<'a>>,
    skill_count: usize,
    last_updated: &'a str,
}

pub fn run(ctx: &AppContext, _args: &ListArgs) -> Result<()> {
    let doc = ctx.store.load()?;
    if ctx.output == OutputFormat::Json {
        return emit_json(&robot_ok(list_report(&doc)));
    }
    print!("{}", format_list(&doc, ctx.output));
    Ok(())
}

fn list_report(doc: &SkillsDocument) -> ListReport<'_> {
    ListReport {
        categories: doc
            .skill_categories
            .iter()
            .map(|category| ListedCategory {
                name: &category.name,
                skills: category
                    .skills
                    .iter()
                    .map(|skill| ListedSkill {
                        name: &skill.name,
                        level: skill.level,
                        description: &skill.description,
                        badge: Badge::for_level(skill.level),
                    })
                    .collect(),
            })
            .collect(),
        skill_count: doc.skill_count(),
        last_updated: &doc.last_updated,
    }
}

/// The text report: one heading per category, one line per skill.
#[must_use]
pub fn format_list(doc: &SkillsDocument, format: OutputFormat) -> String {
    let rich = format.use_colors();
    let mut out = String::new();

    if rich {
        let _ = writeln!(out, "📊 {}", "Current Skills:".bold());
    } else {
        out.push_str("Current Skills:\n");
    }

    for category in &doc.skill_categories {
        if rich {
            let _ = writeln!(out, "\n{}", format!("{}:", category.name).cyan().bold());
        } else {
            let _ = writeln!(out, "\n{}:", category.name);
        }
        for skill in &category.skills {
            let badge = Badge::for_level(skill.level);
            let marker = if rich { badge.emoji() } else { badge.ascii() };
            let _ = writeln!(
                out,
                "  {marker} {}: {}% - {}",
                skill.name, skill.level, skill.description
            );
        }
    }

    let _ = writeln!(out, "\nLast updated: {}", doc.last_updated);
    out
}
