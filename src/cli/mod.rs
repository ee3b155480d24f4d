//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// Manage the skills.json file behind a portfolio site
#[derive(Parser, Debug)]
#[command(name = "skillbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    /// Skills file to operate on (overrides config and SKILLBOOK_STORE)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Config file path (default: ~/.config/skillbook/config.toml, then ./skillbook.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (human, json, plain)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Force plain output (no colors, no emoji)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective output format.
    ///
    /// Priority order:
    /// 1. `--plain`
    /// 2. `--output-format`
    /// 3. `--machine`
    /// 4. Human
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        resolve_output_format(self.plain, self.output_format, self.machine)
    }
}

fn resolve_output_format(plain: bool, explicit: Option<OutputFormat>, machine: bool) -> OutputFormat {
    if plain {
        return OutputFormat::Plain;
    }
    if let Some(fmt) = explicit {
        return fmt;
    }
    if machine {
        return OutputFormat::Json;
    }
    OutputFormat::Human
}

/// Output format asked for on the raw command line.
///
/// Used when clap rejects the arguments, so a usage error under `-m` is still
/// reported as JSON. Same priority as [`Cli::output_format`].
#[must_use]
pub fn requested_output_format<I, S>(args: I) -> OutputFormat
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let parse = |value: &str| <OutputFormat as ValueEnum>::from_str(value, true).ok();
    let mut plain = false;
    let mut machine = false;
    let mut explicit = None;

    let mut args = args
        .into_iter()
        .skip(1)
        .map(|arg| arg.as_ref().to_string_lossy().into_owned());
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--" => break,
            "--plain" => plain = true,
            "-m" | "--machine" => machine = true,
            "-O" | "--output-format" => explicit = args.next().as_deref().and_then(parse),
            other => {
                if let Some(value) = other.strip_prefix("--output-format=") {
                    explicit = parse(value);
                } else if let Some(value) = other.strip_prefix("-O") {
                    explicit = parse(value.trim_start_matches('='));
                }
            }
        }
    }
    resolve_output_format(plain, explicit, machine)
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a skill to an existing category
    Add(commands::add::AddArgs),

    /// Change a skill's level and/or description
    Update(commands::update::UpdateArgs),

    /// Remove a skill
    Remove(commands::remove::RemoveArgs),

    /// List all skills by category
    List(commands::list::ListArgs),

    /// Validate the skills file
    Check(commands::check::CheckArgs),

    /// Render the skills section as HTML or JSON
    Render(commands::render::RenderArgs),
}
