//! skillbook - manage the skills.json behind a portfolio site

use std::process::ExitCode;

use clap::error::{ContextKind, ErrorKind};
use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use skillbook::app::AppContext;
use skillbook::cli::output::report_error;
use skillbook::cli::{Cli, OutputFormat, requested_output_format};
use skillbook::{Result, SkillsError};

fn main() -> ExitCode {
    let args: Vec<_> = std::env::args_os().collect();
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => return exit_for_parse_error(&err, requested_output_format(&args)),
    };
    init_tracing(&cli);

    let format = cli.output_format();
    if format.use_colors() {
        colored::control::set_override(console::colors_enabled());
    } else {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, format);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    skillbook::cli::commands::run(&ctx, &cli.command)
}

/// Help and version exit 0; a missing or unknown command prints usage and exits 1.
///
/// In JSON mode every rejection is a single error object on stdout instead.
fn exit_for_parse_error(err: &clap::Error, format: OutputFormat) -> ExitCode {
    let usage_error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        ErrorKind::InvalidSubcommand => SkillsError::InvalidCommand(
            err.get(ContextKind::InvalidSubcommand)
                .map(ToString::to_string)
                .unwrap_or_default(),
        ),
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand | ErrorKind::MissingSubcommand => {
            SkillsError::Usage("no command given".to_string())
        }
        _ => SkillsError::Usage(first_line(&err.to_string())),
    };

    match (format, &usage_error) {
        (OutputFormat::Json, _) => report_error(&usage_error, format),
        (_, SkillsError::InvalidCommand(_)) => {
            eprintln!("Error: {usage_error}");
            eprintln!();
            let _ = Cli::command().write_help(&mut std::io::stderr());
        }
        _ => {
            let _ = err.print();
        }
    }
    ExitCode::FAILURE
}

fn first_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info,skillbook=debug",
        2 => "debug,skillbook=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.output_format() == OutputFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(console::colors_enabled_stderr()),
            )
            .init();
    }
}
