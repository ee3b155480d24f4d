//! skillbook render - Render the skills section

use clap::{Args, ValueEnum};

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_json, robot_ok};
use crate::error::Result;
use crate::render::{Renderer, render_html};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderFormat {
    /// HTML fragment
    #[default]
    Html,
    /// View model as JSON
    Json,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// URL or file to read (default: render.source from config)
    #[arg(long, value_name = "URL|PATH")]
    pub source: Option<String>,

    /// Only show skills whose name contains this text (case-insensitive)
    #[arg(long, short)]
    pub filter: Option<String>,

    /// What to print
    #[arg(long, value_enum, default_value_t = RenderFormat::Html)]
    pub format: RenderFormat,
}

pub fn run(ctx: &AppContext, args: &RenderArgs) -> Result<()> {
    let renderer = Renderer::from_config(&ctx.config.render, args.source.as_deref())?;
    let rendered = renderer.render(args.filter.as_deref());

    if args.format == RenderFormat::Json || ctx.output == OutputFormat::Json {
        return emit_json(&robot_ok(rendered));
    }
    print!("{}", render_html(&rendered.view));
    Ok(())
}
