//! Skills renderer.
//!
//! Reads the skills document from a URL or file, falls back to a built-in
//! document when that fails, and turns it into a filterable view and HTML.

pub mod fallback;
pub mod html;
pub mod source;
pub mod tier;
pub mod view;

use serde::Serialize;
use tracing::{info, warn};

pub use fallback::fallback_document;
pub use html::render_html;
pub use source::{DocumentSource, FileSource, HttpSource, SkillSource};
pub use tier::SkillTier;
pub use view::{CategoryView, SkillView, SkillsView};

use crate::config::RenderConfig;
use crate::core::SkillsDocument;
use crate::error::Result;

/// Where the rendered document came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentOrigin {
    Fetched { source: String },
    Fallback { reason: String },
}

impl DocumentOrigin {
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Fetch from `source`, or use [`fallback_document`] on any failure.
pub fn load_or_fallback(source: &dyn DocumentSource) -> (SkillsDocument, DocumentOrigin) {
    match source.fetch() {
        Ok(doc) => {
            info!(source = %source.describe(), skills = doc.skill_count(), "rendering fetched document");
            (
                doc,
                DocumentOrigin::Fetched {
                    source: source.describe(),
                },
            )
        }
        Err(err) => {
            warn!(source = %source.describe(), error = %err, "using built-in skills document");
            (
                fallback_document(),
                DocumentOrigin::Fallback {
                    reason: err.to_string(),
                },
            )
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Rendered {
    pub origin: DocumentOrigin,
    pub view: SkillsView,
}

pub struct Renderer {
    source: Box<dyn DocumentSource>,
}

impl Renderer {
    #[must_use]
    pub fn new(source: Box<dyn DocumentSource>) -> Self {
        Self { source }
    }

    /// Source from `source_override` if given, otherwise from config.
    pub fn from_config(config: &RenderConfig, source_override: Option<&str>) -> Result<Self> {
        let raw = source_override.unwrap_or(&config.source);
        let source = SkillSource::parse(raw).into_source(config.timeout())?;
        Ok(Self::new(source))
    }

    /// Load, build the view, and apply `filter` if there is one.
    pub fn render(&self, filter: Option<&str>) -> Rendered {
        let (doc, origin) = load_or_fallback(self.source.as_ref());
        let mut view = SkillsView::build(&doc);
        if let Some(query) = filter {
            view.apply_filter(query);
        }
        Rendered { origin, view }
    }
}
