//! HTML fragment for the skills section.

use std::fmt::Write as _;

use super::view::{CategoryView, SkillView, SkillsView};

/// Render every category, hidden ones included, so a client-side filter can
/// toggle them without re-rendering.
#[must_use]
pub fn render_html(view: &SkillsView) -> String {
    let mut out = String::new();
    for category in &view.categories {
        render_category(&mut out, category);
    }
    out
}

fn render_category(out: &mut String, category: &CategoryView) {
    let _ = writeln!(
        out,
        "<div class=\"skill-category\" data-category=\"{}\"{}>",
        escape(&category.name.to_lowercase()),
        hidden(category.visible)
    );
    let _ = writeln!(out, "  <h3>{}</h3>", escape(&category.name));
    for skill in &category.skills {
        render_skill(out, skill);
    }
    out.push_str("</div>\n");
}

fn render_skill(out: &mut String, skill: &SkillView) {
    let _ = writeln!(
        out,
        "  <div class=\"skill-item\" data-skill=\"{}\"{}>",
        escape(&skill.name.to_lowercase()),
        hidden(skill.visible)
    );
    let _ = writeln!(
        out,
        "    <div class=\"skill-header\"><span class=\"skill-name\">{}</span><span class=\"skill-level {}\">{}</span></div>",
        escape(&skill.name),
        skill.tier.css_class(),
        skill.tier.label()
    );
    let _ = writeln!(
        out,
        "    <div class=\"skill-bar\"><div class=\"skill-progress\" style=\"width: {}%\"></div></div>",
        skill.width
    );
    let _ = writeln!(
        out,
        "    <p class=\"skill-description\">{}</p>",
        escape(&skill.description)
    );
    out.push_str("  </div>\n");
}

const fn hidden(visible: bool) -> &'static str {
    if visible { "" } else { " hidden" }
}

/// Escape text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
