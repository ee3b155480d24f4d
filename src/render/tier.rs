//! Four-tier proficiency labels used by the rendered skills section.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillTier {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
}

impl SkillTier {
    #[must_use]
    pub const fn for_level(level: i64) -> Self {
        match level {
            90.. => Self::Expert,
            75..=89 => Self::Advanced,
            60..=74 => Self::Intermediate,
            _ => Self::Beginner,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Advanced => "Advanced",
            Self::Intermediate => "Intermediate",
            Self::Beginner => "Beginner",
        }
    }

    /// CSS class carried by the level badge.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Expert => "expert",
            Self::Advanced => "advanced",
            Self::Intermediate => "intermediate",
            Self::Beginner => "beginner",
        }
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
