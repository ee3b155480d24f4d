//! Badges shown next to each skill by `skillbook list`.
//!
//! Two thresholds, three badges. The renderer's four-tier table is
//! `render::tier::SkillTier`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    /// level >= 90
    Top,
    /// level >= 75
    Mid,
    Base,
}

impl Badge {
    #[must_use]
    pub const fn for_level(level: i64) -> Self {
        if level >= 90 {
            Self::Top
        } else if level >= 75 {
            Self::Mid
        } else {
            Self::Base
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Top => "🔥",
            Self::Mid => "⭐",
            Self::Base => "📈",
        }
    }

    #[must_use]
    pub const fn ascii(self) -> &'static str {
        match self {
            Self::Top => "[+++]",
            Self::Mid => "[++ ]",
            Self::Base => "[+  ]",
        }
    }
}
