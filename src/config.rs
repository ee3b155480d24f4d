use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::LevelPolicy;
use crate::error::{Result, SkillsError};

/// File name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "skillbook.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub levels: LevelsConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Where each config layer comes from.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// `--config` or `SKILLBOOK_CONFIG`; must exist when set, and replaces
    /// the other two.
    pub explicit: Option<PathBuf>,
    pub global: Option<PathBuf>,
    pub project: Option<PathBuf>,
}

impl ConfigSources {
    pub fn discover(explicit_path: Option<&Path>) -> Self {
        Self {
            explicit: explicit_path
                .map(PathBuf::from)
                .or_else(|| env_string("SKILLBOOK_CONFIG").map(PathBuf::from)),
            global: dirs::config_dir().map(|dir| dir.join("skillbook").join("config.toml")),
            project: Some(PathBuf::from(PROJECT_CONFIG_FILE)),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        Self::load_from(&ConfigSources::discover(explicit_path), env_string)
    }

    /// Defaults, then file patches, then environment overrides.
    pub fn load_from(sources: &ConfigSources, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = &sources.explicit {
            let patch = Self::load_patch(path)?.ok_or_else(|| {
                SkillsError::Config(format!("config file {} not found", path.display()))
            })?;
            config.merge_patch(patch);
        } else {
            for path in [&sources.global, &sources.project].into_iter().flatten() {
                if let Some(patch) = Self::load_patch(path)? {
                    config.merge_patch(patch);
                }
            }
        }

        config.apply_env_overrides(env)?;

        Ok(config)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        let Some(raw) = crate::utils::fs::read_optional(path)
            .map_err(|err| SkillsError::Config(format!("read config {}: {err}", path.display())))?
        else {
            return Ok(None);
        };
        let patch = toml::from_str(&raw)
            .map_err(|err| SkillsError::Config(format!("parse config {}: {err}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded config layer");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.store {
            self.store.merge(patch);
        }
        if let Some(patch) = patch.levels {
            self.levels.merge(patch);
        }
        if let Some(patch) = patch.render {
            self.render.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = env("SKILLBOOK_STORE") {
            self.store.path = PathBuf::from(value);
        }
        if let Some(value) = env("SKILLBOOK_LEVEL_POLICY") {
            self.levels.policy = value
                .parse()
                .map_err(|err| SkillsError::Config(format!("invalid SKILLBOOK_LEVEL_POLICY: {err}")))?;
        }
        if let Some(value) = env("SKILLBOOK_RENDER_SOURCE") {
            self.render.source = value;
        }
        if let Some(value) = env("SKILLBOOK_RENDER_TIMEOUT_SECS") {
            self.render.timeout_secs = value.trim().parse::<u64>().map_err(|err| {
                SkillsError::Config(format!(
                    "invalid SKILLBOOK_RENDER_TIMEOUT_SECS value {value}: {err}"
                ))
            })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl StoreConfig {
    fn merge(&mut self, patch: StorePatch) {
        if let Some(value) = patch.path {
            self.path = value;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelsConfig {
    #[serde(default)]
    pub policy: LevelPolicy,
}

impl LevelsConfig {
    fn merge(&mut self, patch: LevelsPatch) {
        if let Some(value) = patch.policy {
            self.policy = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// URL or file path the renderer reads from.
    #[serde(default = "default_render_source")]
    pub source: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            source: default_render_source(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn merge(&mut self, patch: RenderPatch) {
        if let Some(value) = patch.source {
            self.source = value;
        }
        if let Some(value) = patch.timeout_secs {
            self.timeout_secs = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub store: Option<StorePatch>,
    pub levels: Option<LevelsPatch>,
    pub render: Option<RenderPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StorePatch {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LevelsPatch {
    pub policy: Option<LevelPolicy>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RenderPatch {
    pub source: Option<String>,
    pub timeout_secs: Option<u64>,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("skills.json")
}

fn default_render_source() -> String {
    "skills.json".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
