//! Per-invocation context built once in `main`.

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::storage::SkillsStore;

pub struct AppContext {
    pub config: Config,
    pub store: SkillsStore,
    pub output: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        Ok(Self::new(config, cli))
    }

    /// Build from an already loaded config; `--store` still wins.
    #[must_use]
    pub fn new(config: Config, cli: &Cli) -> Self {
        let store_path = cli
            .store
            .clone()
            .unwrap_or_else(|| config.store.path.clone());
        debug!(
            store = %store_path.display(),
            level_policy = %config.levels.policy,
            "resolved context"
        );
        Self {
            store: SkillsStore::new(store_path),
            output: cli.output_format(),
            config,
        }
    }

    #[must_use]
    pub const fn robot_mode(&self) -> bool {
        self.output.is_machine_readable()
    }
}
