use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::ConfigError;
use crate::questions::QuestionKind;

/// Looked up in the working directory at startup.
pub const CONFIG_FILE: &str = "country_game.yaml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// External catalog; the bundled one is used when absent
    pub catalog: Option<PathBuf>,
    /// Directory (native) or URL prefix (web) that asset URIs are resolved against
    pub asset_root: String,
    pub seed: Option<u64>,
    pub kinds: Vec<QuestionKind>,
    pub high_score_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            asset_root: "assets".to_string(),
            seed: None,
            kinds: QuestionKind::ALL.to_vec(),
            high_score_path: PathBuf::from("country_game_scores.yaml"),
        }
    }
}

impl GameConfig {
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads `path` if it exists, defaults otherwise.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("using config {}", path.display());
        Self::parse(&yaml)
    }

    /// Config file plus `COUNTRY_GAME_*` environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(Path::new(CONFIG_FILE))?;
        config.apply_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(path) = lookup("COUNTRY_GAME_CATALOG") {
            self.catalog = Some(PathBuf::from(path));
        }
        if let Some(root) = lookup("COUNTRY_GAME_ASSETS") {
            self.asset_root = root;
        }
        if let Some(seed) = lookup("COUNTRY_GAME_SEED") {
            let parsed = seed.trim().parse().map_err(|_| ConfigError::Env {
                var: "COUNTRY_GAME_SEED",
                value: seed.clone(),
            })?;
            self.seed = Some(parsed);
        }
        Ok(())
    }

    /// Every enabled kind must be answerable from the catalog.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), ConfigError> {
        if self.kinds.is_empty() {
            return Err(ConfigError::NoKinds);
        }
        match self.kinds.iter().find(|kind| !kind.supported_by(catalog)) {
            Some(&kind) => Err(ConfigError::UnsupportedKind(kind)),
            None => Ok(()),
        }
    }
}
