use std::collections::HashMap;

use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::data::{read_catalog_embedded, read_catalog_file};
use crate::error::StartupError;
use crate::questions::{NamingProgress, Question};
use crate::round::{RoundState, Transition};
use crate::store::HighScoreStore;

pub mod actions;
pub mod assets;
pub mod progress;
pub mod queries;
pub mod updates;
pub mod view_models;

use assets::{AssetJob, MapShape, MapView, PendingAssets};

/// Where the current question's flag images or map stand.
pub enum AssetState {
    /// The question shows no assets
    Unneeded,
    /// Waiting for a frame with a context to start the load
    Queued(AssetJob),
    Loading(PendingAssets),
    Flags(HashMap<String, egui::TextureHandle>),
    /// The outline and where the player has moved the view
    Map(MapShape, MapView),
}

impl AssetState {
    pub fn is_ready(&self) -> bool {
        matches!(
            self,
            AssetState::Unneeded | AssetState::Flags(_) | AssetState::Map(..)
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Playing,
    /// A contract violation mid-game; the message is shown instead of a question
    Failed(String),
}

/// Persisted through eframe storage between sessions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiPrefs {
    pub dark_mode: bool,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

pub struct GameApp {
    pub catalog: Catalog,
    pub config: GameConfig,
    rng: StdRng,
    pub round: RoundState,
    pub question: Question,
    pub naming: NamingProgress,
    pub naming_input: String,
    pub assets: AssetState,
    pub message: String,
    pub last_transition: Option<Transition>,
    pub prefs: UiPrefs,
    pub screen: Screen,
}

/// Loads the catalog the config points at and checks every enabled kind against it.
pub fn prepare(config: &GameConfig) -> Result<Catalog, StartupError> {
    let catalog = match &config.catalog {
        Some(path) => read_catalog_file(path)?,
        None => read_catalog_embedded()?,
    };
    config.validate(&catalog)?;
    log::info!(
        "catalog ready: {} countries, {} continents, {} kinds enabled",
        catalog.len(),
        catalog.continents_universe().len(),
        config.kinds.len()
    );
    Ok(catalog)
}

impl GameApp {
    /// Builds the game without a window; the first question is generated here.
    pub fn from_parts(
        catalog: Catalog,
        config: GameConfig,
        store: Box<dyn HighScoreStore>,
    ) -> Result<Self, StartupError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let kind = progress::pick_kind(&config.kinds, &mut rng);
        let question = Question::generate(kind, &catalog, &mut rng)?;

        let mut app = Self {
            catalog,
            config,
            rng,
            round: RoundState::new(store),
            question,
            naming: NamingProgress::default(),
            naming_input: String::new(),
            assets: AssetState::Unneeded,
            message: String::new(),
            last_transition: None,
            prefs: UiPrefs::default(),
            screen: Screen::Playing,
        };
        if !app.queue_assets() {
            app.next_question();
        }
        Ok(app)
    }

    pub fn new(
        cc: &eframe::CreationContext<'_>,
        catalog: Catalog,
        config: GameConfig,
        store: Box<dyn HighScoreStore>,
    ) -> Result<Self, StartupError> {
        let mut app = Self::from_parts(catalog, config, store)?;
        if let Some(storage) = cc.storage {
            app.prefs = eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        cc.egui_ctx.set_visuals(app.visuals());
        Ok(app)
    }

    pub fn visuals(&self) -> egui::Visuals {
        if self.prefs.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }

    pub fn set_dark_mode(&mut self, ctx: &egui::Context, dark: bool) {
        self.prefs.dark_mode = dark;
        ctx.set_visuals(self.visuals());
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::QuestionKind;
    use std::path::PathBuf;

    #[test]
    fn seeded_apps_start_on_the_same_question() {
        let kinds = [QuestionKind::Population];
        let a = test_support::app(&kinds, 11);
        let b = test_support::app(&kinds, 11);
        let (Question::Choice(qa), Question::Choice(qb)) = (&a.question, &b.question) else {
            panic!("population questions are multiple choice");
        };
        assert_eq!(qa.labels, qb.labels);
        assert_eq!(qa.correct_index, qb.correct_index);
        assert_eq!(a.screen, Screen::Playing);
    }

    #[test]
    fn asset_questions_start_queued() {
        let app = test_support::app(&[QuestionKind::MapLocation], 2);
        assert!(matches!(app.assets, AssetState::Queued(AssetJob::Map(_))));
        assert!(!app.assets.is_ready());

        let app = test_support::app(&[QuestionKind::Division], 2);
        assert!(app.assets.is_ready());
    }

    #[test]
    fn prepare_rejects_kinds_the_catalog_cannot_serve() {
        let dir = std::env::temp_dir().join(format!("country_game_prepare_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("tiny.yaml");
        let yaml = "countries:\n  - code: FR\n    name: France\n    population: 68000000\n    continents: [Europe]\n";
        std::fs::write(&path, yaml).expect("write catalog");

        let mut config = GameConfig {
            catalog: Some(PathBuf::from(&path)),
            ..GameConfig::default()
        };
        assert!(matches!(prepare(&config), Err(StartupError::Config(_))));

        config.kinds = vec![QuestionKind::Population];
        assert_eq!(prepare(&config).expect("population works").len(), 1);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn embedded_catalog_supports_every_kind() {
        assert!(prepare(&GameConfig::default()).is_ok());
    }

    #[test]
    fn prefs_default_to_dark() {
        let prefs: UiPrefs = serde_yaml::from_str("{}").expect("parses");
        assert!(prefs.dark_mode);
    }
}
