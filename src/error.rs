use std::path::PathBuf;

use crate::questions::QuestionKind;

/// The country dataset could not be turned into a usable catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("could not read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("catalog contains no countries")]
    Empty,
    #[error("country code {0} appears more than once")]
    DuplicateCode(String),
    #[error("country {0} has no name")]
    MissingName(String),
    #[error("country {0} belongs to no continent")]
    NoContinents(String),
    #[error("country {0} borders {1}, which is not in the catalog")]
    UnknownBorder(String, String),
}

/// No country in the catalog can anchor a question of this kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("no country is eligible for a {kind:?} question")]
    NoEligibleCountry { kind: QuestionKind },
    #[error("{code} was picked for a {kind:?} question but has no asset for it")]
    MissingAsset { kind: QuestionKind, code: String },
}

/// A flag image or map boundary could not be made available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("{0} has no asset for this question")]
    Missing(String),
    #[error("could not read {path}: {message}")]
    Io { path: String, message: String },
    #[error("fetch of {0} failed")]
    Fetch(String),
    #[error("could not decode asset: {0}")]
    Decode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid value for {var}: {value}")]
    Env { var: &'static str, value: String },
    #[error("the catalog cannot produce {0:?} questions")]
    UnsupportedKind(QuestionKind),
    #[error("no question kinds are enabled")]
    NoKinds,
}

/// Everything that can stop the game from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Select(#[from] SelectError),
}
