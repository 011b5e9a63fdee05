// src/data.rs

use std::path::Path;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::model::Country;

#[derive(Deserialize)]
struct CatalogFile {
    countries: Vec<Country>,
}

/// Parses a YAML document with a top-level `countries` list.
pub fn parse_catalog(yaml: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = serde_yaml::from_str(yaml)?;
    Catalog::new(file.countries)
}

/// Loads the dataset bundled with the binary
pub fn read_catalog_embedded() -> Result<Catalog, CatalogError> {
    parse_catalog(include_str!("data/countries.yaml"))
}

pub fn read_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("loading catalog from {}", path.display());
    parse_catalog(&yaml)
}
