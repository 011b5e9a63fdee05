use serde::{Deserialize, Serialize};

/// Max number of choices shown for a multiple-choice question.
pub const OPTION_COUNT: usize = 6;

/// Lives a run starts with and can never exceed.
pub const MAX_LIVES: u32 = 3;

/// Reference to a presentational asset (flag image, map boundary).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    pub local_uri: String,
}

/// One catalog record. Immutable once the catalog is built.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Country {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub capitals: Vec<String>,
    #[serde(default)]
    pub divisions: Vec<String>,
    /// Codes of neighbouring countries
    #[serde(default)]
    pub border_countries: Vec<String>,
    #[serde(default)]
    pub heads_of_government: Vec<String>,
    #[serde(default)]
    pub population: u64,
    pub continents: Vec<String>,
    #[serde(default)]
    pub flag_image: Option<AssetRef>,
    #[serde(default)]
    pub geo: Option<AssetRef>,
}

impl Country {
    pub fn has_capital(&self) -> bool {
        !self.capitals.is_empty()
    }

    pub fn has_flag(&self) -> bool {
        self.flag_image.is_some()
    }

    pub fn has_geo(&self) -> bool {
        self.geo.is_some()
    }

    pub fn borders(&self, code: &str) -> bool {
        self.border_countries.iter().any(|c| c == code)
    }

    pub fn has_division(&self, division: &str) -> bool {
        self.divisions.iter().any(|d| d == division)
    }

    pub fn is_in(&self, continent: &str) -> bool {
        self.continents.iter().any(|c| c == continent)
    }

    /// Identity comparison; codes are unique within a catalog.
    pub fn same_as(&self, other: &Country) -> bool {
        self.code == other.code
    }
}
