use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::error::CatalogError;
use crate::model::Country;

/// Lookup sets derived from the country list, keyed by country code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedSets {
    pub with_capitals: BTreeSet<String>,
    pub with_flag: BTreeSet<String>,
    pub with_geo: BTreeSet<String>,
    pub with_borders: BTreeSet<String>,
    pub with_divisions: BTreeSet<String>,
    pub with_heads_of_government: BTreeSet<String>,
    /// Every continent named by at least one country
    pub continents_universe: BTreeSet<String>,
}

impl DerivedSets {
    pub fn compute(countries: &[Arc<Country>]) -> Self {
        let mut sets = DerivedSets::default();
        for country in countries {
            let code = || country.code.clone();
            if country.has_capital() {
                sets.with_capitals.insert(code());
            }
            if country.has_flag() {
                sets.with_flag.insert(code());
            }
            if country.has_geo() {
                sets.with_geo.insert(code());
            }
            if !country.border_countries.is_empty() {
                sets.with_borders.insert(code());
            }
            if !country.divisions.is_empty() {
                sets.with_divisions.insert(code());
            }
            if !country.heads_of_government.is_empty() {
                sets.with_heads_of_government.insert(code());
            }
            sets.continents_universe
                .extend(country.continents.iter().cloned());
        }
        sets
    }
}

/// Read-only country dataset. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<Arc<Country>>,
    by_code: HashMap<String, usize>,
    derived: DerivedSets,
}

impl Catalog {
    /// Validates the records and computes the derived sets once.
    pub fn new(countries: Vec<Country>) -> Result<Self, CatalogError> {
        if countries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_code = HashMap::with_capacity(countries.len());
        for (idx, country) in countries.iter().enumerate() {
            if country.name.trim().is_empty() {
                return Err(CatalogError::MissingName(country.code.clone()));
            }
            if country.continents.is_empty() {
                return Err(CatalogError::NoContinents(country.code.clone()));
            }
            if by_code.insert(country.code.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateCode(country.code.clone()));
            }
        }

        // border prompts show the neighbour's name, so it has to resolve
        for country in &countries {
            if let Some(unknown) = country
                .border_countries
                .iter()
                .find(|code| !by_code.contains_key(code.as_str()))
            {
                return Err(CatalogError::UnknownBorder(
                    country.code.clone(),
                    unknown.clone(),
                ));
            }
        }

        let countries: Vec<Arc<Country>> = countries.into_iter().map(Arc::new).collect();
        let derived = DerivedSets::compute(&countries);
        log::debug!(
            "catalog: {} countries, {} with capitals, {} with flags, {} with maps",
            countries.len(),
            derived.with_capitals.len(),
            derived.with_flag.len(),
            derived.with_geo.len()
        );

        Ok(Self {
            countries,
            by_code,
            derived,
        })
    }

    pub fn countries(&self) -> &[Arc<Country>] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn find(&self, code: &str) -> Option<&Arc<Country>> {
        self.by_code.get(code).map(|&idx| &self.countries[idx])
    }

    /// Display name for a code, falling back to the code itself.
    pub fn name_of<'a>(&'a self, code: &'a str) -> &'a str {
        self.find(code).map(|c| c.name.as_str()).unwrap_or(code)
    }

    pub fn derived(&self) -> &DerivedSets {
        &self.derived
    }

    pub fn with_capitals(&self) -> &BTreeSet<String> {
        &self.derived.with_capitals
    }

    pub fn with_flag(&self) -> &BTreeSet<String> {
        &self.derived.with_flag
    }

    pub fn with_geo(&self) -> &BTreeSet<String> {
        &self.derived.with_geo
    }

    pub fn continents_universe(&self) -> &BTreeSet<String> {
        &self.derived.continents_universe
    }

    /// Countries belonging to `continent`, in catalog order.
    pub fn in_continent<'a>(&'a self, continent: &'a str) -> impl Iterator<Item = &'a Arc<Country>> {
        self.countries.iter().filter(move |c| c.is_in(continent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::country;
    use crate::model::AssetRef;

    fn sample() -> Vec<Country> {
        let mut fr = country("FR", "France");
        fr.capitals = vec!["Paris".into()];
        fr.flag_image = Some(AssetRef {
            local_uri: "/flags/fr.png".into(),
        });
        let mut ru = country("RU", "Russia");
        ru.capitals = vec!["Moscow".into()];
        ru.continents = vec!["Europe".into(), "Asia".into()];
        let mut aq = country("AQ", "Antarctica");
        aq.continents = vec!["Antarctica".into()];
        vec![fr, ru, aq]
    }

    #[test]
    fn derived_sets_follow_the_records() {
        let catalog = Catalog::new(sample()).expect("valid catalog");
        assert_eq!(
            catalog.with_capitals().iter().collect::<Vec<_>>(),
            vec!["FR", "RU"]
        );
        assert_eq!(catalog.with_flag().len(), 1);
        assert!(catalog.with_geo().is_empty());
        assert_eq!(
            catalog.continents_universe().iter().collect::<Vec<_>>(),
            vec!["Antarctica", "Asia", "Europe"]
        );
    }

    #[test]
    fn derived_sets_are_idempotent() {
        let catalog = Catalog::new(sample()).expect("valid catalog");
        let again = DerivedSets::compute(catalog.countries());
        assert_eq!(&again, catalog.derived());
        assert_eq!(again, DerivedSets::compute(catalog.countries()));
    }

    #[test]
    fn rejects_duplicate_codes() {
        let mut countries = sample();
        countries.push(country("FR", "France again"));
        let err = Catalog::new(countries).expect_err("duplicate code");
        assert!(matches!(err, CatalogError::DuplicateCode(code) if code == "FR"));
    }

    #[test]
    fn rejects_empty_and_malformed_records() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));

        let mut nameless = country("XX", " ");
        nameless.name = String::new();
        assert!(matches!(
            Catalog::new(vec![nameless]),
            Err(CatalogError::MissingName(_))
        ));

        let mut floating = country("XX", "Nowhere");
        floating.continents.clear();
        assert!(matches!(
            Catalog::new(vec![floating]),
            Err(CatalogError::NoContinents(_))
        ));
    }

    #[test]
    fn rejects_borders_outside_the_catalog() {
        let mut countries = sample();
        countries[0].border_countries = vec!["RU".into(), "MD".into()];
        let err = Catalog::new(countries).expect_err("unknown neighbour");
        assert!(matches!(
            err,
            CatalogError::UnknownBorder(code, neighbour) if code == "FR" && neighbour == "MD"
        ));
    }

    #[test]
    fn bundled_borders_resolve_to_catalog_names() {
        let catalog = crate::data::read_catalog_embedded().expect("bundled catalog is valid");
        for country in catalog.countries() {
            for neighbour in &country.border_countries {
                assert!(catalog.find(neighbour).is_some(), "{} borders {neighbour}", country.code);
            }
        }
    }

    #[test]
    fn lookups_by_code_and_continent() {
        let catalog = Catalog::new(sample()).expect("valid catalog");
        assert_eq!(catalog.find("RU").map(|c| c.name.as_str()), Some("Russia"));
        assert_eq!(catalog.name_of("ZZ"), "ZZ");
        let asian: Vec<_> = catalog.in_continent("Asia").map(|c| c.code.as_str()).collect();
        assert_eq!(asian, vec!["RU"]);
    }
}
