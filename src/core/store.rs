//! # Country Store
//!
//! Holds the fetched country list, the regions derived from it, the load
//! status, and the selection slot written when a card is opened.
//!
//! The list is only ever replaced wholesale. Regions are recomputed on every
//! replacement.

use log::debug;

use crate::core::country::Country;
use crate::core::regions::derive_regions;

/// Where the one-shot fetch stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct CountryStore {
    countries: Vec<Country>,
    regions: Vec<String>,
    /// Alpha3 code of the last country opened from the list.
    pub selected: Option<String>,
    pub load: LoadState,
}

impl CountryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Replaces the country list and rebuilds the region index.
    pub fn replace(&mut self, countries: Vec<Country>) {
        self.regions = derive_regions(&countries);
        self.countries = countries;
        self.load = LoadState::Loaded;
        debug!(
            "Store replaced: {} countries, {} regions",
            self.countries.len(),
            self.regions.len()
        );
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| !c.alpha3_code.is_empty() && c.alpha3_code.eq_ignore_ascii_case(code))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.name == name)
    }

    /// Resolves a route identifier: alpha3 code first, then exact name.
    pub fn resolve(&self, identifier: &str) -> Option<&Country> {
        self.find_by_code(identifier)
            .or_else(|| self.find_by_name(identifier))
    }

    /// Resolves a border code. Unknown codes yield `None`.
    pub fn resolve_border(&self, code: &str) -> Option<&Country> {
        let found = self.find_by_code(code);
        if found.is_none() {
            debug!("Border code {} does not match any loaded country", code);
        }
        found
    }

    /// The neighbours of `country` that exist in the store, in border order.
    pub fn border_countries(&self, country: &Country) -> Vec<&Country> {
        country
            .borders
            .iter()
            .flatten()
            .filter_map(|code| self.resolve_border(code))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{country, sample_countries};

    fn loaded() -> CountryStore {
        let mut store = CountryStore::new();
        store.replace(sample_countries());
        store
    }

    #[test]
    fn test_new_store_is_loading_and_empty() {
        let store = CountryStore::new();
        assert_eq!(store.load, LoadState::Loading);
        assert!(store.countries().is_empty());
        assert!(store.regions().is_empty());
        assert!(store.selected.is_none());
    }

    #[test]
    fn test_replace_rebuilds_regions() {
        let mut store = loaded();
        assert_eq!(store.regions(), ["Europe", "Asia", "Americas"]);

        store.replace(vec![country("Fiji", "FJI", "Oceania")]);
        assert_eq!(store.countries().len(), 1);
        assert_eq!(store.regions(), ["Oceania"]);
        assert_eq!(store.load, LoadState::Loaded);
    }

    #[test]
    fn test_resolve_prefers_code_then_name() {
        let store = loaded();
        assert_eq!(store.resolve("FRA").map(|c| c.name.as_str()), Some("France"));
        assert_eq!(store.resolve("fra").map(|c| c.name.as_str()), Some("France"));
        assert_eq!(store.resolve("Japan").map(|c| c.alpha3_code.as_str()), Some("JPN"));
        assert!(store.resolve("Atlantis").is_none());
    }

    #[test]
    fn test_empty_code_never_matches() {
        let mut store = CountryStore::new();
        store.replace(vec![country("Unknown", "", "Nowhere")]);
        assert!(store.find_by_code("").is_none());
    }

    #[test]
    fn test_border_countries_skip_unknown_codes() {
        let store = loaded();
        let brazil = store.find_by_code("BRA").unwrap();
        assert!(store.border_countries(brazil).is_empty());

        let belgium = store.find_by_code("BEL").unwrap();
        let names: Vec<&str> = store
            .border_countries(belgium)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["France", "Germany"]);
    }

    #[test]
    fn test_no_borders_key() {
        let store = loaded();
        let japan = store.find_by_code("JPN").unwrap();
        assert!(store.border_countries(japan).is_empty());
    }
}
