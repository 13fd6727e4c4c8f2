//! # Region Index
//!
//! The distinct regions present in the loaded country list, in the order
//! they first appear. Rebuilt from scratch whenever the list is replaced.

use std::collections::HashSet;

use crate::core::country::Country;

/// Returns each distinct `region` once, preserving first-seen order.
pub fn derive_regions(countries: &[Country]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(countries.len());
    let mut regions = Vec::new();

    for country in countries {
        if seen.insert(country.region.as_str()) {
            regions.push(country.region.clone());
        }
    }

    regions
}
