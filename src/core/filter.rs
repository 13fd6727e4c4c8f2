//! # Country Filtering
//!
//! Narrows the loaded countries by a name prefix and a region. Both
//! criteria apply together: a region with an empty query shows the whole
//! region, a query with no region searches everywhere.
//!
//! Matching is case-insensitive on the name and plain substring containment
//! on the region. There is exactly one matcher; the card grid and any
//! counts shown in the UI go through [`visible_countries`].

use crate::core::country::Country;

/// Search text and region selection owned by the list view.
///
/// Created fresh each time the list view is entered, so it does not survive
/// a round trip through the detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    /// Empty means "all regions".
    pub region: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.region.is_empty()
    }

    pub fn apply<'a>(&self, countries: &'a [Country]) -> Vec<&'a Country> {
        visible_countries(countries, &self.query, &self.region)
    }
}

/// Returns the subsequence of `all` matching `query` and `region`, in order.
pub fn visible_countries<'a>(all: &'a [Country], query: &str, region: &str) -> Vec<&'a Country> {
    if query.is_empty() && region.is_empty() {
        return all.iter().collect();
    }

    let needle = query.to_lowercase();
    all.iter()
        .filter(|c| c.name.to_lowercase().starts_with(&needle) && c.region.contains(region))
        .collect()
}
