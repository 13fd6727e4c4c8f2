//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::country::{Country, Currency, Language};
use crate::core::state::App;

/// A minimal country with just the fields filtering cares about.
pub fn country(name: &str, code: &str, region: &str) -> Country {
    Country {
        name: name.to_string(),
        alpha3_code: code.to_string(),
        region: region.to_string(),
        ..Default::default()
    }
}

fn with_borders(mut c: Country, borders: &[&str]) -> Country {
    c.borders = Some(borders.iter().map(|b| b.to_string()).collect());
    c
}

/// A small fixture set. Brazil borders one unknown code (`ARG` is not loaded).
pub fn sample_countries() -> Vec<Country> {
    let mut belgium = with_borders(country("Belgium", "BEL", "Europe"), &["FRA", "DEU"]);
    belgium.capital = Some("Brussels".to_string());
    belgium.population = 11_319_511;
    belgium.subregion = Some("Western Europe".to_string());
    belgium.currencies = vec![Currency {
        code: Some("EUR".to_string()),
        name: Some("Euro".to_string()),
        symbol: Some("€".to_string()),
    }];
    belgium.languages = vec![Language {
        name: "Dutch".to_string(),
        native_name: Some("Nederlands".to_string()),
    }];

    vec![
        belgium,
        with_borders(country("France", "FRA", "Europe"), &["BEL", "DEU"]),
        country("Japan", "JPN", "Asia"),
        with_borders(country("Germany", "DEU", "Europe"), &["BEL", "FRA"]),
        with_borders(country("Brazil", "BRA", "Americas"), &["ARG"]),
    ]
}

/// An App with the sample countries already loaded.
pub fn loaded_app() -> App {
    let mut app = App::new("http://localhost:9000/countries".to_string(), false);
    app.store.replace(sample_countries());
    app
}
