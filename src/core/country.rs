//! # Country Records
//!
//! The shape of one entry in the countries payload. The payload is owned by
//! the remote endpoint, so almost every field is defaulted: a record only
//! needs a `name` to deserialize. Explicit `null`s read as the field's
//! default, so one sparse record never sinks the whole list.

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown in the detail view for empty or missing fields.
pub const NOT_PROVIDED: &str = "Not provided";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub native_name: Option<String>,
    /// Three-letter code. The identity key for selection, routing and borders.
    #[serde(default, deserialize_with = "null_as_default")]
    pub alpha3_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub population: u64,
    #[serde(default)]
    pub capital: Option<String>,
    /// Flag image URL.
    #[serde(default)]
    pub flag: Option<String>,
    /// Alpha3 codes of neighbouring countries. `None` for islands and
    /// records that omit the key entirely.
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_level_domain: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currencies: Vec<Currency>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<Language>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Currency {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub native_name: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Country {
    /// The path segment that opens this country: its alpha3 code, or its
    /// name for records without one.
    pub fn route_id(&self) -> &str {
        if self.alpha3_code.is_empty() {
            &self.name
        } else {
            &self.alpha3_code
        }
    }

    pub fn native_name_or_default(&self) -> &str {
        or_not_provided(self.native_name.as_deref())
    }

    pub fn subregion_or_default(&self) -> &str {
        or_not_provided(self.subregion.as_deref())
    }

    pub fn capital_or_default(&self) -> &str {
        or_not_provided(self.capital.as_deref())
    }

    pub fn region_or_default(&self) -> &str {
        or_not_provided(Some(self.region.as_str()))
    }

    /// Population with thousands separators, or the placeholder when zero.
    pub fn population_display(&self) -> String {
        if self.population == 0 {
            NOT_PROVIDED.to_string()
        } else {
            format_thousands(self.population)
        }
    }

    pub fn top_level_domain_display(&self) -> String {
        join_or_default(self.top_level_domain.iter().map(String::as_str))
    }

    pub fn currencies_display(&self) -> String {
        join_or_default(self.currencies.iter().filter_map(|c| c.name.as_deref()))
    }

    pub fn languages_display(&self) -> String {
        join_or_default(self.languages.iter().map(|l| l.name.as_str()))
    }
}

fn or_not_provided(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_PROVIDED,
    }
}

fn join_or_default<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let parts: Vec<&str> = values.filter(|v| !v.trim().is_empty()).collect();
    if parts.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        parts.join(", ")
    }
}

/// Formats `1234567` as `"1,234,567"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "name": "Belgium",
            "nativeName": "België",
            "alpha3Code": "BEL",
            "region": "Europe",
            "subregion": "Western Europe",
            "population": 11319511,
            "capital": "Brussels",
            "flag": "https://flagcdn.com/be.svg",
            "borders": ["FRA", "DEU", "LUX", "NLD"],
            "topLevelDomain": [".be"],
            "currencies": [{"code": "EUR", "name": "Euro", "symbol": "€"}],
            "languages": [{"iso639_1": "nl", "name": "Dutch", "nativeName": "Nederlands"},
                          {"name": "French"}]
        }"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.alpha3_code, "BEL");
        assert_eq!(country.borders.as_ref().map(Vec::len), Some(4));
        assert_eq!(country.currencies_display(), "Euro");
        assert_eq!(country.languages_display(), "Dutch, French");
        assert_eq!(country.population_display(), "11,319,511");
    }

    #[test]
    fn test_nulls_read_as_defaults() {
        let json = r#"[
            {"name": "Belgium", "alpha3Code": "BEL", "region": "Europe"},
            {"name": "Antarctica", "alpha3Code": null, "region": null, "population": null,
             "topLevelDomain": null, "currencies": null, "languages": [{"name": null}]}
        ]"#;
        let countries: Vec<Country> = serde_json::from_str(json).unwrap();
        assert_eq!(countries.len(), 2);
        let antarctica = &countries[1];
        assert!(antarctica.alpha3_code.is_empty());
        assert_eq!(antarctica.region_or_default(), NOT_PROVIDED);
        assert_eq!(antarctica.population_display(), NOT_PROVIDED);
        assert!(antarctica.top_level_domain.is_empty());
        assert!(antarctica.currencies.is_empty());
        assert_eq!(antarctica.languages[0].name, "");
    }

    #[test]
    fn test_route_id_falls_back_to_name() {
        let mut country = Country {
            name: "Kosovo".to_string(),
            ..Default::default()
        };
        assert_eq!(country.route_id(), "Kosovo");
        country.alpha3_code = "UNK".to_string();
        assert_eq!(country.route_id(), "UNK");
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let country: Country = serde_json::from_str(r#"{"name": "Nowhere"}"#).unwrap();
        assert_eq!(country.name, "Nowhere");
        assert!(country.borders.is_none());
        assert_eq!(country.capital_or_default(), NOT_PROVIDED);
        assert_eq!(country.population_display(), NOT_PROVIDED);
        assert_eq!(country.top_level_domain_display(), NOT_PROVIDED);
        assert_eq!(country.region_or_default(), NOT_PROVIDED);
    }

    #[test]
    fn test_blank_strings_fall_back() {
        let country = Country {
            name: "Blank".to_string(),
            capital: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(country.capital_or_default(), NOT_PROVIDED);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
