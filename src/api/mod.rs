//! # Country Source
//!
//! Fetching the country list. The core only sees `Vec<Country>` or a
//! `FetchError`; HTTP details stay in this module.

pub mod http;
pub mod source;

pub use http::HttpCountrySource;
pub use source::{CountrySource, FetchError};
