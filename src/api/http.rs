//! Plain `GET` against the configured endpoint. No auth, no query
//! parameters, no timeout and no automatic retry: a failure is reported
//! once and the user decides whether to retry.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::api::{CountrySource, FetchError};
use crate::core::country::Country;

pub struct HttpCountrySource {
    url: String,
    client: reqwest::Client,
}

impl HttpCountrySource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CountrySource for HttpCountrySource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError> {
        info!("Fetching countries from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Countries response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Countries endpoint error: {} - {}", status, err_body);
            return Err(FetchError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let countries: Vec<Country> =
            serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        info!("Fetched {} countries ({} bytes)", countries.len(), body.len());
        Ok(countries)
    }
}
