use atlas::api::{CountrySource, FetchError, HttpCountrySource};
use atlas::core::action::{Action, Effect, update};
use atlas::core::route::Route;
use atlas::core::state::App;
use atlas::core::store::LoadState;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

const COUNTRIES_JSON: &str = r#"[
  {
    "name": "Belgium",
    "alpha3Code": "BEL",
    "region": "Europe",
    "subregion": "Western Europe",
    "population": 11319511,
    "capital": "Brussels",
    "flag": "https://flagcdn.com/be.svg",
    "borders": ["FRA", "DEU", "LUX", "NLD"],
    "topLevelDomain": [".be"],
    "currencies": [{"code": "EUR", "name": "Euro", "symbol": "€"}],
    "languages": [{"iso639_1": "nl", "name": "Dutch", "nativeName": "Nederlands"}]
  },
  {
    "name": "France",
    "alpha3Code": "FRA",
    "region": "Europe",
    "population": 67391582,
    "capital": "Paris",
    "borders": ["BEL", "DEU"]
  },
  {
    "name": "Japan",
    "alpha3Code": "JPN",
    "region": "Asia",
    "population": 125836021
  },
  {
    "name": "Germany",
    "alpha3Code": "DEU",
    "region": "Europe",
    "population": 83240525,
    "borders": ["BEL", "FRA"]
  }
]"#;

/// Starts a mock server answering GET /countries with `response`.
async fn serve(response: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countries"))
        .respond_with(response)
        .expect(1)
        .mount(&mock_server)
        .await;
    mock_server
}

fn source_for(server: &MockServer) -> HttpCountrySource {
    HttpCountrySource::new(format!("{}/countries", server.uri()))
}

// ============================================================================
// HttpCountrySource Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_parses_country_array() {
    let server = serve(ResponseTemplate::new(200).set_body_string(COUNTRIES_JSON)).await;
    let source = source_for(&server);

    let countries = source.fetch_countries().await.unwrap();

    assert_eq!(countries.len(), 4);
    assert_eq!(countries[0].name, "Belgium");
    assert_eq!(countries[0].capital.as_deref(), Some("Brussels"));
    assert!(countries[2].borders.is_none());
}

#[tokio::test]
async fn test_fetch_empty_array() {
    let server = serve(ResponseTemplate::new(200).set_body_string("[]")).await;
    let countries = source_for(&server).fetch_countries().await.unwrap();
    assert!(countries.is_empty());
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let server = serve(ResponseTemplate::new(500).set_body_string("boom")).await;

    let result = source_for(&server).fetch_countries().await;

    match result {
        Err(FetchError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = serve(ResponseTemplate::new(200).set_body_string("{\"not\": \"an array\"}")).await;

    let result = source_for(&server).fetch_countries().await;

    assert!(matches!(result, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Nothing listens on port 9 (discard) on test machines
    let source = HttpCountrySource::new("http://127.0.0.1:9/countries".to_string());

    let result = source.fetch_countries().await;

    assert!(matches!(result, Err(FetchError::Network(_))));
    assert_eq!(source.location(), "http://127.0.0.1:9/countries");
}

// ============================================================================
// Fetch → State Flow
// ============================================================================

#[tokio::test]
async fn test_loaded_countries_drive_navigation() {
    let server = serve(ResponseTemplate::new(200).set_body_string(COUNTRIES_JSON)).await;
    let source = source_for(&server);
    let mut app = App::new(source.location().to_string(), true);

    let countries = source.fetch_countries().await.unwrap();
    update(&mut app, Action::CountriesLoaded(countries));

    assert_eq!(app.store.load, LoadState::Loaded);
    assert_eq!(app.store.regions(), ["Europe", "Asia"]);

    update(&mut app, Action::OpenCountry("BEL".to_string()));
    let belgium = app.detail_country().unwrap();
    // LUX and NLD are not in the payload
    let borders: Vec<&str> = app
        .store
        .border_countries(belgium)
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(borders, vec!["France", "Germany"]);

    update(&mut app, Action::OpenBorder("LUX".to_string()));
    assert_eq!(app.route(), &Route::detail_for("BEL"));

    update(&mut app, Action::OpenBorder("FRA".to_string()));
    assert_eq!(app.detail_country().map(|c| c.name.as_str()), Some("France"));
}

#[tokio::test]
async fn test_failed_fetch_then_retry() {
    let server = serve(ResponseTemplate::new(503).set_body_string("maintenance")).await;
    let source = source_for(&server);
    let mut app = App::new(source.location().to_string(), false);

    let err = source.fetch_countries().await.unwrap_err();
    update(&mut app, Action::FetchFailed(err.to_string()));

    assert_eq!(
        app.store.load,
        LoadState::Failed("API error (HTTP 503): maintenance".to_string())
    );
    assert!(app.visible_countries().is_empty());
    assert_eq!(update(&mut app, Action::RetryFetch), Effect::FetchCountries);
}
