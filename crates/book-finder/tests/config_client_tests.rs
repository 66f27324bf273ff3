//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use std::time::Duration;

use book_finder::client::CatalogClient;
use book_finder::config::{CATALOG_URL_ENV, Config, TIMEOUT_ENV, api};

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_default_targets_public_catalog() {
    let config = Config::default();
    assert_eq!(config.catalog_url, api::CATALOG_URL);
    assert!(config.request_timeout.is_none());
}

#[test]
fn test_config_clone_preserves_fields() {
    let config = Config::new("http://localhost:9/v").with_request_timeout(Duration::from_secs(7));
    let cloned = config.clone();
    assert_eq!(cloned.catalog_url, config.catalog_url);
    assert_eq!(cloned.request_timeout, Some(Duration::from_secs(7)));
}

fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key: &str| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_string())
}

#[test]
fn test_config_from_vars() {
    let vars = [(CATALOG_URL_ENV, "http://localhost:8080/books/v1/volumes"), (TIMEOUT_ENV, " 12 ")];
    let config = Config::from_lookup(lookup(&vars)).unwrap();
    assert_eq!(config.catalog_url, "http://localhost:8080/books/v1/volumes");
    assert_eq!(config.request_timeout, Some(Duration::from_secs(12)));
}

#[test]
fn test_config_from_empty_vars_uses_defaults() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.catalog_url, api::CATALOG_URL);
    assert!(config.request_timeout.is_none());
}

#[test]
fn test_config_rejects_bad_timeout() {
    let vars = [(TIMEOUT_ENV, "soon")];
    let err = Config::from_lookup(lookup(&vars)).unwrap_err();
    assert!(err.to_string().contains(TIMEOUT_ENV));
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    assert!(CatalogClient::new(Config::default()).is_ok());
}

#[test]
fn test_client_with_timeout_succeeds() {
    let config = Config::default().with_request_timeout(Duration::from_secs(1));
    assert!(CatalogClient::new(config).is_ok());
}

#[test]
fn test_client_rejects_invalid_url() {
    assert!(CatalogClient::new(Config::new("books.example.com/volumes")).is_err());
}

#[test]
fn test_client_debug_shows_endpoint() {
    let client = CatalogClient::new(Config::default()).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("CatalogClient"));
    assert!(debug.contains("googleapis.com"));
}

#[test]
fn test_client_is_cloneable() {
    let client = CatalogClient::new(Config::default()).unwrap();
    let cloned = client.clone();
    assert_eq!(cloned.catalog_url(), client.catalog_url());
}
