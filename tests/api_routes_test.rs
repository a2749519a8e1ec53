//! Router-level integration tests
//!
//! Drives the production router through `tower::ServiceExt::oneshot` with
//! a canned address source, so no sockets and no network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use cep_proxy::cache::AddressCache;
use cep_proxy::cep::Cep;
use cep_proxy::errors::{AppError, AppResult};
use cep_proxy::models::AddressRecord;
use cep_proxy::services::{ListingService, LookupService};
use cep_proxy::sources::AddressSource;
use cep_proxy::web::{create_router, AppState};

/// Canned address source keyed by normalized CEP, counting every fetch.
struct MockSource {
    records: HashMap<String, AddressRecord>,
    calls: AtomicUsize,
}

impl MockSource {
    fn new(records: &[(&str, Value)]) -> Self {
        let records = records
            .iter()
            .map(|(key, payload)| {
                let record: AddressRecord = serde_json::from_value(payload.clone()).unwrap();
                (key.to_string(), record)
            })
            .collect();
        Self {
            records,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressSource for MockSource {
    async fn fetch(&self, cep: &Cep) -> AppResult<AddressRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .get(cep.key())
            .cloned()
            .ok_or(AppError::CepNotFound)
    }
}

fn praca_da_se() -> Value {
    json!({
        "cep": "01001-000",
        "logradouro": "Praça da Sé",
        "bairro": "Sé",
        "localidade": "São Paulo",
        "uf": "SP"
    })
}

fn rio_branco() -> Value {
    json!({
        "cep": "20040-002",
        "logradouro": "Avenida Rio Branco",
        "bairro": "Centro",
        "localidade": "Rio de Janeiro",
        "uf": "RJ"
    })
}

/// Build the production router around a canned source.
fn test_app(records: &[(&str, Value)]) -> (Router, Arc<MockSource>) {
    let source = Arc::new(MockSource::new(records));
    let cache = AddressCache::new();
    let state = AppState {
        lookup: LookupService::new(cache.clone(), source.clone()),
        listing: ListingService::new(cache),
    };
    (create_router(state), source)
}

// Helper function to send requests to the app
async fn send_request(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json: Value = if body_bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(json!({}))
    };

    (status, json)
}

#[tokio::test]
async fn test_greeting_endpoint() {
    let (app, _) = test_app(&[]);

    let (status, response) = send_request(&app, Method::GET, "/api").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["message"], "Olá do backend!");
}

#[tokio::test]
async fn test_lookup_returns_record_and_caches_it() {
    let (app, source) = test_app(&[("01001000", praca_da_se())]);

    let (status, response) = send_request(&app, Method::GET, "/api/cep/01001-000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["cep"], "01001-000");
    assert_eq!(response["logradouro"], "Praça da Sé");
    assert_eq!(response["localidade"], "São Paulo");
    assert_eq!(response["uf"], "SP");

    // Second lookup of the digit-only form must be served from cache
    let (status, response) = send_request(&app, Method::GET, "/api/cep/01001000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["cep"], "01001-000");
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_invalid_cep_is_404_without_upstream_call() {
    let (app, source) = test_app(&[("01001000", praca_da_se())]);

    let (status, response) = send_request(&app, Method::GET, "/api/cep/123").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["error"], "CEP inválido. Deve conter 8 dígitos.");
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_unknown_cep_is_404_with_not_found_message() {
    let (app, _) = test_app(&[]);

    let (status, response) = send_request(&app, Method::GET, "/api/cep/00000000").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["error"], "CEP não encontrado.");
}

#[tokio::test]
async fn test_list_without_sort_preserves_insertion_order() {
    let (app, _) = test_app(&[("01001000", praca_da_se()), ("20040002", rio_branco())]);

    // São Paulo looked up first, so it is listed first
    send_request(&app, Method::GET, "/api/cep/01001000").await;
    send_request(&app, Method::GET, "/api/cep/20040002").await;

    let (status, response) = send_request(&app, Method::GET, "/api/ceps").await;
    assert_eq!(status, StatusCode::OK);

    let cities: Vec<&str> = response
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["localidade"].as_str().unwrap())
        .collect();
    assert_eq!(cities, ["São Paulo", "Rio de Janeiro"]);
}

#[tokio::test]
async fn test_sort_by_cep_orders_by_city_anyway() {
    let (app, _) = test_app(&[("01001000", praca_da_se()), ("20040002", rio_branco())]);

    send_request(&app, Method::GET, "/api/cep/01001000").await;
    send_request(&app, Method::GET, "/api/cep/20040002").await;

    // sortBy names cep, but the fixed precedence chain starts at city:
    // Rio de Janeiro sorts before São Paulo
    let (status, response) =
        send_request(&app, Method::GET, "/api/ceps?sortBy=cep&order=asc").await;
    assert_eq!(status, StatusCode::OK);

    let cities: Vec<&str> = response
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["localidade"].as_str().unwrap())
        .collect();
    assert_eq!(cities, ["Rio de Janeiro", "São Paulo"]);
}

#[tokio::test]
async fn test_order_desc_reverses_the_listing() {
    let (app, _) = test_app(&[("01001000", praca_da_se()), ("20040002", rio_branco())]);

    send_request(&app, Method::GET, "/api/cep/01001000").await;
    send_request(&app, Method::GET, "/api/cep/20040002").await;

    let (status, response) =
        send_request(&app, Method::GET, "/api/ceps?sortBy=localidade&order=desc").await;
    assert_eq!(status, StatusCode::OK);

    let cities: Vec<&str> = response
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["localidade"].as_str().unwrap())
        .collect();
    assert_eq!(cities, ["São Paulo", "Rio de Janeiro"]);
}

#[tokio::test]
async fn test_empty_sort_by_does_not_sort() {
    let (app, _) = test_app(&[("01001000", praca_da_se()), ("20040002", rio_branco())]);

    send_request(&app, Method::GET, "/api/cep/01001000").await;
    send_request(&app, Method::GET, "/api/cep/20040002").await;

    let (status, response) = send_request(&app, Method::GET, "/api/ceps?sortBy=").await;
    assert_eq!(status, StatusCode::OK);

    let cities: Vec<&str> = response
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["localidade"].as_str().unwrap())
        .collect();
    assert_eq!(cities, ["São Paulo", "Rio de Janeiro"]);
}

#[tokio::test]
async fn test_list_is_empty_before_any_lookup() {
    let (app, _) = test_app(&[]);

    let (status, response) = send_request(&app, Method::GET, "/api/ceps").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, json!([]));
}
