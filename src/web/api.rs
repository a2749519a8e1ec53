use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::errors::AppError;
use crate::models::{AddressRecord, SortDirection};

/// GET /api — static greeting, useful as a liveness probe.
pub async fn greeting() -> Json<serde_json::Value> {
    Json(json!({ "message": "Olá do backend!" }))
}

/// GET /api/cep/:cep — look up an address, serving from cache when possible.
///
/// Every failure (invalid format, unknown CEP, upstream trouble) comes
/// back as `404 {"error": message}`; see `responses`.
pub async fn lookup_cep(
    Path(cep): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AddressRecord>, AppError> {
    let record = state.lookup.lookup(&cep).await?;
    Ok(Json(record))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Any non-empty value enables sorting; the value itself is not
    /// otherwise inspected.
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    /// Only the literal `desc` flips the order; anything else is ascending.
    pub order: Option<String>,
}

/// GET /api/ceps?sortBy=&order= — every cached record.
pub async fn list_ceps(
    Query(params): Query<ListQuery>,
    State(state): State<AppState>,
) -> Json<Vec<AddressRecord>> {
    let order = match params.order.as_deref() {
        Some("desc") => SortDirection::Desc,
        _ => SortDirection::Asc,
    };
    Json(state.listing.list(params.sort_by.as_deref(), order))
}
