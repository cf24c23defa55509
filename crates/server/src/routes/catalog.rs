use axum::{extract::State, Json};
use models::catalog::CatalogEntry;

use crate::state::ServerState;

/// Services the UI may offer, with the price each one must carry.
#[utoipa::path(
    get, path = "/api/servicos", tag = "catalog",
    responses((status = 200, description = "Catalog", body = [crate::openapi::CatalogEntryDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<CatalogEntry>> {
    Json(state.records.catalog())
}
