use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use models::service_record::Model;
use serde::Deserialize;
use service::records::{NewRecord, RecordChanges, RecordCriteria};
use tracing::info;

use crate::{errors::JsonApiError, metrics, state::ServerState};

/// Raw list filters; `"todos"` or absence means no filter.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// First day included, `YYYY-MM-DD` (UTC-03:00)
    pub data_inicio: Option<String>,
    /// Last day included, `YYYY-MM-DD` (UTC-03:00)
    pub data_fim: Option<String>,
    /// `ativos`, `inativos` or `todos`
    pub status: Option<String>,
    /// `pagos`, `nao_pagos` or `todos`
    pub pago: Option<String>,
    /// e.g. `RUA`, `EMPRESA` or `todos`
    pub tipo_cliente: Option<String>,
}

impl ListQuery {
    pub fn criteria(&self) -> RecordCriteria {
        RecordCriteria::default()
            .date_start(self.data_inicio.as_deref())
            .date_end(self.data_fim.as_deref())
            .status(self.status.as_deref())
            .paid(self.pago.as_deref())
            .client_type(self.tipo_cliente.as_deref())
    }
}

#[utoipa::path(
    get, path = "/api/registros", tag = "records",
    params(ListQuery),
    responses(
        (status = 200, description = "Matching records, newest first", body = [crate::openapi::RecordDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<Model>>, JsonApiError> {
    let criteria = q.criteria();
    let records = state
        .records
        .list(&criteria)
        .await
        .map_err(|e| JsonApiError::from_service(e, "List Failed"))?;
    metrics::RECORD_LISTS_TOTAL.inc();
    info!(count = records.len(), filtered = !criteria.is_unconstrained(), "list records");
    Ok(Json(records.into_iter().map(Model::in_business_time).collect()))
}

#[utoipa::path(
    post, path = "/api/registros", tag = "records",
    request_body = crate::openapi::NewRecordDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::RecordDoc),
        (status = 400, description = "Unknown service, wrong price or invalid field"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<NewRecord>, JsonRejection>,
) -> Result<(StatusCode, Json<Model>), JsonApiError> {
    let Json(input) = payload.map_err(|rejection| {
        metrics::RECORDS_REJECTED_TOTAL.inc();
        JsonApiError::from(rejection)
    })?;
    info!(service = %input.service, price = ?input.price, client_type = %input.client_type, "record_create_request");
    match state.records.create(input).await {
        Ok(m) => {
            metrics::RECORDS_CREATED_TOTAL.inc();
            Ok((StatusCode::CREATED, Json(m.in_business_time())))
        }
        Err(e) => {
            if e.is_client_error() {
                metrics::RECORDS_REJECTED_TOTAL.inc();
            }
            Err(JsonApiError::from_service(e, "Create Failed"))
        }
    }
}

#[utoipa::path(
    get, path = "/api/registros/{id}", tag = "records",
    params(("id" = i32, Path, description = "Record ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::RecordDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Model>, JsonApiError> {
    let m = state.records.get(id).await.map_err(|e| JsonApiError::from_service(e, "Get Failed"))?;
    Ok(Json(m.in_business_time()))
}

#[utoipa::path(
    put, path = "/api/registros/{id}", tag = "records",
    params(("id" = i32, Path, description = "Record ID")),
    request_body = crate::openapi::RecordChangesDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::RecordDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    payload: Result<Json<RecordChanges>, JsonRejection>,
) -> Result<Json<Model>, JsonApiError> {
    let Json(changes) = payload?;
    let m = state
        .records
        .update(id, changes)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Update Failed"))?;
    Ok(Json(m.in_business_time()))
}

#[utoipa::path(
    delete, path = "/api/registros/{id}", tag = "records",
    params(("id" = i32, Path, description = "Record ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.records.delete(id).await.map_err(|e| JsonApiError::from_service(e, "Delete Failed"))?;
    Ok(StatusCode::NO_CONTENT)
}
