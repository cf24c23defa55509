pub mod catalog;
pub mod records;

use axum::{routing::get, Json, Router};
use common::types::Health;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{metrics, openapi::ApiDoc, state::ServerState};

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router. `frontend_dir`, when given, is served
/// as the browser UI for every path no API route claims.
pub fn build_router(state: ServerState, cors: CorsLayer, frontend_dir: Option<&str>) -> Router {
    let api = Router::new()
        .route("/api/servicos", get(catalog::list))
        .route("/api/registros", get(records::list).post(records::create))
        .route(
            "/api/registros/:id",
            get(records::get).put(records::update).delete(records::delete),
        );

    let mut app = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics_handler))
        .merge(api)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    if let Some(dir) = frontend_dir {
        let index = format!("{}/index.html", dir.trim_end_matches('/'));
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(cors).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            // 5xx responses are logged as errors
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
