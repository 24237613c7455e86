use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::{BioDataRepository, ProgramRepository};

use crate::openapi::ApiDoc;
use crate::{biodata, programs};

/// Per-request state: explicitly owned store handles, injected at startup so
/// tests can substitute the in-memory repositories.
#[derive(Clone)]
pub struct ServerState {
    pub biodata: Arc<dyn BioDataRepository>,
    pub programs: Arc<dyn ProgramRepository>,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: API routes, Swagger UI at /api-docs,
/// CORS, and per-request tracing.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/biodata", post(biodata::create).get(biodata::list))
        .route("/biodata/program/:program", get(biodata::list_by_program))
        .route("/biodata/date/:date", get(biodata::list_by_date))
        .route(
            "/biodata/:id",
            get(biodata::get_by_id).put(biodata::update).delete(biodata::delete),
        )
        .route("/program", post(programs::create).get(programs::list))
        .route("/program/:id", delete(programs::delete))
        .with_state(state);

    api.merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
