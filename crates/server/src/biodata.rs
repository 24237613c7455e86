use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use models::BioDataInput;
use service::dates;

use crate::errors::ApiError;
use crate::responses::{BioDataListResponse, BioDataRecordResponse, ErrorResponse, MessageResponse};
use crate::routes::ServerState;

#[utoipa::path(
    post, path = "/biodata", tag = "biodata",
    request_body = BioDataInput,
    responses(
        (status = 200, description = "Created", body = MessageResponse),
        (status = 500, description = "Store Failure", body = ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<BioDataInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    let rec = state.biodata.insert(input).await?;
    info!(id = %rec.id, program = %rec.program, "biodata created");
    Ok(Json(MessageResponse::new("BioData created successfully")))
}

#[utoipa::path(
    get, path = "/biodata", tag = "biodata",
    responses(
        (status = 200, description = "All records, store's natural order", body = BioDataListResponse),
        (status = 500, description = "Store Failure", body = ErrorResponse)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<BioDataListResponse>, ApiError> {
    let biodata = state.biodata.list().await?;
    info!(count = biodata.len(), "list biodata");
    Ok(Json(BioDataListResponse { biodata }))
}

#[utoipa::path(
    get, path = "/biodata/program/{program}", tag = "biodata",
    params(("program" = String, Path, description = "Exact, case-sensitive program name")),
    responses(
        (status = 200, description = "Matching records; empty list when none", body = BioDataListResponse),
        (status = 500, description = "Store Failure", body = ErrorResponse)
    )
)]
pub async fn list_by_program(
    State(state): State<ServerState>,
    Path(program): Path<String>,
) -> Result<Json<BioDataListResponse>, ApiError> {
    let biodata = state.biodata.list_by_program(&program).await?;
    info!(%program, count = biodata.len(), "list biodata by program");
    Ok(Json(BioDataListResponse { biodata }))
}

#[utoipa::path(
    get, path = "/biodata/date/{date}", tag = "biodata",
    params(("date" = String, Path, description = "RFC 3339 or YYYY-MM-DD; inclusive lower bound")),
    responses(
        (status = 200, description = "Records dated on or after the given date", body = BioDataListResponse),
        (status = 400, description = "Unparseable Date", body = ErrorResponse),
        (status = 500, description = "Store Failure", body = ErrorResponse)
    )
)]
pub async fn list_by_date(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> Result<Json<BioDataListResponse>, ApiError> {
    let since = dates::parse_since(&date)?;
    let biodata = state.biodata.list_since(since).await?;
    info!(%since, count = biodata.len(), "list biodata by date");
    Ok(Json(BioDataListResponse { biodata }))
}

#[utoipa::path(
    get, path = "/biodata/{id}", tag = "biodata",
    params(("id" = String, Path, description = "BioData id")),
    responses(
        (status = 200, description = "The record", body = BioDataRecordResponse),
        (status = 400, description = "Malformed Id", body = ErrorResponse),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<BioDataRecordResponse>, ApiError> {
    let rec = state
        .biodata
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("BioData"))?;
    Ok(Json(BioDataRecordResponse { biodata: rec }))
}

#[utoipa::path(
    put, path = "/biodata/{id}", tag = "biodata",
    params(("id" = String, Path, description = "BioData id")),
    request_body = BioDataInput,
    responses(
        (status = 200, description = "Updated", body = MessageResponse),
        (status = 400, description = "Malformed Id", body = ErrorResponse),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<BioDataInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.biodata.replace(&id, input).await? {
        return Err(ApiError::not_found("BioData"));
    }
    info!(%id, "biodata updated");
    Ok(Json(MessageResponse::new("BioData updated successfully")))
}

#[utoipa::path(
    delete, path = "/biodata/{id}", tag = "biodata",
    params(("id" = String, Path, description = "BioData id")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 400, description = "Malformed Id", body = ErrorResponse),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.biodata.delete(&id).await? {
        return Err(ApiError::not_found("BioData"));
    }
    info!(%id, "biodata deleted");
    Ok(Json(MessageResponse::new("BioData deleted successfully")))
}
