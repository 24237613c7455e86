use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use models::ProgramInput;

use crate::errors::ApiError;
use crate::responses::{ErrorResponse, MessageResponse, ProgramListResponse};
use crate::routes::ServerState;

#[utoipa::path(
    post, path = "/program", tag = "program",
    request_body = ProgramInput,
    responses(
        (status = 200, description = "Created", body = MessageResponse),
        (status = 409, description = "Name Already Exists", body = ErrorResponse),
        (status = 500, description = "Store Failure", body = ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ProgramInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    let program = state.programs.insert(input).await?;
    info!(id = %program.id, name = %program.name, "program created");
    Ok(Json(MessageResponse::new("Program created successfully")))
}

#[utoipa::path(
    get, path = "/program", tag = "program",
    responses(
        (status = 200, description = "All programs", body = ProgramListResponse),
        (status = 500, description = "Store Failure", body = ErrorResponse)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<ProgramListResponse>, ApiError> {
    let programs = state.programs.list().await?;
    info!(count = programs.len(), "list programs");
    Ok(Json(ProgramListResponse { programs }))
}

#[utoipa::path(
    delete, path = "/program/{id}", tag = "program",
    params(("id" = String, Path, description = "Program id")),
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
    if !state.programs.delete(&id).await? {
        return Err(ApiError::not_found("Program"));
    }
    info!(%id, "program deleted");
    Ok(Json(MessageResponse::new("Program deleted successfully")))
}
