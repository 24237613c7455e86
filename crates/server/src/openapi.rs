use utoipa::{OpenApi, ToSchema};

use crate::responses::{
    BioDataListResponse, BioDataRecordResponse, ErrorResponse, MessageResponse,
    ProgramListResponse,
};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::biodata::create,
        crate::biodata::list,
        crate::biodata::list_by_program,
        crate::biodata::list_by_date,
        crate::biodata::get_by_id,
        crate::biodata::update,
        crate::biodata::delete,
        crate::programs::create,
        crate::programs::list,
        crate::programs::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            ErrorResponse,
            BioDataListResponse,
            BioDataRecordResponse,
            ProgramListResponse,
            models::BioData,
            models::BioDataInput,
            models::Program,
            models::ProgramInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "biodata"),
        (name = "program")
    ),
    info(title = "BioData API", version = "1.0.0")
)]
pub struct ApiDoc;
