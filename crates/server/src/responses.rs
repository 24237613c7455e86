use serde::Serialize;
use utoipa::ToSchema;

use models::{BioData, Program};

/// Acknowledgment body: a message, never the affected record.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self { message: message.to_string() }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BioDataListResponse {
    pub biodata: Vec<BioData>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BioDataRecordResponse {
    pub biodata: BioData,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProgramListResponse {
    pub programs: Vec<Program>,
}
