use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A named program. Name uniqueness is enforced by the store's unique index,
/// not here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Program {
    pub id: String,
    pub name: String,
}

/// Request body for creating a Program. There is no update operation.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ProgramInput {
    #[serde(default)]
    pub name: String,
}
