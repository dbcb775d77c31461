use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body for failures that are not part of the entity protocol.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned by every mutating entity endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MessageDto {
    pub msg: String,
}
