use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User as it travels over the wire.
///
/// `password` is accepted on input and never written back out.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing)]
    #[schema(write_only)]
    pub password: Option<String>,
}

/// Credentials submitted to the login check.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}
