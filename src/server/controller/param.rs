use serde::Deserialize;
use utoipa::IntoParams;

/// `?id=` query parameter.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdParam {
    /// Store-assigned entity id
    pub id: String,
}

/// `?name=` query parameter for user lookups; `?user=` is accepted as well.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserNameParam {
    /// Exact user name
    #[serde(alias = "user")]
    pub name: String,
}

/// `?name=` query parameter for club lookups; `?club=` is accepted as well.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClubNameParam {
    /// Exact club name
    #[serde(alias = "club")]
    pub name: String,
}
