use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        club::ClubDto,
    },
    server::{
        controller::param::{ClubNameParam, IdParam},
        error::AppError,
        model::club::Club,
        service::club::ClubService,
        state::AppState,
    },
};

/// Tag for grouping club endpoints in OpenAPI documentation
pub static CLUB_TAG: &str = "club";

/// List every club.
#[utoipa::path(
    get,
    path = "/clubs/findAll",
    tag = CLUB_TAG,
    responses(
        (status = 200, description = "All clubs", body = Vec<ClubDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_all_clubs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let clubs = ClubService::new(&state.db).find_all().await?;

    let clubs_dto: Vec<_> = clubs.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(clubs_dto)))
}

/// Find a club by exact club name, responding with `null` when none matches.
#[utoipa::path(
    get,
    path = "/clubs/findByClubName",
    tag = CLUB_TAG,
    params(ClubNameParam),
    responses(
        (status = 200, description = "Matching club or null", body = Option<ClubDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_club_by_name(
    State(state): State<AppState>,
    Query(params): Query<ClubNameParam>,
) -> Result<impl IntoResponse, AppError> {
    let club = ClubService::new(&state.db)
        .find_by_club_name(&params.name)
        .await?;

    Ok((StatusCode::OK, Json(club.map(|c| c.into_dto()))))
}

/// Find a club by id, responding with `null` when none matches.
#[utoipa::path(
    get,
    path = "/clubs/findById",
    tag = CLUB_TAG,
    params(IdParam),
    responses(
        (status = 200, description = "Matching club or null", body = Option<ClubDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_club_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
) -> Result<impl IntoResponse, AppError> {
    let club = ClubService::new(&state.db).find_by_id(&params.id).await?;

    Ok((StatusCode::OK, Json(club.map(|c| c.into_dto()))))
}

/// Add a new club.
///
/// # Returns
/// - `200 OK` - `{"msg": "Club addition was a success"}`
/// - `400 Bad Request` - `{"msg": "Club id Already exists"}`
/// - `500 Internal Server Error` - `{"msg": "Issue while attempting addition of club"}`
#[utoipa::path(
    put,
    path = "/clubs/addClub",
    tag = CLUB_TAG,
    request_body = ClubDto,
    responses(
        (status = 200, description = "Club added", body = MessageDto),
        (status = 400, description = "Id or club name already exists", body = MessageDto),
        (status = 500, description = "Store failure", body = MessageDto)
    ),
)]
pub async fn add_club(
    State(state): State<AppState>,
    Json(payload): Json<ClubDto>,
) -> impl IntoResponse {
    ClubService::new(&state.db)
        .add(Club::from_dto(payload))
        .await
}

/// Replace an existing club.
#[utoipa::path(
    patch,
    path = "/clubs/updateClub",
    tag = CLUB_TAG,
    request_body = ClubDto,
    responses(
        (status = 200, description = "Club replaced", body = MessageDto),
        (status = 400, description = "Club does not exist", body = MessageDto),
        (status = 500, description = "Store failure", body = MessageDto)
    ),
)]
pub async fn update_club(
    State(state): State<AppState>,
    Json(payload): Json<ClubDto>,
) -> impl IntoResponse {
    ClubService::new(&state.db)
        .update(Club::from_dto(payload))
        .await
}

/// Remove a club by id.
#[utoipa::path(
    delete,
    path = "/clubs/removeClub",
    tag = CLUB_TAG,
    params(IdParam),
    responses(
        (status = 200, description = "Club removed", body = MessageDto),
        (status = 400, description = "Club does not exist", body = MessageDto),
        (status = 500, description = "Store failure", body = MessageDto)
    ),
)]
pub async fn remove_club(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
) -> impl IntoResponse {
    ClubService::new(&state.db).remove(&params.id).await
}
