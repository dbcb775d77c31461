use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, UserDto},
    },
    server::{
        controller::param::{IdParam, UserNameParam},
        error::AppError,
        model::user::User,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every user.
///
/// # Returns
/// - `200 OK` - JSON array of users (passwords omitted)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/findAll",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db, &state.password_hasher)
        .find_all()
        .await?;

    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Find a user by exact user name.
///
/// # Returns
/// - `200 OK` - The user, or `null` when no user has that name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/findByUserName",
    tag = USER_TAG,
    params(UserNameParam),
    responses(
        (status = 200, description = "Matching user or null", body = Option<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_user_by_name(
    State(state): State<AppState>,
    Query(params): Query<UserNameParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &state.password_hasher)
        .find_by_user_name(&params.name)
        .await?;

    Ok((StatusCode::OK, Json(user.map(|u| u.into_dto()))))
}

/// Find a user by id.
///
/// # Returns
/// - `200 OK` - The user, or `null` when no user has that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/findById",
    tag = USER_TAG,
    params(IdParam),
    responses(
        (status = 200, description = "Matching user or null", body = Option<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_user_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &state.password_hasher)
        .find_by_id(&params.id)
        .await?;

    Ok((StatusCode::OK, Json(user.map(|u| u.into_dto()))))
}

/// Add a new user.
///
/// Rejected when either the id or the user name is already taken. The submitted
/// password is stored as a bcrypt digest.
///
/// # Returns
/// - `200 OK` - `{"msg": "User addition was a success"}`
/// - `400 Bad Request` - `{"msg": "User id Already exists"}`
/// - `500 Internal Server Error` - `{"msg": "Issue while attempting addition of user"}`
#[utoipa::path(
    put,
    path = "/users/addUser",
    tag = USER_TAG,
    request_body = UserDto,
    responses(
        (status = 200, description = "User added", body = MessageDto),
        (status = 400, description = "Id or user name already exists", body = MessageDto),
        (status = 500, description = "Store failure", body = MessageDto)
    ),
)]
pub async fn add_user(
    State(state): State<AppState>,
    Json(payload): Json<UserDto>,
) -> impl IntoResponse {
    UserService::new(&state.db, &state.password_hasher)
        .add(User::from_dto(payload))
        .await
}

/// Replace an existing user.
///
/// # Returns
/// - `200 OK` - `{"msg": "User update was a success"}`
/// - `400 Bad Request` - `{"msg": "User Id does not exist"}`
/// - `500 Internal Server Error` - `{"msg": "Issue while attempting update of user"}`
#[utoipa::path(
    patch,
    path = "/users/updateUser",
    tag = USER_TAG,
    request_body = UserDto,
    responses(
        (status = 200, description = "User replaced", body = MessageDto),
        (status = 400, description = "User does not exist", body = MessageDto),
        (status = 500, description = "Store failure", body = MessageDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Json(payload): Json<UserDto>,
) -> impl IntoResponse {
    UserService::new(&state.db, &state.password_hasher)
        .update(User::from_dto(payload))
        .await
}

/// Remove a user by id.
///
/// # Returns
/// - `200 OK` - `{"msg": "User deleted successfully"}`
/// - `400 Bad Request` - `{"msg": "User Id does not exist"}`
/// - `500 Internal Server Error` - `{"msg": "Issue while deleting user"}`
#[utoipa::path(
    delete,
    path = "/users/removeUser",
    tag = USER_TAG,
    params(IdParam),
    responses(
        (status = 200, description = "User removed", body = MessageDto),
        (status = 400, description = "User does not exist", body = MessageDto),
        (status = 500, description = "Store failure", body = MessageDto)
    ),
)]
pub async fn remove_user(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
) -> impl IntoResponse {
    UserService::new(&state.db, &state.password_hasher)
        .remove(&params.id)
        .await
}

/// Check a user name and password.
///
/// Responds with an empty body either way; only the status carries the answer. A body
/// that is not a `{username, password}` JSON object counts as an invalid login.
///
/// # Returns
/// - `200 OK` - Credentials are valid
/// - `400 Bad Request` - Unknown user, wrong password or unreadable credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/validLogin",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials are valid"),
        (status = 400, description = "Unknown user, wrong password or unreadable credentials"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn valid_login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!("Rejecting unreadable login request: {}", rejection);
            return Ok(StatusCode::BAD_REQUEST);
        }
    };

    let valid = UserService::new(&state.db, &state.password_hasher)
        .valid_login(&payload.username, &payload.password)
        .await?;

    if valid {
        Ok(StatusCode::OK)
    } else {
        Ok(StatusCode::BAD_REQUEST)
    }
}
