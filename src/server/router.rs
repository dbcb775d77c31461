use axum::{routing::get, Json, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{club::*, user::*},
    state::AppState,
};

/// Path the generated OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "finesdb", description = "User and club records"),
    tags(
        (name = "user", description = "User records and login check"),
        (name = "club", description = "Club records")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(find_all_users))
        .routes(routes!(find_user_by_name))
        .routes(routes!(find_user_by_id))
        .routes(routes!(add_user))
        .routes(routes!(update_user))
        .routes(routes!(remove_user))
        .routes(routes!(valid_login))
        .routes(routes!(find_all_clubs))
        .routes(routes!(find_club_by_name))
        .routes(routes!(find_club_by_id))
        .routes(routes!(add_club))
        .routes(routes!(update_club))
        .routes(routes!(remove_club))
        .split_for_parts();

    router
        .route(OPENAPI_PATH, get(move || async move { Json(api) }))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use test_utils::{builder::TestBuilder, context::TestContext};
    use tower::ServiceExt;

    use super::*;
    use crate::server::service::password::PasswordHasher;

    async fn setup() -> (TestContext, Router) {
        let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
        let db = test.db().clone();
        let app = router().with_state(AppState::new(db, PasswordHasher::new(4)));

        (test, app)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn add_user_then_conflict() {
        let (_test, app) = setup().await;
        let user = json!({"userName": "alice", "password": "secret"});

        let response = send(&app, Method::PUT, "/users/addUser", Some(user.clone())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"msg": "User addition was a success"})
        );

        let response = send(&app, Method::PUT, "/users/addUser", Some(user)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({"msg": "User id Already exists"}));
    }

    #[tokio::test]
    async fn find_user_omits_password() {
        let (_test, app) = setup().await;
        send(
            &app,
            Method::PUT,
            "/users/addUser",
            Some(json!({"userName": "alice", "password": "secret"})),
        )
        .await;

        let response = send(&app, Method::GET, "/users/findByUserName?name=alice", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["userName"], "alice");
        assert!(body["id"].is_string());
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn find_user_accepts_legacy_query_name() {
        let (_test, app) = setup().await;
        send(
            &app,
            Method::PUT,
            "/users/addUser",
            Some(json!({"userName": "alice", "password": "secret"})),
        )
        .await;

        let response = send(&app, Method::GET, "/users/findByUserName?user=alice", None).await;
        assert_eq!(json_body(response).await["userName"], "alice");
    }

    #[tokio::test]
    async fn missing_user_is_null() {
        let (_test, app) = setup().await;

        let response = send(&app, Method::GET, "/users/findById?id=nope", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, Value::Null);

        let response = send(&app, Method::GET, "/users/findAll", None).await;
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn update_and_remove_unknown_user() {
        let (_test, app) = setup().await;

        let response = send(
            &app,
            Method::PATCH,
            "/users/updateUser",
            Some(json!({"id": "ghost", "userName": "ghost"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({"msg": "User Id does not exist"}));

        let response = send(&app, Method::DELETE, "/users/removeUser?id=ghost", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({"msg": "User Id does not exist"}));
    }

    #[tokio::test]
    async fn valid_login_checks_credentials() {
        let (_test, app) = setup().await;
        send(
            &app,
            Method::PUT,
            "/users/addUser",
            Some(json!({"userName": "alice", "password": "secret"})),
        )
        .await;

        let login = |username: &str, password: &str| {
            json!({"username": username, "password": password})
        };

        let response = send(
            &app,
            Method::GET,
            "/users/validLogin",
            Some(login("alice", "secret")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(
            &app,
            Method::GET,
            "/users/validLogin",
            Some(login("alice", "wrong")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(
            &app,
            Method::GET,
            "/users/validLogin",
            Some(login("bob", "secret")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn valid_login_rejects_unreadable_credentials() {
        let (_test, app) = setup().await;

        let response = send(
            &app,
            Method::GET,
            "/users/validLogin",
            Some(json!({"username": "alice"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, Method::GET, "/users/validLogin", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn club_lifecycle() {
        let (_test, app) = setup().await;

        let response = send(
            &app,
            Method::PUT,
            "/clubs/addClub",
            Some(json!({"clubName": "chess", "adminId": "u1", "memberIds": ["u1", "u2"]})),
        )
        .await;
        assert_eq!(
            json_body(response).await,
            json!({"msg": "Club addition was a success"})
        );

        let response = send(&app, Method::GET, "/clubs/findByClubName?club=chess", None).await;
        let club = json_body(response).await;
        assert_eq!(club["memberIds"], json!(["u1", "u2"]));
        let id = club["id"].as_str().unwrap().to_string();

        let response = send(
            &app,
            Method::PATCH,
            "/clubs/updateClub",
            Some(json!({"id": id, "clubName": "go", "adminId": "u2", "memberIds": ["u2"]})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"msg": "Club update was a success"})
        );

        let uri = format!("/clubs/findById?id={}", id);
        let club = json_body(send(&app, Method::GET, &uri, None).await).await;
        assert_eq!(club["clubName"], "go");
        assert_eq!(club["adminId"], "u2");

        let uri = format!("/clubs/removeClub?id={}", id);
        let response = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(
            json_body(response).await,
            json!({"msg": "Club deleted successfully"})
        );

        let response = send(&app, Method::GET, "/clubs/findAll", None).await;
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn serves_openapi_document() {
        let (_test, app) = setup().await;

        let response = send(&app, Method::GET, OPENAPI_PATH, None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let doc = json_body(response).await;
        assert!(doc["paths"].get("/users/addUser").is_some());
        assert!(doc["paths"].get("/clubs/removeClub").is_some());
    }
}
