//! End-to-end session flow against a stub LMS backend served by axum.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};

use lms_portal::core::session::{
    Credentials, HttpLoginBackend, LoginOutcome, MemoryStorage, Role, SessionStateMachine,
    SessionStatus, guard::GuardDecision, guard::decide,
};
use lms_portal::core::{ApiClient, ApiError, Config};

fn mint(role: &str) -> String {
    let exp = chrono::Utc::now().timestamp() + 3600;
    encode(
        &Header::default(),
        &json!({ "jti": "42", "email": "a@b.com", "name": "Ann", "sub": role, "exp": exp }),
        &EncodingKey::from_secret(b"stub_backend_secret"),
    )
    .unwrap()
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    match (body["email"].as_str(), body["password"].as_str()) {
        (Some("a@b.com"), Some("x")) => (StatusCode::OK, Json(json!({ "token": mint("Admin") }))),
        (Some("e@b.com"), Some("x")) => {
            (StatusCode::OK, Json(json!({ "token": mint("Employee") })))
        }
        (Some("broken@b.com"), _) => (StatusCode::OK, Json(json!({ "user": "no token here" }))),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid email or password" })),
        ),
    }
}

fn has_bearer(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| !token.is_empty())
}

fn missing_token() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Missing token" })),
    )
}

async fn courses(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !has_bearer(&headers) {
        return missing_token();
    }
    (
        StatusCode::OK,
        Json(json!([{ "id": 1, "title": "Safety 101" }])),
    )
}

async fn create_course(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !has_bearer(&headers) {
        return missing_token();
    }
    (
        StatusCode::CREATED,
        Json(json!({ "id": 2, "title": body["title"] })),
    )
}

async fn update_course(
    headers: HeaderMap,
    Path(id): Path<u32>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if !has_bearer(&headers) {
        return missing_token();
    }
    (StatusCode::OK, Json(json!({ "id": id, "title": body["title"] })))
}

async fn delete_course(headers: HeaderMap, Path(id): Path<u32>) -> (StatusCode, Json<Value>) {
    if !has_bearer(&headers) {
        return missing_token();
    }
    if id != 1 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Course not found" })),
        );
    }
    (StatusCode::OK, Json(json!({})))
}

/// Start the stub backend, returning its API base URL
async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/courses", get(courses).post(create_course))
        .route("/api/courses/{id}", put(update_course).delete(delete_course));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api")
}

struct Portal {
    session: SessionStateMachine<HttpLoginBackend>,
    api: ApiClient,
}

fn portal(base_url: &str, storage: &MemoryStorage) -> Portal {
    let http = reqwest::Client::new();
    let session = SessionStateMachine::new(
        HttpLoginBackend::new(http.clone(), base_url),
        Arc::new(storage.clone()),
    );
    let api = ApiClient::new(http, Config::new(base_url), session.authorizer());
    Portal { session, api }
}

#[tokio::test]
async fn test_login_authorizes_requests_until_logout() {
    let base_url = spawn_backend().await;
    let storage = MemoryStorage::new();
    let portal = portal(&base_url, &storage);
    portal.session.initialize();

    let before = portal.api.get_json::<Value>("/courses").await;
    assert!(matches!(before, Err(ref e) if e.is_auth_failure()));

    let outcome = portal
        .session
        .login(&Credentials::new("a@b.com", "x"))
        .await;
    assert!(outcome.is_success());

    let courses: Value = portal.api.get_json("/courses").await.unwrap();
    assert_eq!(courses[0]["title"], "Safety 101");

    portal.session.logout();
    assert!(storage.is_empty());

    let after = portal.api.get_json::<Value>("/courses").await;
    match after {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Missing token");
        }
        other => panic!("expected 401, got {:?}", other),
    }
}

#[tokio::test]
async fn test_wrong_password_surfaces_server_message() {
    let base_url = spawn_backend().await;
    let storage = MemoryStorage::new();
    let portal = portal(&base_url, &storage);
    portal.session.initialize();

    let outcome = portal
        .session
        .login(&Credentials::new("a@b.com", "wrong"))
        .await;

    assert_eq!(
        outcome,
        LoginOutcome::Failure {
            error: "Invalid email or password".to_string()
        }
    );
    assert!(storage.is_empty());
    assert_eq!(portal.session.state().status, SessionStatus::Unauthenticated);
}

#[tokio::test]
async fn test_response_without_token_is_rejected() {
    let base_url = spawn_backend().await;
    let storage = MemoryStorage::new();
    let portal = portal(&base_url, &storage);
    portal.session.initialize();

    let outcome = portal
        .session
        .login(&Credentials::new("broken@b.com", "x"))
        .await;

    assert_eq!(outcome.error(), Some("Invalid response from server"));
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_session_survives_reload() {
    let base_url = spawn_backend().await;
    let storage = MemoryStorage::new();

    let first = portal(&base_url, &storage);
    first.session.initialize();
    first
        .session
        .login(&Credentials::new("e@b.com", "x"))
        .await;

    // A fresh page load over the same storage, no login call
    let reloaded = portal(&base_url, &storage);
    let state = reloaded.session.initialize();

    assert_eq!(state.user().map(|user| user.role), Some(Role::Employee));
    assert_eq!(decide(&state, Some(Role::Employee)), GuardDecision::Render);
    assert_eq!(decide(&state, Some(Role::Admin)), GuardDecision::Unauthorized);

    let courses: Value = reloaded.api.get_json("/courses").await.unwrap();
    assert!(courses.is_array());
}

#[tokio::test]
async fn test_unreachable_backend() {
    // Grab a free port, then close it so nothing is listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let storage = MemoryStorage::new();
    let portal = portal(&format!("http://{addr}/api"), &storage);
    portal.session.initialize();

    let outcome = portal
        .session
        .login(&Credentials::new("a@b.com", "x"))
        .await;

    assert_eq!(outcome.error(), Some("Unable to reach the server"));
    assert_eq!(portal.session.state().user(), None);
}

#[tokio::test]
async fn test_write_verbs_carry_session_token() {
    let base_url = spawn_backend().await;
    let storage = MemoryStorage::new();
    let portal = portal(&base_url, &storage);
    portal.session.initialize();
    portal
        .session
        .login(&Credentials::new("a@b.com", "x"))
        .await;

    let created: Value = portal
        .api
        .post_json("/courses", &json!({ "title": "Forklift basics" }))
        .await
        .unwrap();
    assert_eq!(created, json!({ "id": 2, "title": "Forklift basics" }));

    let updated: Value = portal
        .api
        .put_json("/courses/1", &json!({ "title": "Safety 102" }))
        .await
        .unwrap();
    assert_eq!(updated, json!({ "id": 1, "title": "Safety 102" }));

    portal.api.delete("/courses/1").await.unwrap();

    match portal.api.delete("/courses/9").await {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Course not found");
        }
        other => panic!("expected 404, got {:?}", other),
    }
}

#[tokio::test]
async fn test_write_verbs_rejected_without_session() {
    let base_url = spawn_backend().await;
    let storage = MemoryStorage::new();
    let portal = portal(&base_url, &storage);
    portal.session.initialize();

    let created = portal
        .api
        .post_json::<_, Value>("/courses", &json!({ "title": "Forklift basics" }))
        .await;
    assert!(matches!(created, Err(ref e) if e.is_auth_failure()));

    let updated = portal
        .api
        .put_json::<_, Value>("/courses/1", &json!({ "title": "Safety 102" }))
        .await;
    assert!(matches!(updated, Err(ref e) if e.is_auth_failure()));

    let deleted = portal.api.delete("/courses/1").await;
    assert!(matches!(deleted, Err(ref e) if e.is_auth_failure()));
}

#[tokio::test]
async fn test_login_without_email_claim() {
    let app = Router::new().route(
        "/api/auth/login",
        post(|| async {
            let exp = chrono::Utc::now().timestamp() + 60;
            let token = encode(
                &Header::default(),
                &json!({ "jti": "42", "name": "Ann", "sub": "Admin", "exp": exp }),
                &EncodingKey::from_secret(b"stub_backend_secret"),
            )
            .unwrap();
            Json(json!({ "token": token }))
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let storage = MemoryStorage::new();
    let portal = portal(&format!("http://{addr}/api"), &storage);
    portal.session.initialize();

    let outcome = portal
        .session
        .login(&Credentials::new("a@b.com", "x"))
        .await;

    match outcome {
        LoginOutcome::Success(user) => {
            assert_eq!(user.user_id, "42");
            assert_eq!(user.name, "Ann");
            assert_eq!(user.email, "");
            assert_eq!(user.role, Role::Admin);
        }
        other => panic!("expected success, got {:?}", other),
    }
}
