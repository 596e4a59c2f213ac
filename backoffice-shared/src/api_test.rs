use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::json;

use crate::api::{ApiClient, RemoteTokenValidator, TokenValidator};
use crate::error::ApiError;

/// Stand-in for the remote authority. Accepts `Bearer good` only when the
/// client asks for JSON; `Bearer slow` never answers in time and
/// `Bearer broken` trips a server error.
async fn auth_user(headers: HeaderMap) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let wants_json = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        == Some("application/json");

    match authorization {
        Some("Bearer good") if wants_json => Json(json!({
            "id": 42,
            "name": "Dora",
            "email": "dora@example.com",
            "role_id": 1
        }))
        .into_response(),
        Some("Bearer slow") => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            StatusCode::OK.into_response()
        }
        Some("Bearer broken") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Some("Bearer not-json") => "plain text".into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthenticated." })),
        )
            .into_response(),
    }
}

async fn spawn_authority() -> String {
    let app = Router::new().route("/api/auth/user", get(auth_user));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn unreachable_origin() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, Duration::from_millis(500))
}

#[test]
fn base_url_drops_trailing_slash() {
    let client = ApiClient::new("http://localhost:8000/", Duration::from_secs(1));
    assert_eq!(client.base_url(), "http://localhost:8000");
}

#[tokio::test]
async fn valid_token_is_accepted() {
    let origin = spawn_authority().await;
    let validator = RemoteTokenValidator::new(client(&origin));
    assert!(validator.is_valid("good").await);
}

#[tokio::test]
async fn rejected_token_is_invalid() {
    let origin = spawn_authority().await;
    let validator = RemoteTokenValidator::new(client(&origin));
    assert!(!validator.is_valid("expired").await);
}

#[tokio::test]
async fn server_error_is_invalid() {
    let origin = spawn_authority().await;
    let validator = RemoteTokenValidator::new(client(&origin));
    assert!(!validator.is_valid("broken").await);
}

#[tokio::test]
async fn network_failure_is_invalid() {
    let validator = RemoteTokenValidator::new(client(&unreachable_origin()));
    assert!(!validator.is_valid("good").await);
}

#[tokio::test]
async fn timeout_is_invalid() {
    let origin = spawn_authority().await;
    let validator = RemoteTokenValidator::new(client(&origin));
    assert!(!validator.is_valid("slow").await);
}

#[tokio::test]
async fn success_status_is_valid_whatever_the_body() {
    let origin = spawn_authority().await;
    let validator = RemoteTokenValidator::new(client(&origin));
    assert!(validator.is_valid("not-json").await);
}

#[tokio::test]
async fn authenticated_user_returns_profile() {
    let origin = spawn_authority().await;
    let profile = client(&origin).authenticated_user("good").await.unwrap();
    assert_eq!(profile.id, 42);
    assert_eq!(profile.email, "dora@example.com");
    assert_eq!(profile.attributes.get("role_id"), Some(&json!(1)));
}

#[tokio::test]
async fn status_error_carries_server_message() {
    let origin = spawn_authority().await;
    let err = client(&origin).authenticated_user("expired").await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(matches!(
        &err,
        ApiError::Status { message: Some(message), .. } if message == "Unauthenticated."
    ));
    assert!(err.to_string().ends_with("status 401: Unauthenticated."));
}

#[tokio::test]
async fn unexpected_body_is_a_decode_error() {
    let origin = spawn_authority().await;
    let err = client(&origin).authenticated_user("not-json").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn transport_error_has_no_status() {
    let err = client(&unreachable_origin())
        .check_token("good")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(err.status(), None);
}
