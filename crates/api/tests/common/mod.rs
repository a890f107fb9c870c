#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{Duration as ChronoDuration, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use storekeep_api::auth::jwt::{generate_access_token, JwtConfig};
use storekeep_api::config::{default_business_offset, RetentionConfig, ServerConfig};
use storekeep_api::routes;
use storekeep_api::state::AppState;
use storekeep_core::roles::ROLE_WORKER;
use storekeep_db::models::store::CreateStore;
use storekeep_db::models::time_card::{CreateTimeCard, TimeCard};
use storekeep_db::models::user::{CreateUser, User};
use storekeep_db::repositories::{StoreRepo, TimeCardRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a fixed JWT secret and the Asia/Seoul business offset.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        business_offset: default_business_offset(),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
        retention: RetentionConfig::default(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

fn request(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
}

/// Send an unauthenticated GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let req = request(Method::GET, uri, None)
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let req = request(Method::GET, uri, Some(token))
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let req = request(Method::POST, uri, Some(token))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(req).await.unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let req = request(Method::DELETE, uri, Some(token))
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Issue an access token for `user` signed with the test secret.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, &user.role, &test_config().jwt).unwrap()
}

/// Create a store and one worker in it.
pub async fn seed_user(pool: &PgPool, store_name: &str) -> User {
    let store = StoreRepo::create(
        pool,
        &CreateStore {
            store_name: store_name.to_string(),
        },
    )
    .await
    .unwrap();

    seed_user_in_store(pool, store.id, &format!("{store_name} worker")).await
}

/// Create another worker in an existing store.
pub async fn seed_user_in_store(pool: &PgPool, store_id: i64, user_name: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            kakao_email: format!("{}@kakao.test", user_name.replace(' ', ".")),
            user_name: user_name.to_string(),
            user_profile_code: 2,
            role: ROLE_WORKER.to_string(),
            phone_number: Some("010-1234-5678".to_string()),
            work_time: Some("09:00~18:00".to_string()),
            work_place: Some("front counter".to_string()),
            store_id,
        },
    )
    .await
    .unwrap()
}

/// Create a time card for `user` on the given date.
pub async fn seed_time_card(
    pool: &PgPool,
    user: &User,
    (year, month, day): (i32, u32, u32),
    work_time: &str,
) -> TimeCard {
    TimeCardRepo::create(
        pool,
        &CreateTimeCard {
            year: year.to_string(),
            month: month.to_string(),
            day: day.to_string(),
            work_time: work_time.to_string(),
            work_hour: 8.0,
            user_id: user.id,
        },
    )
    .await
    .unwrap()
}

/// Today's date in the business timezone, offset by `days`.
pub fn business_date(days: i64) -> (i32, u32, u32) {
    use chrono::Datelike;

    let local = Utc::now().with_timezone(&default_business_offset()) + ChronoDuration::days(days);
    (local.year(), local.month(), local.day())
}
