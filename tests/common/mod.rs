use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use chrono::Duration;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use todosapp::router::init_router;
use todosapp::state::AppState;
use todosapp_auth::create_access_token;
use todosapp_config::{CorsConfig, JwtConfig, PasswordConfig};
use todosapp_core::hash_password_with_cost;

pub const TEST_SECRET: &str = "integration-test-secret";
const TEST_BCRYPT_COST: u32 = 4;

#[allow(dead_code)]
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

pub fn setup_test_app(pool: PgPool) -> Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        password_config: PasswordConfig {
            bcrypt_cost: TEST_BCRYPT_COST,
        },
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    };
    init_router(state)
}

pub async fn create_test_user(
    pool: &PgPool,
    username: &str,
    password: &str,
    role: &str,
) -> TestUser {
    let hashed = hash_password_with_cost(password, TEST_BCRYPT_COST).unwrap();
    let email = format!("{}@example.com", username);

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (email, username, first_name, last_name, hashed_password, is_active, role)
         VALUES ($1, $2, 'Test', 'User', $3, TRUE, $4)
         RETURNING id",
    )
    .bind(&email)
    .bind(username)
    .bind(&hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        username: username.to_string(),
        email,
        password: password.to_string(),
        role: role.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_todo(pool: &PgPool, owner_id: i64, title: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO todos (title, description, priority, complete, owner_id)
         VALUES ($1, 'Seeded by a test', 3, FALSE, $2)
         RETURNING id",
    )
    .bind(title)
    .bind(owner_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn count_todos(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM todos")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn token_for(user: &TestUser) -> String {
    create_access_token(
        &user.username,
        user.id,
        &user.role,
        Duration::minutes(20),
        &test_jwt_config(),
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Builds a request, attaching a JSON body when one is given.
#[allow(dead_code)]
pub fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", bearer(token));
    }

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
