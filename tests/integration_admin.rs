mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{
    body_json, count_todos, create_test_todo, create_test_user, request, send, setup_test_app,
    token_for,
};

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_lists_every_todo(pool: PgPool) {
    let admin = create_test_user(&pool, "root", "test1234", "admin").await;
    let alice = create_test_user(&pool, "alice", "test1234", "user").await;
    let bob = create_test_user(&pool, "bob", "test1234", "user").await;
    create_test_todo(&pool, alice.id, "Alice's todo").await;
    create_test_todo(&pool, bob.id, "Bob's todo").await;
    let app = setup_test_app(pool);

    let response = send(&app, request("GET", "/admin/todo", Some(&token_for(&admin)), None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let owners: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|todo| todo["owner_id"].as_i64().unwrap())
        .collect();
    assert_eq!(owners, vec![alice.id, bob.id]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_deletes_any_todo(pool: PgPool) {
    let admin = create_test_user(&pool, "root", "test1234", "admin").await;
    let bob = create_test_user(&pool, "bob", "test1234", "user").await;
    let bob_todo = create_test_todo(&pool, bob.id, "Bob's todo").await;
    let app = setup_test_app(pool.clone());

    let response = send(
        &app,
        request(
            "DELETE",
            &format!("/admin/todo/{}", bob_todo),
            Some(&token_for(&admin)),
            None,
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(count_todos(&pool).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_delete_missing_todo(pool: PgPool) {
    let admin = create_test_user(&pool, "root", "test1234", "admin").await;
    let app = setup_test_app(pool);

    let response = send(
        &app,
        request("DELETE", "/admin/todo/42", Some(&token_for(&admin)), None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_non_admin_is_unauthorized(pool: PgPool) {
    let alice = create_test_user(&pool, "alice", "test1234", "user").await;
    let alice_todo = create_test_todo(&pool, alice.id, "Alice's todo").await;
    let token = token_for(&alice);
    let app = setup_test_app(pool.clone());

    let list = send(&app, request("GET", "/admin/todo", Some(&token), None)).await;
    assert_eq!(list.status(), StatusCode::UNAUTHORIZED);

    // Even for a todo the caller owns.
    let delete = send(
        &app,
        request("DELETE", &format!("/admin/todo/{}", alice_todo), Some(&token), None),
    )
    .await;
    assert_eq!(delete.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(count_todos(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_routes_require_token(pool: PgPool) {
    let app = setup_test_app(pool);

    let response = send(&app, request("GET", "/admin/todo", None, None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
