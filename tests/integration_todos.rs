mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use sqlx::PgPool;

use common::{
    body_json, count_todos, create_test_todo, create_test_user, request, send, setup_test_app,
    token_for,
};

fn todo_payload(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "description": "Need to learn everyday!",
        "priority": 4,
        "complete": false
    })
}

#[sqlx::test(migrations = "./migrations")]
async fn test_read_all_requires_token(pool: PgPool) {
    let app = setup_test_app(pool);

    let response = send(&app, request("GET", "/", None, None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["detail"],
        "Could not validate credentials"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_garbage_token_is_rejected(pool: PgPool) {
    let app = setup_test_app(pool);

    let response = send(&app, request("GET", "/", Some("not.a.token"), None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_read_todo(pool: PgPool) {
    let user = create_test_user(&pool, "john", "test1234", "user").await;
    let token = token_for(&user);
    let app = setup_test_app(pool);

    let response = send(
        &app,
        request("POST", "/todo/create", Some(&token), Some(todo_payload("New Todo!"))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["title"], "New Todo!");
    assert_eq!(created["priority"], 4);
    assert_eq!(created["complete"], false);
    assert_eq!(created["owner_id"], user.id);

    let id = created["id"].as_i64().unwrap();
    let response = send(&app, request("GET", &format!("/todo/{}", id), Some(&token), None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_owner_id_in_payload_is_ignored(pool: PgPool) {
    let john = create_test_user(&pool, "john", "test1234", "user").await;
    let jane = create_test_user(&pool, "jane", "test1234", "user").await;
    let app = setup_test_app(pool);

    let mut payload = todo_payload("Sneaky todo");
    payload["owner_id"] = json!(jane.id);

    let response = send(
        &app,
        request("POST", "/todo/create", Some(&token_for(&john)), Some(payload)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["owner_id"], john.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_todo_validation(pool: PgPool) {
    let user = create_test_user(&pool, "john", "test1234", "user").await;
    let token = token_for(&user);
    let app = setup_test_app(pool.clone());

    for payload in [
        json!({ "title": "ab", "description": "long enough", "priority": 3 }),
        json!({ "title": "Valid title", "description": "long enough", "priority": 0 }),
        json!({ "title": "Valid title", "description": "long enough", "priority": 6 }),
        json!({ "title": "Valid title", "description": "x".repeat(101), "priority": 3 }),
        json!({ "title": "Valid title", "priority": 3 }),
    ] {
        let response = send(&app, request("POST", "/todo/create", Some(&token), Some(payload))).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    assert_eq!(count_todos(&pool).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_malformed_json_is_bad_request(pool: PgPool) {
    let user = create_test_user(&pool, "john", "test1234", "user").await;
    let app = setup_test_app(pool);

    let request = Request::builder()
        .method("POST")
        .uri("/todo/create")
        .header("authorization", format!("Bearer {}", token_for(&user)))
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();

    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_todo(pool: PgPool) {
    let user = create_test_user(&pool, "john", "test1234", "user").await;
    let id = create_test_todo(&pool, user.id, "Learn to code!").await;
    let token = token_for(&user);
    let app = setup_test_app(pool.clone());

    let response = send(
        &app,
        request(
            "PUT",
            &format!("/todo/{}", id),
            Some(&token),
            Some(json!({
                "title": "Change the title of the todo already saved!",
                "description": "Need to learn everyday!",
                "priority": 5,
                "complete": true
            })),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (title, priority, complete, owner_id): (String, i32, bool, i64) =
        sqlx::query_as("SELECT title, priority, complete, owner_id FROM todos WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_eq!(title, "Change the title of the todo already saved!");
    assert_eq!(priority, 5);
    assert!(complete);
    assert_eq!(owner_id, user.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_todo_is_not_found(pool: PgPool) {
    let user = create_test_user(&pool, "john", "test1234", "user").await;
    let token = token_for(&user);
    let app = setup_test_app(pool);

    let get = send(&app, request("GET", "/todo/999", Some(&token), None)).await;
    assert_eq!(get.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(get).await["detail"], "Todo not found");

    let put = send(
        &app,
        request("PUT", "/todo/999", Some(&token), Some(todo_payload("Whatever"))),
    )
    .await;
    assert_eq!(put.status(), StatusCode::NOT_FOUND);

    let delete = send(&app, request("DELETE", "/todo/999", Some(&token), None)).await;
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_non_positive_id_is_unprocessable(pool: PgPool) {
    let user = create_test_user(&pool, "john", "test1234", "user").await;
    let token = token_for(&user);
    let app = setup_test_app(pool);

    for uri in ["/todo/0", "/todo/-1", "/todo/abc"] {
        let response = send(&app, request("GET", uri, Some(&token), None)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_ownership_isolation(pool: PgPool) {
    let alice = create_test_user(&pool, "alice", "test1234", "user").await;
    let bob = create_test_user(&pool, "bob", "test1234", "user").await;
    let alice_todo = create_test_todo(&pool, alice.id, "Alice's todo").await;
    let bob_todo = create_test_todo(&pool, bob.id, "Bob's todo").await;
    let token = token_for(&alice);
    let app = setup_test_app(pool.clone());

    let list = body_json(send(&app, request("GET", "/", Some(&token), None)).await).await;
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|todo| todo["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![alice_todo]);

    let bob_uri = format!("/todo/{}", bob_todo);

    let get = send(&app, request("GET", &bob_uri, Some(&token), None)).await;
    assert_eq!(get.status(), StatusCode::NOT_FOUND);

    let put = send(
        &app,
        request("PUT", &bob_uri, Some(&token), Some(todo_payload("Hijacked"))),
    )
    .await;
    assert_eq!(put.status(), StatusCode::NOT_FOUND);

    let delete = send(&app, request("DELETE", &bob_uri, Some(&token), None)).await;
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);

    let title: String = sqlx::query_scalar("SELECT title FROM todos WHERE id = $1")
        .bind(bob_todo)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(title, "Bob's todo");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_is_owner_scoped_on_todo_routes(pool: PgPool) {
    let admin = create_test_user(&pool, "root", "test1234", "admin").await;
    let bob = create_test_user(&pool, "bob", "test1234", "user").await;
    let bob_todo = create_test_todo(&pool, bob.id, "Bob's todo").await;
    let app = setup_test_app(pool);

    let response = send(
        &app,
        request("GET", &format!("/todo/{}", bob_todo), Some(&token_for(&admin)), None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_end_to_end_scenario(pool: PgPool) {
    let app = setup_test_app(pool);

    let response = send(
        &app,
        request(
            "POST",
            "/auth/",
            None,
            Some(json!({
                "username": "john",
                "email": "john@example.com",
                "first_name": "John",
                "last_name": "Doe",
                "password": "test1234",
                "role": "admin"
            })),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let john_id = body_json(response).await["id"].as_i64().unwrap();

    let login = Request::builder()
        .method("POST")
        .uri("/auth/token")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("username=john&password=test1234"))
        .unwrap();
    let response = send(&app, login).await;
    assert_eq!(response.status(), StatusCode::OK);
    let token = body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send(
        &app,
        request(
            "POST",
            "/todo/create",
            Some(&token),
            Some(json!({
                "title": "Learn the python",
                "description": "Need to learn everyday!",
                "priority": 4
            })),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let list = body_json(send(&app, request("GET", "/", Some(&token), None)).await).await;
    let todos = list.as_array().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["owner_id"], john_id);
    assert_eq!(todos[0]["complete"], false);

    let todo_uri = format!("/todo/{}", todos[0]["id"].as_i64().unwrap());

    let response = send(&app, request("DELETE", &todo_uri, Some(&token), None)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, request("GET", &todo_uri, Some(&token), None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
