//! Profile API integration tests
//!
//! Tests for /users/read, readone, search, create, update and delete,
//! including the access level each one requires.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use userdesk::backend::auth::users::get_user_by_id;
use userdesk::shared::{Role, UserProfile, UserSummary};

use crate::common::{login, signed_in_admin, signed_in_user, TestApp};
use crate::{assert_api_error, assert_ok_status};

fn ids(rows: &[UserSummary]) -> Vec<i64> {
    rows.iter().map(|r| r.id).collect()
}

#[tokio::test]
async fn test_read_lists_users_in_id_order() {
    let app = TestApp::new().await;
    let ada = signed_in_user(&app, "Ada", "ada@example.com", Role::User).await;
    let alan = app.seed_user("Alan", "alan@example.com", "password123", Role::User).await;

    let response = ada.sign(app.server.get("/users/read")).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let users: Vec<UserSummary> = response.json();
    assert_eq!(ids(&users), vec![ada.id, alan.id]);

    let raw: Value = response.json();
    assert!(raw[0].get("email").is_none());
    assert!(raw[0].get("password_hash").is_none());
}

#[tokio::test]
async fn test_profile_reads_require_session() {
    let app = TestApp::new().await;

    for path in ["/users/read", "/users/readone?id=1", "/users/search?keyword=a"] {
        let response = app.server.get(path).await;
        assert_api_error!(response, StatusCode::UNAUTHORIZED, "unauthorized");
    }
}

#[tokio::test]
async fn test_readone() {
    let app = TestApp::new().await;
    let ada = signed_in_user(&app, "Ada", "ada@example.com", Role::User).await;

    let found = ada
        .sign(app.server.get("/users/readone"))
        .add_query_param("id", ada.id)
        .await;
    assert_eq!(found.status_code(), StatusCode::OK);
    let profile: UserProfile = found.json();
    assert_eq!(profile.email, "ada@example.com");
    assert_eq!(profile.fname, "Ada");

    let missing = ada
        .sign(app.server.get("/users/readone"))
        .add_query_param("id", ada.id + 40)
        .await;
    assert_api_error!(missing, StatusCode::NOT_FOUND, "user_not_found");

    let no_id = ada.sign(app.server.get("/users/readone")).await;
    assert_api_error!(no_id, StatusCode::BAD_REQUEST, "missing_fields");
}

#[tokio::test]
async fn test_search_modes() {
    let app = TestApp::new().await;
    let ada = signed_in_user(&app, "Ada", "ada@example.com", Role::User).await;
    let alan = app.seed_user("Alan", "alan@example.com", "password123", Role::User).await;
    let grace = app.seed_user("Grace", "grace@example.com", "password123", Role::User).await;

    let search = |query: &'static str| ada.sign(app.server.get(&format!("/users/search?{}", query)));

    // Keyword: names, ascending
    let body = assert_ok_status!(search("keyword=al").await);
    let rows: Vec<UserSummary> = serde_json::from_value(body["data"].clone()).unwrap();
    assert_eq!(ids(&rows), vec![alan.id]);

    // Numeric keyword also matches the id
    let numeric = ada
        .sign(app.server.get("/users/search"))
        .add_query_param("keyword", grace.id)
        .await;
    let body = assert_ok_status!(numeric);
    let rows: Vec<UserSummary> = serde_json::from_value(body["data"].clone()).unwrap();
    assert!(ids(&rows).contains(&grace.id));

    // Id only: one-element array
    let by_id = ada
        .sign(app.server.get("/users/search"))
        .add_query_param("id", alan.id)
        .await;
    let body = assert_ok_status!(by_id);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"][0]["id"], alan.id);

    // Id that matches nothing: empty array
    let body = assert_ok_status!(search("id=999999").await);
    assert_eq!(body["data"], json!([]));

    // Neither: everything, newest first
    let body = assert_ok_status!(search("").await);
    let rows: Vec<UserSummary> = serde_json::from_value(body["data"].clone()).unwrap();
    assert_eq!(ids(&rows), vec![grace.id, alan.id, ada.id]);

    // Wildcards are literal
    let body = assert_ok_status!(search("keyword=%25").await);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_update_own_profile() {
    let app = TestApp::new().await;
    let ada = signed_in_user(&app, "Ada", "ada@example.com", Role::User).await;

    let response = ada
        .sign(app.server.patch("/users/update"))
        .json(&json!({
            "id": ada.id,
            "fname": "Augusta",
            "lname": "King",
            "email": "Augusta@Example.com",
            "avatar": "https://example.com/ada.png"
        }))
        .await;
    assert_ok_status!(response);

    let row = get_user_by_id(app.pool(), ada.id).await.unwrap().unwrap();
    assert_eq!(row.fname, "Augusta");
    assert_eq!(row.email, "augusta@example.com");
    assert_eq!(row.avatar.as_deref(), Some("https://example.com/ada.png"));

    // The new email logs in; the password is untouched
    assert_ok_status!(login(&app, "augusta@example.com", &ada.password).await);
}

#[tokio::test]
async fn test_update_other_profile_needs_admin() {
    let app = TestApp::new().await;
    let ada = signed_in_user(&app, "Ada", "ada@example.com", Role::User).await;
    let admin = signed_in_admin(&app).await;
    let alan = app.seed_user("Alan", "alan@example.com", "password123", Role::User).await;

    let body = json!({ "id": alan.id, "fname": "A", "lname": "T", "email": "alan@example.com" });

    let forbidden = ada.sign(app.server.patch("/users/update")).json(&body).await;
    assert_api_error!(forbidden, StatusCode::FORBIDDEN, "forbidden");

    assert_ok_status!(admin.sign(app.server.patch("/users/update")).json(&body).await);

    let taken = admin
        .sign(app.server.patch("/users/update"))
        .json(&json!({ "id": alan.id, "fname": "A", "lname": "T", "email": "ada@example.com" }))
        .await;
    assert_api_error!(taken, StatusCode::BAD_REQUEST, "email_exists");

    let missing = admin
        .sign(app.server.patch("/users/update"))
        .json(&json!({ "id": alan.id, "fname": "A" }))
        .await;
    assert_api_error!(missing, StatusCode::BAD_REQUEST, "missing_fields");
}

#[tokio::test]
async fn test_delete_rejected_without_admin() {
    let app = TestApp::new().await;
    let ada = signed_in_user(&app, "Ada", "ada@example.com", Role::User).await;
    let alan = app.seed_user("Alan", "alan@example.com", "password123", Role::User).await;

    let response = ada
        .sign(app.server.delete("/users/delete"))
        .json(&json!({ "id": alan.id }))
        .await;
    assert_api_error!(response, StatusCode::FORBIDDEN, "forbidden");

    let anonymous = app.server.delete("/users/delete").json(&json!({ "id": alan.id })).await;
    assert_api_error!(anonymous, StatusCode::UNAUTHORIZED, "unauthorized");

    assert_eq!(app.user_count().await, 2);
}

#[tokio::test]
async fn test_admin_delete() {
    let app = TestApp::new().await;
    let admin = signed_in_admin(&app).await;
    let alan = app.seed_user("Alan", "alan@example.com", "password123", Role::User).await;

    assert_ok_status!(
        admin
            .sign(app.server.delete("/users/delete"))
            .json(&json!({ "id": alan.id.to_string() }))
            .await
    );
    assert!(get_user_by_id(app.pool(), alan.id).await.unwrap().is_none());

    let again = admin
        .sign(app.server.delete("/users/delete"))
        .json(&json!({ "id": alan.id }))
        .await;
    assert_api_error!(again, StatusCode::NOT_FOUND, "user_not_found");

    let no_id = admin.sign(app.server.delete("/users/delete")).json(&json!({})).await;
    assert_api_error!(no_id, StatusCode::BAD_REQUEST, "missing_fields");
}

#[tokio::test]
async fn test_admin_create() {
    let app = TestApp::new().await;
    let admin = signed_in_admin(&app).await;

    let response = admin
        .sign(app.server.post("/users/create"))
        .json(&json!({
            "fname": "Grace",
            "lname": "Hopper",
            "email": "grace@example.com",
            "password": "cobol1959"
        }))
        .await;
    let body = assert_ok_status!(response);
    assert_eq!(body["user"]["email"], "grace@example.com");
    assert!(body["user"].get("password_hash").is_none());
    assert_ok_status!(login(&app, "grace@example.com", "cobol1959").await);

    // No password: the account exists but cannot log in until reset
    let locked = admin
        .sign(app.server.post("/users/create"))
        .json(&json!({ "fname": "Alan", "lname": "Turing", "email": "alan@example.com" }))
        .await;
    assert_ok_status!(locked);
    assert_api_error!(
        login(&app, "alan@example.com", "password123").await,
        StatusCode::UNAUTHORIZED,
        "invalid_credentials"
    );

    let duplicate = admin
        .sign(app.server.post("/users/create"))
        .json(&json!({ "fname": "G", "lname": "H", "email": "GRACE@example.com" }))
        .await;
    assert_api_error!(duplicate, StatusCode::BAD_REQUEST, "email_exists");

    let weak = admin
        .sign(app.server.post("/users/create"))
        .json(&json!({ "fname": "K", "lname": "J", "email": "kj@example.com", "password": "short" }))
        .await;
    assert_api_error!(weak, StatusCode::BAD_REQUEST, "weak_password");
}

#[tokio::test]
async fn test_create_forbidden_for_users() {
    let app = TestApp::new().await;
    let ada = signed_in_user(&app, "Ada", "ada@example.com", Role::User).await;

    let response = ada
        .sign(app.server.post("/users/create"))
        .json(&json!({ "fname": "Grace", "lname": "Hopper", "email": "grace@example.com" }))
        .await;
    assert_api_error!(response, StatusCode::FORBIDDEN, "forbidden");
    assert_eq!(app.user_count().await, 1);
}
