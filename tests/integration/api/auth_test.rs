//! Authentication API integration tests
//!
//! Tests for register, login, logout, me, change_password and
//! admin_reset_password through the full router.

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use userdesk::backend::auth::users::get_user_by_email;
use userdesk::shared::Role;

use crate::common::{login, session_token, signed_in_admin, signed_in_user, with_session, TestApp};
use crate::{assert_api_error, assert_contains, assert_ok_status};

fn registration(email: &str) -> Value {
    json!({
        "fname": "Ada",
        "lname": "Lovelace",
        "email": email,
        "password": "password123"
    })
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/auth/register")
        .json(&registration("  Ada@Example.com "))
        .await;

    let body = assert_ok_status!(response);
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert_eq!(body["user"]["role"], "user");
    assert!(body["user"].get("password_hash").is_none());

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_contains!(set_cookie, "userdesk_session=");
    assert_contains!(set_cookie, "HttpOnly");
    assert_contains!(set_cookie, "SameSite=Lax");
    assert_contains!(set_cookie, "Path=/");

    // The new session is live
    let token = session_token(&response);
    let me = with_session(app.server.get("/auth/me"), &token).await;
    let me = assert_ok_status!(me);
    assert_eq!(me["user"]["fname"], "Ada");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;

    let first = app.server.post("/auth/register").json(&registration("ada@example.com")).await;
    assert_ok_status!(first);

    let second = app.server.post("/auth/register").json(&registration("ADA@example.com")).await;
    assert_api_error!(second, StatusCode::BAD_REQUEST, "email_exists");
    assert_eq!(app.user_count().await, 1);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/auth/register")
        .json(&json!({ "fname": "Ada", "lname": " ", "email": "ada@example.com", "password": "password123" }))
        .await;

    assert_api_error!(response, StatusCode::BAD_REQUEST, "missing_fields");
    assert_eq!(app.user_count().await, 0);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    app.seed_user("Ada", "ada@example.com", "password123", Role::User).await;

    let response = login(&app, "ADA@example.com", "password123").await;

    let body = assert_ok_status!(response);
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert!(!session_token(&response).is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    app.seed_user("Ada", "ada@example.com", "password123", Role::User).await;

    let wrong_password = login(&app, "ada@example.com", "wrongpassword").await;
    let unknown_email = login(&app, "nobody@example.com", "password123").await;

    assert_api_error!(wrong_password, StatusCode::UNAUTHORIZED, "invalid_credentials");
    assert_api_error!(unknown_email, StatusCode::UNAUTHORIZED, "invalid_credentials");
    assert_eq!(wrong_password.text(), unknown_email.text());
}

#[tokio::test]
async fn test_long_passwords_are_never_truncated() {
    let app = TestApp::new().await;

    let mut too_long = registration("ada@example.com");
    too_long["password"] = json!("x".repeat(100));
    let response = app.server.post("/auth/register").json(&too_long).await;
    assert_api_error!(response, StatusCode::BAD_REQUEST, "password_too_long");
    assert_eq!(app.user_count().await, 0);

    let longest = "x".repeat(71);
    let mut at_limit = registration("ada@example.com");
    at_limit["password"] = json!(longest);
    assert_ok_status!(app.server.post("/auth/register").json(&at_limit).await);

    let extended = login(&app, "ada@example.com", &format!("{}DIFFERENT", longest)).await;
    assert_api_error!(extended, StatusCode::UNAUTHORIZED, "invalid_credentials");

    let exact = login(&app, "ada@example.com", &longest).await;
    assert_ok_status!(exact);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new().await;
    let response = app.server.post("/auth/login").json(&json!({ "email": "ada@example.com" })).await;
    assert_api_error!(response, StatusCode::BAD_REQUEST, "missing_fields");
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = TestApp::new().await;
    let response = app
        .server
        .post("/auth/login")
        .text("{\"email\":")
        .content_type("application/json")
        .await;
    assert_api_error!(response, StatusCode::BAD_REQUEST, "invalid_body");
}

#[tokio::test]
async fn test_logout_destroys_session() {
    let app = TestApp::new().await;
    let ada = signed_in_user(&app, "Ada", "ada@example.com", Role::User).await;

    let response = ada.sign(app.server.post("/auth/logout")).await;
    assert_ok_status!(response);

    let me = ada.sign(app.server.get("/auth/me")).await;
    assert_api_error!(me, StatusCode::UNAUTHORIZED, "unauthorized");

    // Idempotent, with or without a cookie
    assert_ok_status!(ada.sign(app.server.post("/auth/logout")).await);
    assert_ok_status!(app.server.post("/auth/logout").await);
}

#[tokio::test]
async fn test_relogin_replaces_previous_session() {
    let app = TestApp::new().await;
    let ada = signed_in_user(&app, "Ada", "ada@example.com", Role::User).await;

    let response = ada
        .sign(app.server.post("/auth/login"))
        .json(&json!({ "email": ada.email, "password": ada.password }))
        .await;
    let new_token = session_token(&response);
    assert_ne!(new_token, ada.token);

    assert_api_error!(ada.sign(app.server.get("/auth/me")).await, StatusCode::UNAUTHORIZED, "unauthorized");
    assert_ok_status!(with_session(app.server.get("/auth/me"), &new_token).await);
}

#[tokio::test]
async fn test_me_requires_session() {
    let app = TestApp::new().await;

    let anonymous = app.server.get("/auth/me").await;
    assert_api_error!(anonymous, StatusCode::UNAUTHORIZED, "unauthorized");

    let forged = with_session(app.server.get("/auth/me"), "not-a-real-token").await;
    assert_api_error!(forged, StatusCode::UNAUTHORIZED, "unauthorized");
}

#[tokio::test]
async fn test_change_password_flow() {
    let app = TestApp::new().await;
    let ada = signed_in_user(&app, "Ada", "ada@example.com", Role::User).await;

    let response = ada
        .sign(app.server.post("/auth/change_password"))
        .json(&json!({ "current_password": ada.password, "new_password": "brandnewpass" }))
        .await;
    assert_ok_status!(response);

    assert_api_error!(
        login(&app, "ada@example.com", "password123").await,
        StatusCode::UNAUTHORIZED,
        "invalid_credentials"
    );
    assert_ok_status!(login(&app, "ada@example.com", "brandnewpass").await);
}

#[tokio::test]
async fn test_change_password_rejections() {
    let app = TestApp::new().await;
    let ada = signed_in_user(&app, "Ada", "ada@example.com", Role::User).await;

    let wrong = ada
        .sign(app.server.post("/auth/change_password"))
        .json(&json!({ "current_password": "wrongpassword", "new_password": "brandnewpass" }))
        .await;
    assert_api_error!(wrong, StatusCode::UNAUTHORIZED, "invalid_current_password");

    let weak = ada
        .sign(app.server.post("/auth/change_password"))
        .json(&json!({ "current_password": ada.password, "new_password": "short" }))
        .await;
    assert_api_error!(weak, StatusCode::BAD_REQUEST, "weak_password");

    let missing = ada
        .sign(app.server.post("/auth/change_password"))
        .json(&json!({ "new_password": "brandnewpass" }))
        .await;
    assert_api_error!(missing, StatusCode::BAD_REQUEST, "missing_fields");

    let anonymous = app
        .server
        .post("/auth/change_password")
        .json(&json!({ "current_password": ada.password, "new_password": "brandnewpass" }))
        .await;
    assert_api_error!(anonymous, StatusCode::UNAUTHORIZED, "unauthorized");
}

#[tokio::test]
async fn test_admin_reset_password() {
    let app = TestApp::new().await;
    let admin = signed_in_admin(&app).await;
    let ada = app.seed_user("Ada", "ada@example.com", "forgotten1", Role::User).await;

    let response = admin
        .sign(app.server.post("/auth/admin_reset_password"))
        .json(&json!({ "user_id": ada.id, "new_password": "resetpass99" }))
        .await;
    assert_ok_status!(response);
    assert_ok_status!(login(&app, "ada@example.com", "resetpass99").await);

    let unknown = admin
        .sign(app.server.post("/auth/admin_reset_password"))
        .json(&json!({ "user_id": ada.id + 100, "new_password": "resetpass99" }))
        .await;
    assert_api_error!(unknown, StatusCode::NOT_FOUND, "user_not_found");

    let string_id = admin
        .sign(app.server.post("/auth/admin_reset_password"))
        .json(&json!({ "user_id": ada.id.to_string(), "new_password": "short" }))
        .await;
    assert_api_error!(string_id, StatusCode::BAD_REQUEST, "weak_password");
}

#[tokio::test]
async fn test_admin_reset_forbidden_for_users_regardless_of_body() {
    let app = TestApp::new().await;
    let ada = signed_in_user(&app, "Ada", "ada@example.com", Role::User).await;

    let valid = ada
        .sign(app.server.post("/auth/admin_reset_password"))
        .json(&json!({ "user_id": ada.id, "new_password": "resetpass99" }))
        .await;
    assert_api_error!(valid, StatusCode::FORBIDDEN, "forbidden");

    let garbage = ada
        .sign(app.server.post("/auth/admin_reset_password"))
        .text("not json at all")
        .content_type("application/json")
        .await;
    assert_api_error!(garbage, StatusCode::FORBIDDEN, "forbidden");
}

#[tokio::test]
async fn test_role_snapshot_not_refreshed_by_promotion() {
    let app = TestApp::new().await;
    let ada = signed_in_user(&app, "Ada", "ada@example.com", Role::User).await;

    sqlx::query("UPDATE user SET role = 'admin' WHERE id = ?")
        .bind(ada.id)
        .execute(app.pool())
        .await
        .unwrap();
    let row = get_user_by_email(app.pool(), "ada@example.com").await.unwrap().unwrap();
    assert_eq!(row.role(), Role::Admin);

    // The session still carries the old role
    let response = ada
        .sign(app.server.delete("/users/delete"))
        .json(&json!({ "id": ada.id }))
        .await;
    assert_api_error!(response, StatusCode::FORBIDDEN, "forbidden");

    // A fresh login picks up the new role
    let fresh = login(&app, "ada@example.com", "password123").await;
    let body = assert_ok_status!(fresh);
    assert_eq!(body["user"]["role"], "admin");
}
