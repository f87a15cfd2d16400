//! Integration tests for registration and login.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_register_success() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "email": "newreader@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("email").unwrap().as_str().unwrap(),
        "newreader@example.com"
    );
    assert_eq!(
        response
            .body
            .get("subscription_plan")
            .unwrap()
            .as_str()
            .unwrap(),
        "free"
    );
    // The password hash must never leak into responses
    assert!(response.body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = helpers::TestApp::new().await;
    app.register("dupe@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "email": "dupe@example.com",
                "password": "different456",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "email": "not-an-email",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    app.register("login-ok@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "login-ok@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("access_token").is_some());
    assert_eq!(
        response.body.get("token_type").unwrap().as_str().unwrap(),
        "bearer"
    );
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = helpers::TestApp::new().await;
    app.register("login-bad@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "login-bad@example.com",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    // Same status and message as a wrong password, so callers cannot
    // probe which emails are registered
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("me-user@example.com", "password123")
        .await;

    let response = app.request("GET", "/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("email").unwrap().as_str().unwrap(),
        "me-user@example.com"
    );
    assert!(response.body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_me_without_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/me", None, Some("not.a.real.token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
