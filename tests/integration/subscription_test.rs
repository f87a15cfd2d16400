//! Integration tests for subscription plans.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_list_plans() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/subscription-plans", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let plans = response.body.as_array().expect("Expected array");
    assert_eq!(plans.len(), 3);

    let names: Vec<&str> = plans.iter().filter_map(|p| p["name"].as_str()).collect();
    assert!(names.contains(&"free"));
    assert!(names.contains(&"premium"));
    assert!(names.contains(&"unlimited"));
}

#[tokio::test]
async fn test_new_user_starts_on_free_plan() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("sub-fresh@example.com", "password123")
        .await;

    let me = app.request("GET", "/me", None, Some(&token)).await;
    assert_eq!(
        me.body.get("subscription_plan").unwrap().as_str().unwrap(),
        "free"
    );
}

#[tokio::test]
async fn test_subscribe_changes_plan() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("sub-upgrade@example.com", "password123")
        .await;
    let plan_id = app.find_plan_id("premium").await;

    let response = app
        .request(
            "POST",
            &format!("/subscribe/{}", plan_id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("message").unwrap().as_str().unwrap(),
        "Successfully subscribed to premium plan"
    );

    let me = app.request("GET", "/me", None, Some(&token)).await;
    assert_eq!(
        me.body.get("subscription_plan").unwrap().as_str().unwrap(),
        "premium"
    );
}

#[tokio::test]
async fn test_subscribe_unknown_plan() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("sub-unknown@example.com", "password123")
        .await;

    let response = app
        .request("POST", "/subscribe/999999", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // Plan is unchanged after the failed switch
    let me = app.request("GET", "/me", None, Some(&token)).await;
    assert_eq!(
        me.body.get("subscription_plan").unwrap().as_str().unwrap(),
        "free"
    );
}

#[tokio::test]
async fn test_subscribe_requires_auth() {
    let app = helpers::TestApp::new().await;
    let plan_id = app.find_plan_id("premium").await;

    let response = app
        .request("POST", &format!("/subscribe/{}", plan_id), None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unlimited_plan_grants_premium_access() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("sub-unlimited@example.com", "password123")
        .await;
    let plan_id = app.find_plan_id("unlimited").await;
    let book_id = app.find_book_id(true).await;

    app.request(
        "POST",
        &format!("/subscribe/{}", plan_id),
        None,
        Some(&token),
    )
    .await;

    let response = app
        .request(
            "POST",
            &format!("/books/{}/add-to-library", book_id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}
