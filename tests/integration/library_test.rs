//! Integration tests for library acquisition and read tracking.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_add_free_book_to_library() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("lib-free@example.com", "password123")
        .await;
    let book_id = app.find_book_id(false).await;

    let response = app
        .request(
            "POST",
            &format!("/books/{}/add-to-library", book_id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);

    let my_books = app.request("GET", "/my-books", None, Some(&token)).await;
    assert_eq!(my_books.status, StatusCode::OK);
    let books = my_books.body.as_array().expect("Expected array");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["id"].as_i64().unwrap(), book_id);
    assert!(!books[0]["is_read"].as_bool().unwrap());
}

#[tokio::test]
async fn test_add_book_twice_is_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("lib-dupe@example.com", "password123")
        .await;
    let book_id = app.find_book_id(false).await;

    let path = format!("/books/{}/add-to-library", book_id);
    let first = app.request("POST", &path, None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.request("POST", &path, None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);

    // The library still holds a single copy
    let my_books = app.request("GET", "/my-books", None, Some(&token)).await;
    assert_eq!(my_books.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_free_user_cannot_add_premium_book() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("lib-denied@example.com", "password123")
        .await;
    let book_id = app.find_book_id(true).await;

    let response = app
        .request(
            "POST",
            &format!("/books/{}/add-to-library", book_id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let my_books = app.request("GET", "/my-books", None, Some(&token)).await;
    assert_eq!(my_books.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_premium_user_can_add_premium_book() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("lib-premium@example.com", "password123")
        .await;
    let plan_id = app.find_plan_id("premium").await;
    let book_id = app.find_book_id(true).await;

    let subscribe = app
        .request(
            "POST",
            &format!("/subscribe/{}", plan_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(subscribe.status, StatusCode::OK);

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

#[tokio::test]
async fn test_downgrade_keeps_acquired_books() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("lib-downgrade@example.com", "password123")
        .await;
    let premium_plan = app.find_plan_id("premium").await;
    let free_plan = app.find_plan_id("free").await;
    let premium_book = app.find_book_id(true).await;

    app.request(
        "POST",
        &format!("/subscribe/{}", premium_plan),
        None,
        Some(&token),
    )
    .await;
    let added = app
        .request(
            "POST",
            &format!("/books/{}/add-to-library", premium_book),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(added.status, StatusCode::OK);

    // Downgrade back to free
    let downgraded = app
        .request(
            "POST",
            &format!("/subscribe/{}", free_plan),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(downgraded.status, StatusCode::OK);

    // The premium book stays in the library
    let my_books = app.request("GET", "/my-books", None, Some(&token)).await;
    let books = my_books.body.as_array().unwrap();
    assert!(
        books
            .iter()
            .any(|b| b["id"].as_i64() == Some(premium_book))
    );

    // And stays readable: mark-read still works on the free tier
    let marked = app
        .request(
            "POST",
            &format!("/books/{}/mark-read", premium_book),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(marked.status, StatusCode::OK);

    let my_books = app.request("GET", "/my-books", None, Some(&token)).await;
    let retained = my_books
        .body
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["id"].as_i64() == Some(premium_book))
        .expect("Premium book missing after downgrade")
        .clone();
    assert!(retained["is_read"].as_bool().unwrap());

    // But new premium acquisitions are denied again
    let other_premium: i64 = {
        let catalog = app.request("GET", "/books", None, None).await;
        catalog
            .body
            .as_array()
            .unwrap()
            .iter()
            .filter(|b| b["is_premium"].as_bool() == Some(true))
            .filter_map(|b| b["id"].as_i64())
            .find(|id| *id != premium_book)
            .expect("Need a second premium book")
    };
    let denied = app
        .request(
            "POST",
            &format!("/books/{}/add-to-library", other_premium),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_add_nonexistent_book() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("lib-missing@example.com", "password123")
        .await;

    let response = app
        .request("POST", "/books/999999/add-to-library", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_mark_read_and_idempotence() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("lib-read@example.com", "password123")
        .await;
    let book_id = app.find_book_id(false).await;

    app.request(
        "POST",
        &format!("/books/{}/add-to-library", book_id),
        None,
        Some(&token),
    )
    .await;

    let path = format!("/books/{}/mark-read", book_id);
    let first = app.request("POST", &path, None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);

    // Marking again succeeds and changes nothing
    let second = app.request("POST", &path, None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::OK);

    let my_books = app.request("GET", "/my-books", None, Some(&token)).await;
    let books = my_books.body.as_array().unwrap();
    assert!(books[0]["is_read"].as_bool().unwrap());
}

#[tokio::test]
async fn test_mark_read_not_owned() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("lib-notowned@example.com", "password123")
        .await;
    let book_id = app.find_book_id(false).await;

    let response = app
        .request(
            "POST",
            &format!("/books/{}/mark-read", book_id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_my_books_acquisition_order() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("lib-order@example.com", "password123")
        .await;

    // Acquire every free book, remembering the order
    let catalog = app.request("GET", "/books", None, None).await;
    let free_ids: Vec<i64> = catalog
        .body
        .as_array()
        .unwrap()
        .iter()
        .filter(|b| b["is_premium"].as_bool() == Some(false))
        .filter_map(|b| b["id"].as_i64())
        .collect();
    assert!(free_ids.len() >= 2);

    for id in &free_ids {
        let added = app
            .request(
                "POST",
                &format!("/books/{}/add-to-library", id),
                None,
                Some(&token),
            )
            .await;
        assert_eq!(added.status, StatusCode::OK);
    }

    let my_books = app.request("GET", "/my-books", None, Some(&token)).await;
    let listed: Vec<i64> = my_books
        .body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|b| b["id"].as_i64())
        .collect();

    assert_eq!(listed, free_ids);
}

#[tokio::test]
async fn test_library_requires_auth() {
    let app = helpers::TestApp::new().await;
    let book_id = app.find_book_id(false).await;

    let add = app
        .request(
            "POST",
            &format!("/books/{}/add-to-library", book_id),
            None,
            None,
        )
        .await;
    assert_eq!(add.status, StatusCode::UNAUTHORIZED);

    let list = app.request("GET", "/my-books", None, None).await;
    assert_eq!(list.status, StatusCode::UNAUTHORIZED);
}
