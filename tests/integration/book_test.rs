//! Integration tests for catalog browsing.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_list_books_returns_catalog() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/books", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let books = response.body.as_array().expect("Expected array");
    assert!(books.len() >= 5);

    // Stable id ordering
    let ids: Vec<i64> = books.iter().filter_map(|b| b["id"].as_i64()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);

    for book in books {
        assert!(book.get("title").is_some());
        assert!(book.get("author").is_some());
        assert!(book.get("is_premium").is_some());
    }
}

#[tokio::test]
async fn test_list_books_pagination() {
    let app = helpers::TestApp::new().await;

    let first = app.request("GET", "/books?limit=2", None, None).await;
    assert_eq!(first.status, StatusCode::OK);
    let first_page = first.body.as_array().expect("Expected array");
    assert_eq!(first_page.len(), 2);

    let second = app
        .request("GET", "/books?skip=2&limit=2", None, None)
        .await;
    assert_eq!(second.status, StatusCode::OK);
    let second_page = second.body.as_array().expect("Expected array");
    assert_eq!(second_page.len(), 2);

    // Windows must not overlap
    let first_ids: Vec<i64> = first_page.iter().filter_map(|b| b["id"].as_i64()).collect();
    let second_ids: Vec<i64> = second_page
        .iter()
        .filter_map(|b| b["id"].as_i64())
        .collect();
    assert!(first_ids.iter().all(|id| !second_ids.contains(id)));
}

#[tokio::test]
async fn test_get_book_by_id() {
    let app = helpers::TestApp::new().await;
    let book_id = app.find_book_id(false).await;

    let response = app
        .request("GET", &format!("/books/{}", book_id), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("id").unwrap().as_i64().unwrap(), book_id);
    assert!(!response.body.get("is_premium").unwrap().as_bool().unwrap());
}

#[tokio::test]
async fn test_get_book_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/books/999999", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_catalog_is_public() {
    let app = helpers::TestApp::new().await;

    // No Authorization header on either endpoint
    let list = app.request("GET", "/books", None, None).await;
    assert_eq!(list.status, StatusCode::OK);

    let plans = app.request("GET", "/subscription-plans", None, None).await;
    assert_eq!(plans.status, StatusCode::OK);
}
