//! API integration tests
//!
//! Require a running server with its database; run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Suffix a name with a nanosecond stamp so reruns never collide
fn unique(name: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("Clock before epoch")
        .as_nanos();
    format!("{} {}", name, nanos)
}

async fn create_user(client: &Client, name: &str) -> i64 {
    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({ "name": name, "age": 30 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No user ID")
}

async fn create_book(client: &Client, name: &str) -> i64 {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "name": name, "book_type": "COMPUTER" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No book ID")
}

async fn user_history(client: &Client, user_id: i64) -> Value {
    let response = client
        .get(format!("{}/users/{}/history", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_book_with_blank_name_fails() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "name": "   ", "book_type": "COMPUTER" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_loan_and_return_lifecycle() {
    let client = Client::new();
    let user_name = unique("Alice");
    let book_name = unique("Clean Code");

    let user_id = create_user(&client, &user_name).await;
    create_book(&client, &book_name).await;

    // Loan
    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({ "user_name": user_name, "book_name": book_name }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    // History shows exactly one un-returned entry
    let body = user_history(&client, user_id).await;
    assert_eq!(body["name"], user_name.as_str());
    let books = body["books"].as_array().expect("No books array");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["name"], book_name.as_str());
    assert_eq!(books[0]["is_return"], false);

    // The same title cannot be loaned to anyone else meanwhile
    let other_name = unique("Bob");
    create_user(&client, &other_name).await;

    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({ "user_name": other_name, "book_name": book_name }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);

    // Return
    let response = client
        .post(format!("{}/loans/return", BASE_URL))
        .json(&json!({ "user_name": user_name, "book_name": book_name }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "returned");
    assert_eq!(body["loan"]["is_return"], true);

    // History flips to returned, still a single entry
    let body = user_history(&client, user_id).await;
    let books = body["books"].as_array().expect("No books array");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["is_return"], true);

    // A second return with no new loan fails
    let response = client
        .post(format!("{}/loans/return", BASE_URL))
        .json(&json!({ "user_name": user_name, "book_name": book_name }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_loan_unknown_book_fails() {
    let client = Client::new();
    let user_name = unique("Carol");
    create_user(&client, &user_name).await;

    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({ "user_name": user_name, "book_name": unique("No Such Book") }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_loan_unknown_user_fails() {
    let client = Client::new();
    let book_name = unique("Refactoring");
    create_book(&client, &book_name).await;

    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({ "user_name": unique("Nobody"), "book_name": book_name }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_history_of_user_without_loans_is_empty() {
    let client = Client::new();
    let user_name = unique("Dave");
    let user_id = create_user(&client, &user_name).await;

    let body = user_history(&client, user_id).await;
    assert_eq!(body["name"], user_name.as_str());
    assert_eq!(body["books"].as_array().expect("No books array").len(), 0);
}

#[tokio::test]
#[ignore]
async fn test_rename_and_delete_user() {
    let client = Client::new();
    let user_name = unique("Erin");
    let user_id = create_user(&client, &user_name).await;

    // Blank rename is rejected
    let response = client
        .put(format!("{}/users/{}", BASE_URL, user_id))
        .json(&json!({ "name": "  " }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    // Regular rename succeeds
    let new_name = unique("Erin Renamed");
    let response = client
        .put(format!("{}/users/{}", BASE_URL, user_id))
        .json(&json!({ "name": new_name }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], new_name.as_str());

    // Delete by the new name
    let response = client
        .delete(format!("{}/users", BASE_URL))
        .query(&[("name", new_name.as_str())])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);

    // The history view is gone with the user
    let response = client
        .get(format!("{}/users/{}/history", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_rename_book_revalidates_name() {
    let client = Client::new();
    let book_name = unique("Domain-Driven Design");
    let book_id = create_book(&client, &book_name).await;

    let response = client
        .put(format!("{}/books/{}", BASE_URL, book_id))
        .json(&json!({ "name": "" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
