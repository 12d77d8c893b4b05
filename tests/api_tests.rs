//! API integration tests against an in-process server backed by an isolated
//! in-memory database.

mod common;

use common::TestHarness;
use liblend_server::models::{CreateBook, CreateUser};
use reqwest::Client;
use serde_json::Value;

fn user(username: &str, fullname: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        fullname: fullname.to_string(),
    }
}

fn book(title: &str, firstauthor: &str, isbn: &str) -> CreateBook {
    CreateBook {
        title: title.to_string(),
        firstauthor: firstauthor.to_string(),
        isbn: isbn.to_string(),
    }
}

#[tokio::test]
async fn create_user_returns_record_with_id() {
    let (h, addr) = TestHarness::with_server().await;
    let client = Client::new();

    for (username, fullname) in [
        ("test_user1", "Test User One"),
        ("test_user2", "Test User Two"),
        ("test_user3", "Test User Three"),
    ] {
        let response = client
            .post(format!("http://{}/users/", addr))
            .query(&[("username", username), ("fullname", fullname)])
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 200);

        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["username"], username);
        assert_eq!(body["fullname"], fullname);
        assert!(body["id"].as_i64().is_some());

        // The row must be retrievable by username afterwards
        let stored = h
            .repository
            .users
            .get_by_username(username)
            .await
            .unwrap();
        assert!(stored.is_some());
    }
}

#[tokio::test]
async fn create_user_with_duplicate_username_conflicts() {
    let (_h, addr) = TestHarness::with_server().await;
    let client = Client::new();

    let params = [("username", "duplicate_user"), ("fullname", "First")];
    let response = client
        .post(format!("http://{}/users/", addr))
        .query(&params)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .post(format!("http://{}/users/", addr))
        .query(&[("username", "duplicate_user"), ("fullname", "Second")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
async fn create_user_without_username_is_unprocessable() {
    let (_h, addr) = TestHarness::with_server().await;
    let client = Client::new();

    let response = client
        .post(format!("http://{}/users/", addr))
        .query(&[("fullname", "No Name")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn create_book_returns_record_with_id() {
    let (h, addr) = TestHarness::with_server().await;
    let client = Client::new();

    for (title, firstauthor, isbn) in [
        ("Test Book Title 1", "Author One", "1234567890"),
        ("Test Book Title 2", "Author Two", "0987654321"),
        ("Test Book Title 3", "Author Three", "1122334455"),
    ] {
        let response = client
            .post(format!("http://{}/books/", addr))
            .query(&[("title", title), ("firstauthor", firstauthor), ("isbn", isbn)])
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 200);

        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["title"], title);
        assert_eq!(body["firstauthor"], firstauthor);
        assert_eq!(body["isbn"], isbn);
        assert!(body["id"].as_i64().is_some());

        // The row must be retrievable by isbn afterwards
        let stored = h.repository.books.get_by_isbn(isbn).await.unwrap();
        assert!(stored.is_some());
    }
}

#[tokio::test]
async fn create_book_with_duplicate_isbn_conflicts() {
    let (_h, addr) = TestHarness::with_server().await;
    let client = Client::new();

    let response = client
        .post(format!("http://{}/books/", addr))
        .query(&[
            ("title", "Original"),
            ("firstauthor", "Author"),
            ("isbn", "5554443331"),
        ])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .post(format!("http://{}/books/", addr))
        .query(&[
            ("title", "Copycat"),
            ("firstauthor", "Other Author"),
            ("isbn", "5554443331"),
        ])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
async fn create_borrow_entry_links_user_and_book() {
    let (h, addr) = TestHarness::with_server().await;
    let client = Client::new();

    let u = h
        .repository
        .users
        .create(&user("test_user4", "Test User Four"))
        .await
        .unwrap();
    let b = h
        .repository
        .books
        .create(&book("Test Book for Borrowing", "Author Four", "4455667788"))
        .await
        .unwrap();

    let response = client
        .post(format!("http://{}/borrowlist/", addr))
        .query(&[("user_id", u.id), ("book_id", b.id)])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["user_id"], u.id);
    assert_eq!(body["book_id"], b.id);

    let stored = h
        .repository
        .borrows
        .get_by_user_and_book(u.id, b.id)
        .await
        .unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn create_borrow_entry_with_unknown_ids_is_rejected() {
    let (h, addr) = TestHarness::with_server().await;
    let client = Client::new();

    // Neither user nor book exists
    let response = client
        .post(format!("http://{}/borrowlist/", addr))
        .query(&[("user_id", 777_i64), ("book_id", 888_i64)])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Existing user, missing book
    let u = h
        .repository
        .users
        .create(&user("orphan_borrower", "Orphan Borrower"))
        .await
        .unwrap();

    let response = client
        .post(format!("http://{}/borrowlist/", addr))
        .query(&[("user_id", u.id), ("book_id", 888_i64)])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn create_borrow_entry_without_ids_is_unprocessable() {
    let (_h, addr) = TestHarness::with_server().await;
    let client = Client::new();

    let response = client
        .post(format!("http://{}/borrowlist/", addr))
        .query(&[("user_id", 1_i64)])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn get_borrowlist_returns_entries_for_user() {
    let (h, addr) = TestHarness::with_server().await;
    let client = Client::new();

    let u = h
        .repository
        .users
        .create(&user("test_user5", "Test User Five"))
        .await
        .unwrap();
    let b = h
        .repository
        .books
        .create(&book("Borrowed Book", "Author Five", "5566778899"))
        .await
        .unwrap();

    let response = client
        .post(format!("http://{}/borrowlist/", addr))
        .query(&[("user_id", u.id), ("book_id", b.id)])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("http://{}/borrowlist/{}", addr, u.id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    let entries = body.as_array().expect("Response should be an array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["user_id"], u.id);
    assert_eq!(entries[0]["book_id"], b.id);
}

#[tokio::test]
async fn get_borrowlist_for_user_without_borrows_is_not_found() {
    let (h, addr) = TestHarness::with_server().await;
    let client = Client::new();

    // Existing user, zero borrows
    let u = h
        .repository
        .users
        .create(&user("idle_user", "Idle User"))
        .await
        .unwrap();

    let response = client
        .get(format!("http://{}/borrowlist/{}", addr, u.id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["detail"],
        "User not found or no book being borrowed by the user"
    );

    // Unknown user yields the same response
    let response = client
        .get(format!("http://{}/borrowlist/424242", addr))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["detail"],
        "User not found or no book being borrowed by the user"
    );
}

#[tokio::test]
async fn delete_user_cascades_borrow_entries() {
    let (h, addr) = TestHarness::with_server().await;
    let client = Client::new();

    let u = h
        .repository
        .users
        .create(&user("test_user6", "Test User Six"))
        .await
        .unwrap();
    let b = h
        .repository
        .books
        .create(&book("Book for Deletion Test", "Author Six", "6677889900"))
        .await
        .unwrap();
    h.repository.borrows.create(u.id, b.id).await.unwrap();

    let response = client
        .delete(format!("http://{}/users/{}", addr, u.id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // User lookup now misses
    let response = client
        .get(format!("http://{}/users/{}", addr, u.id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    // Borrow lookup now misses too
    let response = client
        .get(format!("http://{}/borrowlist/{}", addr, u.id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM borrowlist WHERE user_id = ?1")
        .bind(u.id)
        .fetch_one(&h.pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn delete_book_cascades_borrow_entries() {
    let (h, addr) = TestHarness::with_server().await;
    let client = Client::new();

    let u = h
        .repository
        .users
        .create(&user("test_user7", "Test User Seven"))
        .await
        .unwrap();
    let b = h
        .repository
        .books
        .create(&book("Withdrawn Book", "Author Seven", "7788990011"))
        .await
        .unwrap();
    h.repository.borrows.create(u.id, b.id).await.unwrap();

    let response = client
        .delete(format!("http://{}/books/{}", addr, b.id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("http://{}/books/{}", addr, b.id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM borrowlist WHERE book_id = ?1")
        .bind(b.id)
        .fetch_one(&h.pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn get_user_by_id() {
    let (h, addr) = TestHarness::with_server().await;
    let client = Client::new();

    let u = h
        .repository
        .users
        .create(&user("lookup_user", "Lookup User"))
        .await
        .unwrap();

    let response = client
        .get(format!("http://{}/users/{}", addr, u.id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], u.id);
    assert_eq!(body["username"], "lookup_user");
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let (_h, addr) = TestHarness::with_server().await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}
