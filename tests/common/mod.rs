//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::{Sentence, Words};
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf::config::Settings;
use bookshelf::startup::{build_router, AppState};

/// Test application with its own empty book store
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a new test application around a fresh in-memory store
    pub fn new() -> Self {
        let state = AppState::new(Settings::default());
        Self {
            router: build_router(state),
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a DELETE request to the application
    pub async fn delete(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.send(json_request("POST", uri, body)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &str) -> Response {
        self.send(json_request("PUT", uri, body)).await
    }

    /// Create a book and return its ID
    pub async fn create_book(&self, payload: &Value) -> String {
        let response = self.post_json("/books", &payload.to_string()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        body["data"]["id"].as_str().unwrap().to_string()
    }
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON
pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as text
pub async fn text_body(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Canonical valid payload
pub fn book_payload() -> Value {
    json!({
        "name": "A",
        "year": 2020,
        "author": "X",
        "summary": "s",
        "publisher": "P",
        "pageCount": 100,
        "readPage": 100,
        "reading": false
    })
}

/// Valid payload with generated contents
pub fn fake_book_payload() -> Value {
    let page_count: i64 = (100..1000).fake();
    let read_page: i64 = (0..page_count).fake();
    let title: Vec<String> = Words(2..5).fake();

    json!({
        "name": title.join(" "),
        "year": (1900..2025).fake::<i64>(),
        "author": Name().fake::<String>(),
        "summary": Sentence(5..12).fake::<String>(),
        "publisher": CompanyName().fake::<String>(),
        "pageCount": page_count,
        "readPage": read_page,
        "reading": true
    })
}
