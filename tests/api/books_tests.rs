//! Book API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::*;

/// Creating a finished book returns 201 with the full record
#[tokio::test]
async fn test_add_book_returns_created_record() {
    let app = TestApp::new();

    let response = app.post_json("/books", &book_payload().to_string()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Buku berhasil ditambahkan");

    let data = &body["data"];
    assert_eq!(data["bookId"], data["id"]);
    assert_eq!(data["id"].as_str().unwrap().len(), 16);
    assert_eq!(data["name"], "A");
    assert_eq!(data["year"], 2020);
    assert_eq!(data["pageCount"], 100);
    assert_eq!(data["readPage"], 100);
    assert_eq!(data["finished"], true);
    assert_eq!(data["reading"], false);
    assert_eq!(data["insertedAt"], data["updatedAt"]);
}

/// Unfinished books are reported as such
#[tokio::test]
async fn test_add_book_with_unread_pages_is_not_finished() {
    let app = TestApp::new();
    let mut payload = fake_book_payload();
    payload["readPage"] = json!(0);

    let response = app.post_json("/books", &payload.to_string()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert_eq!(body["data"]["finished"], false);
}

#[test_case(json!({ "year": 2020, "pageCount": 10, "readPage": 5 }), "Gagal menambahkan buku. Mohon isi nama buku" ; "missing name")]
#[test_case(json!({ "name": "", "pageCount": 10, "readPage": 5 }), "Gagal menambahkan buku. Mohon isi nama buku" ; "empty name")]
#[test_case(json!({ "name": "A", "pageCount": 50, "readPage": 60 }), "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount" ; "read page exceeds page count")]
#[test_case(json!({ "name": "A", "year": 2020, "pageCount": 50, "readPage": "60abc" }), "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount" ; "parsed read page exceeds page count")]
#[test_case(json!({ "name": "A", "year": 2020, "pageCount": 10, "readPage": "0x1F" }), "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount" ; "hex read page exceeds page count")]
#[test_case(json!({ "name": "A", "year": 2020, "pageCount": 10, "readPage": "inf" }), "ReadPage harus berupa bilangan bulat" ; "inf read page")]
#[test_case(json!({ "name": "A", "year": "soon", "pageCount": 10, "readPage": 5 }), "Gagal menambahkan buku. Tahun harus berupa angka bulat" ; "invalid year")]
#[test_case(json!({ "name": "A", "year": 2020, "pageCount": "many", "readPage": 5 }), "PageCount harus berupa bilangan bulat" ; "invalid page count")]
#[test_case(json!({ "name": "A", "year": 2020, "pageCount": 10 }), "ReadPage harus berupa bilangan bulat" ; "missing read page")]
#[tokio::test]
async fn test_add_book_validation(payload: Value, message: &str) {
    let app = TestApp::new();

    let response = app.post_json("/books", &payload.to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body, json!({ "status": "fail", "message": message }));

    // Nothing was stored
    let list = json_body(app.get("/books").await).await;
    assert_eq!(list["data"]["books"], json!([]));
}

/// Years beyond the 64-bit range are stored at the bound
#[tokio::test]
async fn test_add_book_with_huge_year_saturates() {
    let app = TestApp::new();
    let mut payload = book_payload();
    payload["year"] = json!("99999999999999999999");

    let id = app.create_book(&payload).await;

    let body = json_body(app.get(&format!("/books/{}", id)).await).await;
    assert_eq!(body["data"]["book"]["year"], json!(i64::MAX));
}

/// Create and fetch describe the record the same way
#[tokio::test]
async fn test_create_and_get_return_same_record() {
    let app = TestApp::new();

    let created = json_body(app.post_json("/books", &book_payload().to_string()).await).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let fetched = json_body(app.get(&format!("/books/{}", id)).await).await;
    assert_eq!(fetched["data"]["book"], created["data"]);
}

/// Listing an empty shelf still succeeds
#[tokio::test]
async fn test_get_all_books_empty() {
    let app = TestApp::new();

    let response = app.get("/books").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body, json!({ "status": "success", "data": { "books": [] } }));
}

/// Listing projects id, name and publisher in insertion order
#[tokio::test]
async fn test_get_all_books_projection() {
    let app = TestApp::new();
    let first = fake_book_payload();
    let second = fake_book_payload();
    let first_id = app.create_book(&first).await;
    let second_id = app.create_book(&second).await;

    let body = json_body(app.get("/books").await).await;
    assert_eq!(
        body["data"]["books"],
        json!([
            { "id": first_id, "name": first["name"], "publisher": first["publisher"] },
            { "id": second_id, "name": second["name"], "publisher": second["publisher"] },
        ])
    );
}

/// Create then fetch returns every submitted field
#[tokio::test]
async fn test_get_book_by_id_round_trip() {
    let app = TestApp::new();
    let payload = fake_book_payload();
    let id = app.create_book(&payload).await;

    let response = app.get(&format!("/books/{}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "success");
    let book = &body["data"]["book"];
    assert_eq!(book["id"], json!(id));
    assert_eq!(book["bookId"], json!(id));
    for field in [
        "name", "year", "author", "summary", "publisher", "pageCount", "readPage", "reading",
    ] {
        assert_eq!(book[field], payload[field], "field {}", field);
    }
    assert_eq!(book["finished"], json!(payload["readPage"] == payload["pageCount"]));
    assert!(book["insertedAt"].is_string());
    assert!(book["updatedAt"].is_string());
}

#[tokio::test]
async fn test_get_unknown_book_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/books/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({ "status": "fail", "message": "Buku tidak ditemukan" })
    );
}

/// Editing overwrites fields, keeps the identity and recomputes `finished`
#[tokio::test]
async fn test_edit_book() {
    let app = TestApp::new();
    let id = app.create_book(&book_payload()).await;
    let created = json_body(app.get(&format!("/books/{}", id)).await).await;

    let mut update = book_payload();
    update["name"] = json!("Edited");
    update["readPage"] = json!(30);
    update["reading"] = json!(true);

    let response = app
        .put_json(&format!("/books/{}", id), &update.to_string())
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "status": "success", "message": "Buku berhasil diperbarui" })
    );

    let body = json_body(app.get(&format!("/books/{}", id)).await).await;
    let book = &body["data"]["book"];
    assert_eq!(book["id"], json!(id));
    assert_eq!(book["name"], "Edited");
    assert_eq!(book["readPage"], 30);
    assert_eq!(book["reading"], true);
    assert_eq!(book["finished"], false);
    assert_eq!(book["insertedAt"], created["data"]["book"]["insertedAt"]);
}

#[tokio::test]
async fn test_edit_unknown_book_is_not_found() {
    let app = TestApp::new();

    let response = app
        .put_json("/books/does-not-exist", &book_payload().to_string())
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        json!({ "status": "fail", "message": "Gagal memperbarui buku. Id tidak ditemukan" })
    );
}

/// Validation failures are reported before the ID is looked up
#[tokio::test]
async fn test_edit_validation_precedes_lookup() {
    let app = TestApp::new();

    let response = app
        .put_json(
            "/books/does-not-exist",
            &json!({ "pageCount": 50, "readPage": 60 }).to_string(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({ "status": "fail", "message": "Gagal memperbarui buku. Mohon isi nama buku" })
    );

    let response = app
        .put_json(
            "/books/does-not-exist",
            &json!({ "name": "A", "pageCount": 50, "readPage": 60 }).to_string(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["message"],
        "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount"
    );
}

/// Delete succeeds once, then the book is gone
#[tokio::test]
async fn test_delete_book() {
    let app = TestApp::new();
    let id = app.create_book(&book_payload()).await;
    let kept = app.create_book(&fake_book_payload()).await;

    let response = app.delete(&format!("/books/{}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "status": "success", "message": "Buku berhasil dihapus" })
    );

    let response = app.get(&format!("/books/{}", id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.delete(&format!("/books/{}", id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        json!({ "status": "fail", "message": "Buku gagal dihapus. Id tidak ditemukan" })
    );

    let list = json_body(app.get("/books").await).await;
    assert_eq!(list["data"]["books"].as_array().unwrap().len(), 1);
    assert_eq!(list["data"]["books"][0]["id"], json!(kept));
}

/// A body that is not a JSON object gets the generic failure envelope
#[tokio::test]
async fn test_malformed_payload_is_internal_failure() {
    let app = TestApp::new();

    let response = app.post_json("/books", "{not json").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({ "status": "fail", "message": "Terjadi kegagalan pada server" })
    );
}

/// Each application has its own store
#[tokio::test]
async fn test_apps_do_not_share_books() {
    let first = TestApp::new();
    let second = TestApp::new();
    first.create_book(&book_payload()).await;

    let body = json_body(second.get("/books").await).await;
    assert_eq!(body["data"]["books"], json!([]));
}
