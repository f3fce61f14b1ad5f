//! Client integration tests against an in-process mock backend.
//!
//! Each test starts an axum router on an ephemeral port that mimics the
//! catalog backend's JSON shapes, then drives the real reqwest client at it.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use library_client::{ApiClient, ClientError, LibraryApi, VALIDATION_FAILED};
use library_core::{AuthorId, BookCreate, BookId, BookUpdate, CommentId, GenreId, NewComment};

// ============================================================================
// Mock backend
// ============================================================================

#[derive(Clone, Default)]
struct Backend {
    hits: Arc<AtomicUsize>,
}

impl Backend {
    fn hit(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

fn dune() -> Value {
    json!({
        "id": 3,
        "title": "Dune",
        "author": {"id": 1, "fullName": "Frank Herbert"},
        "genres": [{"id": 2, "name": "Sci-Fi"}]
    })
}

async fn list_books(State(b): State<Backend>) -> Json<Value> {
    b.hit();
    Json(json!([dune()]))
}

async fn get_book(State(b): State<Backend>, Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
    b.hit();
    if id == 3 {
        (StatusCode::OK, Json(dune()))
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({
                "errorText": format!("Book with id {} not found", id),
                "status": 404,
                "exception": "EntityNotFoundException"
            })),
        )
    }
}

async fn create_book(State(b): State<Backend>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    b.hit();
    if body["title"].as_str().unwrap_or_default().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "errorType": "VALIDATION_FAILED",
                "status": 400,
                "path": "/api/books",
                "errors": [{"field": "title", "message": "Title must not be blank", "rejectedValue": ""}]
            })),
        );
    }
    let mut book = dune();
    book["id"] = json!(11);
    book["title"] = body["title"].clone();
    (
        StatusCode::OK,
        Json(json!({"message": "Book 11 saved", "data": book, "success": true})),
    )
}

async fn update_book(
    State(b): State<Backend>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    b.hit();
    let mut book = dune();
    book["id"] = json!(id);
    book["title"] = body["title"].clone();
    // Bare entity, as returned by the older update handler.
    Json(book)
}

async fn remove_book(State(b): State<Backend>, Path(id): Path<i64>) -> Json<Value> {
    b.hit();
    Json(json!({"message": format!("Book {} deleted", id), "data": null, "success": true}))
}

async fn list_authors(State(b): State<Backend>) -> Json<Value> {
    b.hit();
    Json(json!([{"id": 1, "fullName": "Frank Herbert"}, {"id": 2, "fullName": "Stanislaw Lem"}]))
}

async fn list_genres(State(b): State<Backend>) -> (StatusCode, Json<Value>) {
    b.hit();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"errorText": "Internal server error", "status": 500})),
    )
}

async fn list_comments(State(b): State<Backend>, Path(book_id): Path<i64>) -> Json<Value> {
    b.hit();
    Json(json!([{"id": 1, "text": "Great read", "bookId": book_id}]))
}

async fn create_comment(
    State(b): State<Backend>,
    Path(book_id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    b.hit();
    Json(json!({
        "message": "ok",
        "data": {"id": 9, "text": body["text"], "bookId": book_id},
        "success": true
    }))
}

async fn remove_comment(
    State(b): State<Backend>,
    Path((_book_id, comment_id)): Path<(i64, i64)>,
) -> Json<Value> {
    b.hit();
    Json(json!({"message": format!("Comment {} deleted", comment_id), "data": null, "success": true}))
}

async fn spawn_backend() -> (ApiClient, Backend) {
    let backend = Backend::default();
    let app = Router::new()
        .route("/api/books", get(list_books).post(create_book))
        .route(
            "/api/books/{id}",
            get(get_book).put(update_book).delete(remove_book),
        )
        .route("/api/authors", get(list_authors))
        .route("/api/genres", get(list_genres))
        .route(
            "/api/books/{id}/comments",
            get(list_comments).post(create_comment),
        )
        .route(
            "/api/books/{id}/comments/{comment_id}",
            delete(remove_comment),
        )
        .with_state(backend.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = ApiClient::new(&format!("http://{}", addr)).unwrap();
    (client, backend)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_books() {
    let (client, backend) = spawn_backend().await;

    let books = client.fetch_books().await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[0].author_name(), Some("Frank Herbert"));
    assert_eq!(backend.hits(), 1);
}

#[tokio::test]
async fn test_fetch_book_by_id() {
    let (client, _backend) = spawn_backend().await;

    let book = client.fetch_book(Some(BookId(3))).await.unwrap().unwrap();
    assert_eq!(book.id, BookId(3));
    assert_eq!(book.genres[0].name, "Sci-Fi");
}

#[tokio::test]
async fn test_absent_ids_skip_network() {
    let (client, backend) = spawn_backend().await;

    assert!(client.fetch_book(None).await.unwrap().is_none());
    assert!(client.delete_book(None).await.unwrap().is_none());
    assert!(client.fetch_comments(None).await.unwrap().is_empty());

    assert_eq!(backend.hits(), 0);
}

#[tokio::test]
async fn test_not_found_uses_error_text() {
    let (client, _backend) = spawn_backend().await;

    let err = client.fetch_book(Some(BookId(99))).await.unwrap_err();
    let api = err.as_api().expect("typed error");
    assert_eq!(api.status, 404);
    assert_eq!(api.message, "Book with id 99 not found");
    assert_eq!(api.error_type, "API_ERROR");
    assert!(api.errors.is_empty());
}

#[tokio::test]
async fn test_server_error_status_preserved() {
    let (client, _backend) = spawn_backend().await;

    let err = client.fetch_genres().await.unwrap_err();
    assert_eq!(err.as_api().unwrap().status, 500);
    assert_eq!(err.to_string(), "Internal server error");
}

#[tokio::test]
async fn test_add_book_envelope() {
    let (client, _backend) = spawn_backend().await;

    let created = client
        .add_book(&BookCreate {
            title: "Solaris".to_string(),
            author_id: AuthorId(2),
            genre_ids: vec![GenreId(2)],
        })
        .await
        .unwrap();

    assert_eq!(created.message.as_deref(), Some("Book 11 saved"));
    let book = created.data.unwrap();
    assert_eq!(book.id, BookId(11));
    assert_eq!(book.title, "Solaris");
}

#[tokio::test]
async fn test_add_book_validation_failure() {
    let (client, _backend) = spawn_backend().await;

    let err = client
        .add_book(&BookCreate {
            title: String::new(),
            author_id: AuthorId(2),
            genre_ids: vec![GenreId(2)],
        })
        .await
        .unwrap_err();

    let ClientError::Api(api) = err else {
        panic!("expected ApiError");
    };
    assert_eq!(api.error_type, VALIDATION_FAILED);
    assert_eq!(api.status, 400);
    assert_eq!(api.errors.len(), 1);
    assert_eq!(api.errors[0].field.as_deref(), Some("title"));
    assert_eq!(api.errors[0].message, "Title must not be blank");
}

#[tokio::test]
async fn test_save_book_bare_entity() {
    let (client, _backend) = spawn_backend().await;

    let saved = client
        .save_book(&BookUpdate {
            id: BookId(3),
            title: "Dune Messiah".to_string(),
            author_id: AuthorId(1),
            genre_ids: vec![GenreId(2)],
        })
        .await
        .unwrap();

    assert_eq!(saved.message, None);
    assert_eq!(saved.data.unwrap().title, "Dune Messiah");
}

#[tokio::test]
async fn test_delete_book() {
    let (client, backend) = spawn_backend().await;

    let ack = client.delete_book(Some(BookId(3))).await.unwrap().unwrap();
    assert_eq!(ack.message.as_deref(), Some("Book 3 deleted"));
    assert_eq!(backend.hits(), 1);
}

#[tokio::test]
async fn test_fetch_authors() {
    let (client, _backend) = spawn_backend().await;

    let authors = client.fetch_authors().await.unwrap();
    let names: Vec<_> = authors.iter().map(|a| a.full_name.as_str()).collect();
    assert_eq!(names, ["Frank Herbert", "Stanislaw Lem"]);
}

#[tokio::test]
async fn test_comment_round() {
    let (client, backend) = spawn_backend().await;

    let comments = client.fetch_comments(Some(BookId(5))).await.unwrap();
    assert_eq!(comments[0].book_id, Some(BookId(5)));

    let added = client
        .add_comment(&NewComment {
            book_id: BookId(5),
            text: "x".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(added.message.as_deref(), Some("ok"));
    assert_eq!(added.data.unwrap().id, CommentId(9));

    let ack = client
        .delete_comment(BookId(5), CommentId(9))
        .await
        .unwrap();
    assert_eq!(ack.message.as_deref(), Some("Comment 9 deleted"));
    assert_eq!(backend.hits(), 3);
}

#[tokio::test]
async fn test_transport_failure() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{}", addr)).unwrap();
    let err = client.fetch_authors().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
