//! Book endpoints:
//! - GET /api/books
//! - GET /api/books/{id}
//! - POST /api/books
//! - PUT /api/books/{id}
//! - DELETE /api/books/{id}

use library_core::{Ack, Book, BookCreate, BookId, BookUpdate, Envelope};
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Fetch the whole catalog.
pub async fn fetch_books(client: &ApiClient) -> ClientResult<Vec<Book>> {
    let request = client.request(Method::GET, "/api/books")?;
    client.send(request).await
}

/// Fetch one book. Resolves to `None` without a request when `id` is absent.
pub async fn fetch_book(client: &ApiClient, id: Option<BookId>) -> ClientResult<Option<Book>> {
    let Some(id) = id else {
        return Ok(None);
    };

    let request = client.request(Method::GET, &format!("/api/books/{}", id))?;
    client.send(request).await.map(Some)
}

/// Create a book.
pub async fn add_book(client: &ApiClient, book: &BookCreate) -> ClientResult<Envelope<Book>> {
    let request = client.request(Method::POST, "/api/books")?.json(book);
    let response: Envelope<Book> = client.send(request).await?;
    tracing::info!(title = %book.title, "book created");
    Ok(response)
}

/// Replace a book's title, author and genres.
pub async fn save_book(client: &ApiClient, book: &BookUpdate) -> ClientResult<Envelope<Book>> {
    let request = client
        .request(Method::PUT, &format!("/api/books/{}", book.id))?
        .json(book);
    let response: Envelope<Book> = client.send(request).await?;
    tracing::info!(book_id = %book.id, "book updated");
    Ok(response)
}

/// Delete a book. Resolves to `None` without a request when `id` is absent.
pub async fn delete_book(client: &ApiClient, id: Option<BookId>) -> ClientResult<Option<Ack>> {
    let Some(id) = id else {
        return Ok(None);
    };

    let request = client.request(Method::DELETE, &format!("/api/books/{}", id))?;
    let response: Ack = client.send(request).await?;
    tracing::info!(book_id = %id, "book deleted");
    Ok(Some(response))
}
