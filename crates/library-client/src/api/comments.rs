//! Comment endpoints, nested under their book:
//! - GET /api/books/{bookId}/comments
//! - POST /api/books/{bookId}/comments
//! - DELETE /api/books/{bookId}/comments/{commentId}

use library_core::{Ack, BookId, Comment, CommentId, Envelope, NewComment};
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Fetch a book's comments. Resolves to an empty list without a request when
/// `book_id` is absent (a book being created has no comments).
pub async fn fetch_comments(
    client: &ApiClient,
    book_id: Option<BookId>,
) -> ClientResult<Vec<Comment>> {
    let Some(book_id) = book_id else {
        return Ok(Vec::new());
    };

    let request = client.request(Method::GET, &format!("/api/books/{}/comments", book_id))?;
    client.send(request).await
}

/// Post a comment on `comment.book_id`.
pub async fn add_comment(
    client: &ApiClient,
    comment: &NewComment,
) -> ClientResult<Envelope<Comment>> {
    let request = client
        .request(
            Method::POST,
            &format!("/api/books/{}/comments", comment.book_id),
        )?
        .json(comment);
    let response: Envelope<Comment> = client.send(request).await?;
    tracing::info!(book_id = %comment.book_id, "comment added");
    Ok(response)
}

/// Delete one comment of a book.
pub async fn delete_comment(
    client: &ApiClient,
    book_id: BookId,
    comment_id: CommentId,
) -> ClientResult<Ack> {
    let request = client.request(
        Method::DELETE,
        &format!("/api/books/{}/comments/{}", book_id, comment_id),
    )?;
    let response: Ack = client.send(request).await?;
    tracing::info!(%book_id, %comment_id, "comment deleted");
    Ok(response)
}
