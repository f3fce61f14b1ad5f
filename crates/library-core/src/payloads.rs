//! Request bodies for the write endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{AuthorId, BookId, GenreId};

/// Request body for POST /api/books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCreate {
    pub title: String,
    pub author_id: AuthorId,
    pub genre_ids: Vec<GenreId>,
}

/// Request body for PUT /api/books/{id}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdate {
    pub id: BookId,
    pub title: String,
    pub author_id: AuthorId,
    pub genre_ids: Vec<GenreId>,
}

/// Request body for POST /api/books/{bookId}/comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub book_id: BookId,
    pub text: String,
}
