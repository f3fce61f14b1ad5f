//! Form state and constraint validation.
//!
//! These are the checks the page template declares on its inputs; a form
//! that fails them is reported back to the view and never submitted.

use library_core::{AuthorId, Book, BookCreate, BookId, BookUpdate, FieldError, GenreId};

use crate::i18n::{MessageKey, Messages};

/// Longest accepted book title, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Longest accepted comment, in characters. The backend also enforces a
/// minimum length; that one is left to its validation response.
pub const COMMENT_MAX_CHARS: usize = 500;

/// Fields of the book edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub id: Option<BookId>,
    pub title: String,
    pub author_id: Option<AuthorId>,
    pub genre_ids: Vec<GenreId>,
}

impl BookForm {
    /// Form pre-filled from an existing book.
    pub fn from_book(book: &Book) -> Self {
        Self {
            id: Some(book.id),
            title: book.title.clone(),
            author_id: book.author.as_ref().map(|a| a.id),
            genre_ids: book.genres.iter().map(|g| g.id).collect(),
        }
    }

    /// Run the input constraints; `Err` lists every violated one.
    pub fn check_validity(&self, messages: &Messages) -> Result<(), Vec<FieldError>> {
        let mut violations = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            violations.push(FieldError::new(
                "title",
                messages.get(MessageKey::ValidationTitleRequired),
            ));
        } else if title.chars().count() > TITLE_MAX_CHARS {
            violations.push(FieldError::new(
                "title",
                messages.format(MessageKey::ValidationTitleSize, &[&TITLE_MAX_CHARS]),
            ));
        }
        if self.author_id.is_none() {
            violations.push(FieldError::new(
                "authorId",
                messages.get(MessageKey::ValidationAuthorRequired),
            ));
        }
        if self.genre_ids.is_empty() {
            violations.push(FieldError::new(
                "genreIds",
                messages.get(MessageKey::ValidationGenresRequired),
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Creation payload; `None` when no author is selected.
    pub fn to_create(&self) -> Option<BookCreate> {
        Some(BookCreate {
            title: self.title.trim().to_string(),
            author_id: self.author_id?,
            genre_ids: self.genre_ids.clone(),
        })
    }

    /// Update payload; `None` when the form has no book ID or author.
    pub fn to_update(&self) -> Option<BookUpdate> {
        Some(BookUpdate {
            id: self.id?,
            title: self.title.trim().to_string(),
            author_id: self.author_id?,
            genre_ids: self.genre_ids.clone(),
        })
    }
}

/// Fields of the add-comment form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentForm {
    pub text: String,
}

impl CommentForm {
    pub fn check_validity(&self, messages: &Messages) -> Result<(), Vec<FieldError>> {
        let text = self.text.trim();
        let message = if text.is_empty() {
            messages.get(MessageKey::ValidationCommentRequired)
        } else if text.chars().count() > COMMENT_MAX_CHARS {
            messages.format(MessageKey::ValidationCommentSize, &[&COMMENT_MAX_CHARS])
        } else {
            return Ok(());
        };
        Err(vec![FieldError::new("text", message)])
    }
}
