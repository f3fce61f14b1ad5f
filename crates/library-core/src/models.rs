//! Catalog entities returned by the backend.
//!
//! Field names follow the backend's camelCase JSON (`fullName`, `bookId`).
//! All identifiers are numeric and wrapped in newtypes so a book ID cannot be
//! passed where a comment ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

// ============================================================================
// ID Types
// ============================================================================

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Returns the raw numeric value.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

numeric_id!(
    /// Identifier of a book.
    BookId
);
numeric_id!(
    /// Identifier of an author.
    AuthorId
);
numeric_id!(
    /// Identifier of a genre.
    GenreId
);
numeric_id!(
    /// Identifier of a comment.
    CommentId
);

// ============================================================================
// Entities
// ============================================================================

/// A book author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: AuthorId,
    pub full_name: String,
}

/// A literary genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

/// A book with its author and ordered genre list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    /// Some list endpoints omit the author; renderers show a dash instead.
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl Book {
    /// Display name of the author, if one is attached.
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.full_name.as_str())
    }
}

/// A reader comment attached to a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    /// Absent in the payload of some create responses.
    #[serde(default)]
    pub book_id: Option<BookId>,
}

/// A single field-level validation failure.
///
/// `field` is absent for object-level constraint violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub field: Option<String>,
    pub message: String,
}

impl FieldError {
    /// Create a failure bound to a named field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => f.write_str(&self.message),
        }
    }
}
