//! Request path to page mapping.

use std::fmt;

use library_core::BookId;

/// A page the client can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    BooksList,
    BookView(BookId),
    BookCreate,
    BookEdit(BookId),
    AuthorsList,
    GenresList,
    NotFound,
}

impl Route {
    /// Resolve a request path. Query strings, fragments and a trailing slash
    /// are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["books"] => Self::BooksList,
            ["books", "new"] => Self::BookCreate,
            ["books", id] => id.parse().map_or(Self::NotFound, Self::BookView),
            ["books", id, "edit"] => id.parse().map_or(Self::NotFound, Self::BookEdit),
            ["authors"] => Self::AuthorsList,
            ["genres"] => Self::GenresList,
            _ => Self::NotFound,
        }
    }

    /// The book ID a route is about, if any.
    pub fn book_id(self) -> Option<BookId> {
        match self {
            Self::BookView(id) | Self::BookEdit(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BooksList => f.write_str("/"),
            Self::BookView(id) => write!(f, "/books/{}", id),
            Self::BookCreate => f.write_str("/books/new"),
            Self::BookEdit(id) => write!(f, "/books/{}/edit", id),
            Self::AuthorsList => f.write_str("/authors"),
            Self::GenresList => f.write_str("/genres"),
            Self::NotFound => f.write_str("/404"),
        }
    }
}
