//! Test doubles shared by the page controller tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use library_client::{API_ERROR, ApiError, ClientError, ClientResult, LibraryApi};
use library_core::{
    Ack, Author, AuthorId, Book, BookCreate, BookId, BookUpdate, Comment, CommentId, Envelope,
    Genre, GenreId, NewComment,
};

use crate::i18n::Messages;
use crate::notify::NotificationCenter;
use crate::pages::{LoaderView, PageContext, PageLoader};
use crate::util::DEFAULT_LOADER_MIN;

pub fn author(id: i64, name: &str) -> Author {
    Author {
        id: AuthorId(id),
        full_name: name.to_string(),
    }
}

pub fn genre(id: i64, name: &str) -> Genre {
    Genre {
        id: GenreId(id),
        name: name.to_string(),
    }
}

pub fn book(id: i64, title: &str) -> Book {
    Book {
        id: BookId(id),
        title: title.to_string(),
        author: Some(author(1, "Frank Herbert")),
        genres: vec![genre(2, "Sci-Fi")],
    }
}

pub fn comment(id: i64, book_id: i64, text: &str) -> Comment {
    Comment {
        id: CommentId(id),
        text: text.to_string(),
        book_id: Some(BookId(book_id)),
    }
}

pub fn api_error(status: u16, message: &str) -> ApiError {
    ApiError {
        message: message.to_string(),
        error_type: API_ERROR.to_string(),
        status,
        errors: vec![],
    }
}

/// Scripted backend: fixed data, uniform latency, per-operation failures.
#[derive(Default)]
pub struct FakeApi {
    pub books: Vec<Book>,
    pub authors: Vec<Author>,
    pub genres: Vec<Genre>,
    pub comments: Vec<Comment>,
    pub latency: Duration,
    pub failures: HashMap<&'static str, ApiError>,
    pub add_book_response: Option<Envelope<Book>>,
    calls: Mutex<Vec<&'static str>>,
}

impl FakeApi {
    pub fn catalog() -> Self {
        Self {
            books: vec![book(5, "Dune"), book(6, "Solaris")],
            authors: vec![author(1, "Frank Herbert"), author(2, "Stanislaw Lem")],
            genres: vec![genre(2, "Sci-Fi"), genre(3, "Classic")],
            comments: vec![comment(1, 5, "Great read"), comment(2, 5, "Too long")],
            ..Self::default()
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn failing(mut self, operation: &'static str, error: ApiError) -> Self {
        self.failures.insert(operation, error);
        self
    }

    /// Answer `add_book` with `response` instead of the created book.
    pub fn answering_add_book(mut self, response: Envelope<Book>) -> Self {
        self.add_book_response = Some(response);
        self
    }

    /// Operations invoked so far, in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls().iter().filter(|c| **c == operation).count()
    }

    async fn enter(&self, operation: &'static str) -> ClientResult<()> {
        self.calls.lock().unwrap().push(operation);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match self.failures.get(operation) {
            Some(e) => Err(ClientError::Api(e.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LibraryApi for FakeApi {
    async fn fetch_books(&self) -> ClientResult<Vec<Book>> {
        self.enter("fetch_books").await?;
        Ok(self.books.clone())
    }

    // The absent-id guards below mirror `api::books` and `api::comments`;
    // the real guards are exercised against a live server in
    // `library-client/tests/api_client.rs` (`test_absent_ids_skip_network`).
    async fn fetch_book(&self, id: Option<BookId>) -> ClientResult<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        self.enter("fetch_book").await?;
        match self.books.iter().find(|b| b.id == id) {
            Some(b) => Ok(Some(b.clone())),
            None => Err(ClientError::Api(api_error(404, "Book not found"))),
        }
    }

    async fn add_book(&self, book: &BookCreate) -> ClientResult<Envelope<Book>> {
        self.enter("add_book").await?;
        if let Some(response) = &self.add_book_response {
            return Ok(response.clone());
        }
        Ok(Envelope {
            message: Some("Book 11 saved".to_string()),
            data: Some(Book {
                id: BookId(11),
                title: book.title.clone(),
                author: self.authors.iter().find(|a| a.id == book.author_id).cloned(),
                genres: vec![],
            }),
        })
    }

    async fn save_book(&self, book: &BookUpdate) -> ClientResult<Envelope<Book>> {
        self.enter("save_book").await?;
        Ok(Envelope::bare(Book {
            id: book.id,
            title: book.title.clone(),
            author: None,
            genres: vec![],
        }))
    }

    async fn delete_book(&self, id: Option<BookId>) -> ClientResult<Option<Ack>> {
        let Some(id) = id else {
            return Ok(None);
        };
        self.enter("delete_book").await?;
        Ok(Some(Envelope {
            message: Some(format!("Book {} deleted", id)),
            data: None,
        }))
    }

    async fn fetch_authors(&self) -> ClientResult<Vec<Author>> {
        self.enter("fetch_authors").await?;
        Ok(self.authors.clone())
    }

    async fn fetch_genres(&self) -> ClientResult<Vec<Genre>> {
        self.enter("fetch_genres").await?;
        Ok(self.genres.clone())
    }

    async fn fetch_comments(&self, book_id: Option<BookId>) -> ClientResult<Vec<Comment>> {
        let Some(book_id) = book_id else {
            return Ok(Vec::new());
        };
        self.enter("fetch_comments").await?;
        Ok(self
            .comments
            .iter()
            .filter(|c| c.book_id == Some(book_id))
            .cloned()
            .collect())
    }

    async fn add_comment(&self, comment: &NewComment) -> ClientResult<Envelope<Comment>> {
        self.enter("add_comment").await?;
        Ok(Envelope {
            message: Some("ok".to_string()),
            data: Some(Comment {
                id: CommentId(9),
                text: comment.text.clone(),
                book_id: None,
            }),
        })
    }

    async fn delete_comment(&self, _book_id: BookId, comment_id: CommentId) -> ClientResult<Ack> {
        self.enter("delete_comment").await?;
        Ok(Envelope {
            message: Some(format!("Comment {} deleted", comment_id)),
            data: None,
        })
    }
}

/// Ordered record of view mutations, shared between a view and its test.
#[derive(Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    pub fn push(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Entries other than loader bookkeeping.
    pub fn renders(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| !e.starts_with("progress") && e != "hide_loader" && e != "reveal")
            .collect()
    }
}

/// Loader half of a recording view.
pub struct RecordingLoader {
    pub journal: Journal,
    pub revealed_at: Option<tokio::time::Instant>,
}

impl RecordingLoader {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            revealed_at: None,
        }
    }
}

impl LoaderView for RecordingLoader {
    fn set_progress(&mut self, percent: u8) {
        self.journal.push(format!("progress {}", percent));
    }

    fn hide_loader(&mut self) {
        self.journal.push("hide_loader");
    }

    fn reveal_content(&mut self) {
        self.revealed_at = Some(tokio::time::Instant::now());
        self.journal.push("reveal");
    }
}

pub fn context(api: FakeApi) -> (PageContext<FakeApi>, Arc<FakeApi>) {
    let api = Arc::new(api);
    let ctx = PageContext::new(
        Arc::clone(&api),
        NotificationCenter::default(),
        Messages::default(),
    );
    (ctx, api)
}

pub fn loader_for<A>(ctx: &PageContext<A>) -> PageLoader {
    PageLoader::new(DEFAULT_LOADER_MIN, ctx.notifier.clone(), ctx.messages)
}

pub fn notifications(ctx: &PageContext<FakeApi>) -> Vec<String> {
    ctx.notifier
        .active()
        .into_iter()
        .map(|n| format!("{}: {}", n.severity, n.message))
        .collect()
}
