//! HTTP client handle and the API surface consumed by page controllers.

use async_trait::async_trait;
use library_core::{
    Ack, Author, Book, BookCreate, BookId, BookUpdate, Comment, CommentId, Envelope, Genre,
    NewComment,
};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::api;
use crate::error::{ClientError, ClientResult};
use crate::response::handle_response;

/// Every REST operation the pages use.
///
/// Operations that take an optional identifier resolve without any network
/// I/O when it is absent.
#[async_trait]
pub trait LibraryApi: Send + Sync {
    async fn fetch_books(&self) -> ClientResult<Vec<Book>>;
    async fn fetch_book(&self, id: Option<BookId>) -> ClientResult<Option<Book>>;
    async fn add_book(&self, book: &BookCreate) -> ClientResult<Envelope<Book>>;
    async fn save_book(&self, book: &BookUpdate) -> ClientResult<Envelope<Book>>;
    async fn delete_book(&self, id: Option<BookId>) -> ClientResult<Option<Ack>>;
    async fn fetch_authors(&self) -> ClientResult<Vec<Author>>;
    async fn fetch_genres(&self) -> ClientResult<Vec<Genre>>;
    async fn fetch_comments(&self, book_id: Option<BookId>) -> ClientResult<Vec<Comment>>;
    async fn add_comment(&self, comment: &NewComment) -> ClientResult<Envelope<Comment>>;
    async fn delete_comment(&self, book_id: BookId, comment_id: CommentId) -> ClientResult<Ack>;
}

/// Reqwest-backed client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client for the backend at `base_url`. A path prefix such as
    /// `http://host/library` is kept in front of every endpoint.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Start a request for an endpoint path such as `/api/books`, resolved
    /// under the base URL.
    pub(crate) fn request(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidUrl(format!("{path}: {e}")))?;
        tracing::debug!(%method, %url, "sending request");
        Ok(self.http.request(method, url))
    }

    /// Send a request and normalize its response.
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        handle_response(response).await
    }
}

#[async_trait]
impl LibraryApi for ApiClient {
    async fn fetch_books(&self) -> ClientResult<Vec<Book>> {
        api::books::fetch_books(self).await
    }

    async fn fetch_book(&self, id: Option<BookId>) -> ClientResult<Option<Book>> {
        api::books::fetch_book(self, id).await
    }

    async fn add_book(&self, book: &BookCreate) -> ClientResult<Envelope<Book>> {
        api::books::add_book(self, book).await
    }

    async fn save_book(&self, book: &BookUpdate) -> ClientResult<Envelope<Book>> {
        api::books::save_book(self, book).await
    }

    async fn delete_book(&self, id: Option<BookId>) -> ClientResult<Option<Ack>> {
        api::books::delete_book(self, id).await
    }

    async fn fetch_authors(&self) -> ClientResult<Vec<Author>> {
        api::authors::fetch_authors(self).await
    }

    async fn fetch_genres(&self) -> ClientResult<Vec<Genre>> {
        api::genres::fetch_genres(self).await
    }

    async fn fetch_comments(&self, book_id: Option<BookId>) -> ClientResult<Vec<Comment>> {
        api::comments::fetch_comments(self, book_id).await
    }

    async fn add_comment(&self, comment: &NewComment) -> ClientResult<Envelope<Comment>> {
        api::comments::add_comment(self, comment).await
    }

    async fn delete_comment(&self, book_id: BookId, comment_id: CommentId) -> ClientResult<Ack> {
        api::comments::delete_comment(self, book_id, comment_id).await
    }
}
