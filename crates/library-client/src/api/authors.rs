//! GET /api/authors

use library_core::Author;
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Fetch every author.
pub async fn fetch_authors(client: &ApiClient) -> ClientResult<Vec<Author>> {
    let request = client.request(Method::GET, "/api/authors")?;
    client.send(request).await
}
