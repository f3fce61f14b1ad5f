//! GET /api/genres

use library_core::Genre;
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Fetch every genre.
pub async fn fetch_genres(client: &ApiClient) -> ClientResult<Vec<Genre>> {
    let request = client.request(Method::GET, "/api/genres")?;
    client.send(request).await
}
