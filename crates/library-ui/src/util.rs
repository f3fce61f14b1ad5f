//! Small helpers shared by the pages.

use std::time::Duration;

use library_core::BookId;
use tokio::time::Instant;

/// Default minimum time the loading indicator stays visible.
pub const DEFAULT_LOADER_MIN: Duration = Duration::from_millis(1000);

/// The book ID in a page path: the numeric second segment of
/// `/books/{id}` or `/books/{id}/edit`.
pub fn book_id_from_path(path: &str) -> Option<BookId> {
    path.split('/').nth(2)?.parse::<i64>().ok().map(BookId)
}

/// Sleep until `min` has elapsed since `start`; resolves immediately when it
/// already has.
pub async fn delay_loader(min: Duration, start: Instant) {
    let remaining = min.saturating_sub(start.elapsed());
    if !remaining.is_zero() {
        tokio::time::sleep(remaining).await;
    }
}
