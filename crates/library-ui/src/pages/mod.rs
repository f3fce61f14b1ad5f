//! Page controllers and the initialization pipeline they share.
//!
//! Every page runs the same sequence through [`PageLoader::run`]:
//!
//! ```text
//! loading --> rendering --> ready
//!    \                     ^
//!     `----> error -------'
//! ```
//!
//! 1. Show the progress indicator and record the start time.
//! 2. Join all of the page's fetches with the minimum loader delay. Any
//!    failing fetch fails the whole join and nothing is rendered.
//! 3. Render each data category in a fixed order, then wire the handlers
//!    for the page's mode.
//! 4. On failure, log it and show exactly one localized error notification.
//! 5. Always hide the loader and reveal the content.
//!
//! Pages never touch a document directly; each is generic over a view trait
//! so the same controller drives the terminal front end and test recorders.

pub mod authors_list;
pub mod book_edit;
pub mod book_view;
pub mod books_list;
pub mod genres_list;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use library_client::{ClientError, ClientResult, LibraryApi};
use tokio::time::Instant;

use crate::i18n::{MessageKey, Messages};
use crate::notify::NotificationCenter;
use crate::util::delay_loader;

pub use authors_list::{AuthorsListPage, AuthorsListView};
pub use book_edit::{BookEditMode, BookEditPage, BookEditView};
pub use book_view::{BookViewPage, BookViewView};
pub use books_list::{BooksListPage, BooksListView};
pub use genres_list::{GenresListPage, GenresListView};

/// Progress shown as soon as a page starts loading.
pub const PROGRESS_START: u8 = 30;

/// Progress once every fetch has resolved.
pub const PROGRESS_FETCHED: u8 = 60;

/// Progress when a page is fully rendered and wired.
pub const PROGRESS_DONE: u8 = 100;

// ============================================================================
// Shared view surface
// ============================================================================

/// Loading indicator and content container common to every page.
pub trait LoaderView {
    /// Move the progress bar to `percent`.
    fn set_progress(&mut self, percent: u8);

    /// Fade out and hide the loading indicator.
    fn hide_loader(&mut self);

    /// Make the content container visible.
    fn reveal_content(&mut self);
}

/// Interactive handlers a page can attach once rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    AddBook,
    SaveBook,
    DeleteBook,
    DeleteComment,
    AddComment,
}

// ============================================================================
// Pipeline
// ============================================================================

/// Lifecycle state of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    Loading,
    Rendering,
    Error,
    Ready,
}

/// Why a page failed to load.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// One of the joint fetches failed.
    #[error(transparent)]
    Fetch(#[from] ClientError),

    /// The fetched data cannot be rendered (e.g. the requested book is gone).
    #[error("cannot render page: {0}")]
    Render(String),
}

/// A page that can be driven through the initialization pipeline.
pub trait Page {
    /// Everything the page fetches before rendering.
    type Data;

    /// Name used in logs.
    const NAME: &'static str;

    /// Issue all of the page's fetches concurrently and join them.
    fn fetch(&self) -> impl Future<Output = ClientResult<Self::Data>>;

    /// Render `data` in a fixed order and wire the handlers.
    fn render(&mut self, data: Self::Data) -> Result<(), PageError>;

    /// The page's loader and content container.
    fn loader(&mut self) -> &mut dyn LoaderView;
}

/// Result of one pipeline run.
#[derive(Debug)]
pub struct PageLoad {
    /// Every state the page went through, in order. Always ends in `Ready`.
    pub trail: Vec<PageState>,
    /// Time from start to content reveal.
    pub elapsed: Duration,
    /// The failure, if the error path was taken.
    pub error: Option<PageError>,
}

impl PageLoad {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs pages through the loading pipeline.
#[derive(Debug, Clone)]
pub struct PageLoader {
    loader_min: Duration,
    notifier: NotificationCenter,
    messages: Messages,
}

impl PageLoader {
    pub fn new(loader_min: Duration, notifier: NotificationCenter, messages: Messages) -> Self {
        Self {
            loader_min,
            notifier,
            messages,
        }
    }

    /// Load, render and reveal `page`.
    pub async fn run<P: Page>(&self, page: &mut P) -> PageLoad {
        let start = Instant::now();
        let mut trail = vec![PageState::Loading];
        tracing::debug!(page = P::NAME, "loading");
        page.loader().set_progress(PROGRESS_START);

        let result = self.load(page, start, &mut trail).await;

        let error = match result {
            Ok(()) => None,
            Err(e) => {
                trail.push(PageState::Error);
                tracing::error!(page = P::NAME, error = %e, "failed to initialize page");
                self.notifier.error(self.messages.get(MessageKey::LoadData));
                Some(e)
            }
        };

        let loader = page.loader();
        loader.hide_loader();
        loader.reveal_content();
        trail.push(PageState::Ready);

        let elapsed = start.elapsed();
        tracing::debug!(page = P::NAME, ?elapsed, ok = error.is_none(), "ready");
        PageLoad {
            trail,
            elapsed,
            error,
        }
    }

    async fn load<P: Page>(
        &self,
        page: &mut P,
        start: Instant,
        trail: &mut Vec<PageState>,
    ) -> Result<(), PageError> {
        let min_delay = async {
            delay_loader(self.loader_min, start).await;
            Ok::<(), ClientError>(())
        };
        let (data, ()) = tokio::try_join!(page.fetch(), min_delay)?;

        trail.push(PageState::Rendering);
        tracing::debug!(page = P::NAME, "rendering");
        page.loader().set_progress(PROGRESS_FETCHED);
        page.render(data)?;
        page.loader().set_progress(PROGRESS_DONE);
        Ok(())
    }
}

// ============================================================================
// Controller plumbing
// ============================================================================

/// Dependencies every page controller holds.
pub struct PageContext<A> {
    pub api: Arc<A>,
    pub notifier: NotificationCenter,
    pub messages: Messages,
}

impl<A> Clone for PageContext<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            notifier: self.notifier.clone(),
            messages: self.messages,
        }
    }
}

impl<A: LibraryApi> PageContext<A> {
    pub fn new(api: Arc<A>, notifier: NotificationCenter, messages: Messages) -> Self {
        Self {
            api,
            notifier,
            messages,
        }
    }

    /// Log a failed handler and surface it to the user.
    pub(crate) fn report_failure(&self, action: &str, error: &ClientError) {
        tracing::error!(action, error = %error, "action failed");
        self.notifier.report(error);
    }
}

/// What a handler invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The request succeeded and the view was updated.
    Completed,
    /// The form failed its constraints; nothing was sent.
    Invalid,
    /// The user declined the confirmation prompt; nothing was sent.
    Declined,
    /// The request failed; the error was surfaced as notifications.
    Failed,
    /// The handler is not wired in the page's current state.
    Unavailable,
}

#[cfg(test)]
pub(crate) mod testing;
