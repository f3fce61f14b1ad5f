//! Command implementations and the session they share.

pub mod books;
pub mod comments;
pub mod open;

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use library_client::ApiClient;
use library_ui::pages::PageContext;
use library_ui::{
    ActionOutcome, AppConfig, Messages, NotificationCenter, Page, PageError, PageLoader,
};

use crate::terminal::TerminalNotifications;

/// A failure the user has already seen as a notification. The process
/// exits non-zero without printing it again.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct AlreadyReported(pub String);

/// Backend client, notification center and page loader for one invocation.
pub struct Session {
    pub ctx: PageContext<ApiClient>,
    pub loader: PageLoader,
}

impl Session {
    pub fn connect(config: &AppConfig) -> Result<Self> {
        let api = ApiClient::new(&config.base_url)
            .with_context(|| format!("cannot use backend URL {}", config.base_url))?;
        let notifier =
            NotificationCenter::with_display(config.notification_timeout, TerminalNotifications);
        let messages = Messages::new(config.locale);
        tracing::debug!(base_url = %api.base_url(), "backend client ready");

        Ok(Self {
            loader: PageLoader::new(config.loader_min, notifier.clone(), messages),
            ctx: PageContext::new(Arc::new(api), notifier, messages),
        })
    }

    /// Run `page` through the loading pipeline; a failed load is an error.
    pub async fn load<P: Page>(&self, page: &mut P) -> Result<()> {
        let load = self.loader.run(page).await;
        load_result(P::NAME, load.error)
    }
}

/// The pipeline has already logged the failure and shown its notification.
fn load_result(page: &str, error: Option<PageError>) -> Result<()> {
    match error {
        Some(e) => Err(AlreadyReported(format!("cannot load {}: {}", page, e)).into()),
        None => Ok(()),
    }
}

/// Map a handler outcome onto the process result.
pub fn finish(action: &str, outcome: ActionOutcome) -> Result<()> {
    match outcome {
        ActionOutcome::Completed => Ok(()),
        ActionOutcome::Declined => {
            eprintln!("Aborted.");
            Ok(())
        }
        ActionOutcome::Invalid => {
            Err(AlreadyReported(format!("{}: the form is invalid", action)).into())
        }
        ActionOutcome::Failed => Err(AlreadyReported(format!("{} failed", action)).into()),
        ActionOutcome::Unavailable => bail!("{} is not available on this page", action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_outcomes() {
        assert!(finish("delete book", ActionOutcome::Completed).is_ok());
        assert!(finish("delete book", ActionOutcome::Declined).is_ok());

        let err = finish("add book", ActionOutcome::Invalid).unwrap_err();
        assert_eq!(err.to_string(), "add book: the form is invalid");
        assert!(err.is::<AlreadyReported>());

        let err = finish("add book", ActionOutcome::Failed).unwrap_err();
        assert!(err.is::<AlreadyReported>());

        let err = finish("add comment", ActionOutcome::Unavailable).unwrap_err();
        assert!(!err.is::<AlreadyReported>());
    }

    #[test]
    fn test_failed_load_is_not_reported_twice() {
        assert!(load_result("book-view", None).is_ok());

        let err = load_result("book-view", Some(PageError::Render("Book not found".to_string())))
            .unwrap_err();
        assert!(err.is::<AlreadyReported>());
        assert!(err.to_string().contains("book-view"));
    }
}
