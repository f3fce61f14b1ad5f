//! library-ui: page controllers for the library catalog client.
//!
//! This crate provides:
//! - [`PageLoader`], the shared initialization pipeline every page runs
//! - Controllers for the books, authors and genres lists and the book view
//!   and edit pages, each generic over its own view trait
//! - [`NotificationCenter`] for timed, dismissible notifications
//! - [`Messages`] for localized UI strings
//! - [`Route`] mapping request paths to pages
//! - [`AppConfig`] loaded from the environment

pub mod config;
pub mod forms;
pub mod i18n;
pub mod notify;
pub mod pages;
pub mod router;
pub mod util;

pub use config::{AppConfig, ConfigError};
pub use forms::{BookForm, CommentForm};
pub use i18n::{Locale, MessageKey, Messages};
pub use notify::{
    Notification, NotificationCenter, NotificationDisplay, NotificationHandle, Severity,
};
pub use pages::{ActionOutcome, Handler, LoaderView, Page, PageError, PageLoad, PageLoader};
pub use router::Route;
pub use util::book_id_from_path;
