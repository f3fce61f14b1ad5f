//! library-client: REST client for the library catalog backend.
//!
//! This crate provides:
//! - The response normalizer turning non-success responses into [`ApiError`]
//! - One function per REST operation, grouped by resource in [`api`]
//! - The [`LibraryApi`] trait consumed by page controllers, implemented by
//!   the reqwest-backed [`ApiClient`]
//!
//! # Usage
//!
//! ```rust,ignore
//! use library_client::{ApiClient, LibraryApi};
//!
//! let client = ApiClient::new("http://localhost:8080")?;
//! let books = client.fetch_books().await?;
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod response;

pub use client::{ApiClient, LibraryApi};
pub use error::{ApiError, ClientError, ClientResult, API_ERROR, VALIDATION_FAILED};
pub use response::{handle_response, normalize};

// Re-export the data model for downstream crates
pub use library_core;
