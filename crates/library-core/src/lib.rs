//! library-core: data model shared by the library catalog client crates.
//!
//! This crate provides:
//! - Catalog entities (books, authors, genres, comments) with typed IDs
//! - Request payloads for the write endpoints
//! - Field-level validation failures as reported by the backend
//! - The write-response envelope, tolerant of bare-entity responses

pub mod envelope;
pub mod models;
pub mod payloads;

pub use envelope::{Ack, Envelope};
pub use models::*;
pub use payloads::{BookCreate, BookUpdate, NewComment};
