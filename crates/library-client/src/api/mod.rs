//! One function per REST operation, grouped by resource.
//!
//! Each function builds a fixed-shape request (method, path with the
//! identifier substituted, JSON body for writes) and hands the response to
//! the normalizer.

pub mod authors;
pub mod books;
pub mod comments;
pub mod genres;
