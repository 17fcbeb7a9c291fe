//! HTTP client for the transcript extraction service.
//!
//! Thin typed wrappers over the browser fetch API. Every call resolves to
//! `Result<T, String>`; transport failures, non-2xx statuses, and unexpected
//! response shapes all collapse into the `Err` arm.

pub mod http;
pub mod transcript;


pub use transcript::*;
