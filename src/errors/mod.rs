//! Centralized error handling for the CEP proxy application
//!
//! All fallible library code returns [`AppResult`]. The web layer owns the
//! mapping from [`AppError`] to HTTP responses (see `web::responses`);
//! binaries report through `anyhow` at the top level.

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
