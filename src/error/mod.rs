//! Error types for the interview client.
//!
//! | Kind | Raised by | Handling |
//! |------|-----------|----------|
//! | [`ValidationError`] | flows, before any call | shown inline, no state change |
//! | [`ApiError::RequestTimeout`] | API client | surfaced by the calling flow |
//! | [`ApiError::Http`] | API client, non-2xx | surfaced by the calling flow |
//! | [`ApiError::Network`] | API client, transport | surfaced by the calling flow |
//!
//! No error is fatal; the worst case is a restart back to the setup screen.

mod api;
mod validation;

pub use api::ApiError;
pub use validation::ValidationError;

/// Result alias for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;
