//! Error types for the Wayfarer domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each external boundary has its own error enum; the agent and CLI wrap
//! them where they need to.

use thiserror::Error;

// --- Boundary errors ---

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Failures of the weather lookup boundary.
///
/// The agent never surfaces these to the user verbatim; any variant means
/// "no forecast available".
#[derive(Debug, Clone, Error)]
pub enum WeatherError {
    #[error("Weather API returned status {status_code}: {message}")]
    ApiError { status_code: u16, message: String },

    #[error("Malformed forecast payload: {0}")]
    InvalidPayload(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Channel connection lost: {0}")]
    ConnectionLost(String),
}
