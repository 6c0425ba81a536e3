//! Turn-level errors.

use thiserror::Error;
use wayfarer_core::error::ProviderError;

/// Why a turn produced no reply.
///
/// Weather failures are not here: they become a reply sentence instead.
#[derive(Debug, Error)]
pub enum TurnError {
    #[error("No message to respond to")]
    EmptyHistory,

    #[error("Completion failed: {0}")]
    Completion(#[from] ProviderError),
}
