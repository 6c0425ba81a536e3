//! Context-window management.
//!
//! The conversation sent to the completion provider is bounded by a fixed
//! character budget. Whole messages are dropped from the front (oldest
//! first) until the history fits; message content is never split.

pub mod truncate;

pub use truncate::{MAX_CONTEXT_LENGTH, context_length, truncate_context, truncate_to_budget};
