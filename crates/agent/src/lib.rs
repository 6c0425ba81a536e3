//! Turn handling for the Wayfarer trip advisor.
//!
//! Every turn follows the same path:
//!
//! 1. **Route** the latest user message: reset the trip, extract
//!    preferences, record a key point, and classify the intent
//! 2. **Weather**: fetch a forecast and answer with it (or with the failure
//!    sentence); the completion provider is never called
//! 3. **Chat**: truncate the history to the context budget and forward it,
//!    behind the system prompt, to the completion provider

pub mod advisor;
pub mod context;
pub mod error;
pub mod forecast;
pub mod router;
pub mod session;

#[cfg(test)]
mod test_helpers;

pub use advisor::TripAdvisor;
pub use context::{MAX_CONTEXT_LENGTH, context_length, truncate_context, truncate_to_budget};
pub use error::TurnError;
pub use router::{Intent, route};
pub use session::Session;
