//! Completion provider implementations for Wayfarer.
//!
//! All providers implement the `wayfarer_core::Provider` trait.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatProvider;

use std::sync::Arc;
use wayfarer_core::Provider;

/// Build the completion provider from configuration.
///
/// A missing key is passed through as an empty bearer token; the endpoint
/// rejects it on first use.
pub fn build_from_config(config: &wayfarer_config::AppConfig) -> Arc<dyn Provider> {
    let api_key = config.openai_api_key.clone().unwrap_or_default();
    Arc::new(OpenAiCompatProvider::new("openai", &config.api_url, api_key))
}
