//! Weather forecast clients for Wayfarer.
//!
//! All clients implement the `wayfarer_core::WeatherClient` trait.

pub mod weatherapi;

pub use weatherapi::WeatherApiClient;

use std::sync::Arc;
use std::time::Duration;
use wayfarer_core::WeatherClient;

/// Build the weather client from configuration.
///
/// A missing key is sent as an empty `key` parameter; the API answers with
/// an error status, which the advisor reports as "no data".
pub fn build_from_config(config: &wayfarer_config::WeatherConfig) -> Arc<dyn WeatherClient> {
    let api_key = config.api_key.clone().unwrap_or_default();
    Arc::new(
        WeatherApiClient::new(&config.base_url, api_key)
            .with_timeout(Duration::from_secs(config.timeout_secs)),
    )
}
