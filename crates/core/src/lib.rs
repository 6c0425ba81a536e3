//! # Wayfarer Core
//!
//! Domain types, traits, and error definitions for the Wayfarer trip-advisor
//! assistant. This crate has **no HTTP or runtime dependencies**: it defines
//! the domain model that the provider, weather, and agent crates implement
//! against.
//!
//! ## Seams
//!
//! The two external collaborators are traits here, implementations live in
//! their own crates:
//! - [`Provider`] — the completion client (`wayfarer-providers`)
//! - [`WeatherClient`] — the forecast client (`wayfarer-weather`)
//!
//! Tests swap either one for a scripted mock.

pub mod channel;
pub mod error;
pub mod message;
pub mod provider;
pub mod state;
pub mod weather;

// Re-export key types at crate root for ergonomics
pub use channel::{Channel, ChannelId, ChannelMessage};
pub use error::{ChannelError, ProviderError, WeatherError};
pub use message::{Message, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
pub use state::{SessionState, TripPreference};
pub use weather::{Forecast, ForecastDay, ForecastRequest, WeatherClient};
