//! Keyword intent routing and trip-state updates.
//!
//! Every turn runs the same rules against the latest user message, in this
//! order:
//!
//! 1. **Reset**: the message mentions both "start" and "trip" → forget the
//!    current trip (preferences and key points).
//! 2. **Preferences**: each preference keyword found in the message stores
//!    the message minus that keyword.
//! 3. **Key point**: the lowercased message is appended to the key points.
//! 4. **Intent**: a message beginning with `"weather "` asks for a forecast;
//!    everything else is general chat.
//!
//! Matching is plain substring matching on the lowercased message, so
//! "restart" counts as "start" and "tripod" as "trip".

use wayfarer_core::state::{SessionState, TripPreference};

/// Prefix that turns a message into a forecast request.
pub const WEATHER_PREFIX: &str = "weather ";

/// What the advisor should do with a turn once state has been updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Look up the forecast for `city` and answer with it.
    Weather { city: String },
    /// Forward the conversation to the completion provider.
    Chat,
}

/// Whether `lowered` starts a new trip.
pub fn is_trip_reset(lowered: &str) -> bool {
    lowered.contains("start") && lowered.contains("trip")
}

/// Preferences declared in `lowered`.
///
/// The value is the message with the first occurrence of the keyword cut
/// out and the ends trimmed. Inner whitespace is left as is, so
/// `"my destination is paris"` yields `"my  is paris"`.
pub fn extract_preferences(lowered: &str) -> Vec<(TripPreference, String)> {
    TripPreference::ALL
        .iter()
        .filter(|p| lowered.contains(p.keyword()))
        .map(|&p| (p, lowered.replacen(p.keyword(), "", 1).trim().to_string()))
        .collect()
}

/// Classify a raw message.
///
/// The prefix is matched case-insensitively; the city keeps the casing the
/// user typed.
pub fn detect_intent(message: &str) -> Intent {
    let prefix_len = WEATHER_PREFIX.len();
    match message.get(..prefix_len) {
        Some(head) if head.eq_ignore_ascii_case(WEATHER_PREFIX) => Intent::Weather {
            city: message[prefix_len..].trim().to_string(),
        },
        _ => Intent::Chat,
    }
}

/// Apply the per-turn state rules for `message` and classify it.
pub fn route(state: &mut SessionState, message: &str) -> Intent {
    let lowered = message.to_lowercase();

    if is_trip_reset(&lowered) {
        state.reset_trip();
    }

    for (preference, value) in extract_preferences(&lowered) {
        state.set_preference(preference, value);
    }

    state.push_key_point(lowered);

    detect_intent(message)
}
