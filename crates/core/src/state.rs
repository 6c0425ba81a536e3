//! Per-session conversational state.
//!
//! Created empty at the start of a session, mutated in place on every turn,
//! and dropped when the session ends. Both fields always exist, so the turn
//! logic never has to special-case a missing preference map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A trip preference the user can declare by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripPreference {
    Destination,
    Budget,
    Duration,
}

impl TripPreference {
    /// All preferences, in extraction order.
    pub const ALL: [TripPreference; 3] = [
        TripPreference::Destination,
        TripPreference::Budget,
        TripPreference::Duration,
    ];

    /// The keyword whose presence in an utterance sets this preference.
    pub fn keyword(&self) -> &'static str {
        match self {
            TripPreference::Destination => "destination",
            TripPreference::Budget => "budget",
            TripPreference::Duration => "duration",
        }
    }
}

impl std::fmt::Display for TripPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// State carried from one turn to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Lowercased user utterances since the last trip reset
    #[serde(default)]
    pub key_points: Vec<String>,

    /// Last declared value per preference
    #[serde(default)]
    pub trip_preferences: BTreeMap<TripPreference, String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything learned about the current trip.
    pub fn reset_trip(&mut self) {
        self.trip_preferences.clear();
        self.key_points.clear();
    }

    /// Store a preference, replacing any earlier value for the same key.
    pub fn set_preference(&mut self, preference: TripPreference, value: impl Into<String>) {
        self.trip_preferences.insert(preference, value.into());
    }

    pub fn preference(&self, preference: TripPreference) -> Option<&str> {
        self.trip_preferences.get(&preference).map(String::as_str)
    }

    pub fn push_key_point(&mut self, utterance: impl Into<String>) {
        self.key_points.push(utterance.into());
    }
}
