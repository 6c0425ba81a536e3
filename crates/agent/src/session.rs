//! One interactive conversation.

use tracing::debug;
use wayfarer_core::message::Message;
use wayfarer_core::state::SessionState;

use crate::advisor::TripAdvisor;
use crate::error::TurnError;

/// A conversation with the advisor. Owns the session state for its lifetime.
///
/// Each turn sends only the current line as history; continuity across turns
/// lives in [`SessionState`].
pub struct Session {
    advisor: TripAdvisor,
    state: SessionState,
    turns: usize,
}

impl Session {
    pub fn new(advisor: TripAdvisor) -> Self {
        Self {
            advisor,
            state: SessionState::new(),
            turns: 0,
        }
    }

    /// Run one turn for `line` and return the reply.
    pub async fn turn(&mut self, line: &str) -> Result<String, TurnError> {
        self.turns += 1;
        debug!(turn = self.turns, "Handling user input");

        let history = vec![Message::user(line)];
        self.advisor.on_message(history, &mut self.state).await
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Number of turns taken so far, including failed ones.
    pub fn turns(&self) -> usize {
        self.turns
    }
}
