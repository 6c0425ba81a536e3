//! Front-dropping history truncation.
//!
//! The measured length of a history is the character count of every message
//! plus one unit per stored key point. Key points are not sent anywhere; they
//! only shrink the room left for messages.

use tracing::debug;
use wayfarer_core::message::Message;

/// Context budget, in characters.
pub const MAX_CONTEXT_LENGTH: usize = 4096;

/// Measured length of `messages` with `key_point_count` key points.
pub fn context_length(messages: &[Message], key_point_count: usize) -> usize {
    messages.iter().map(Message::char_len).sum::<usize>() + key_point_count
}

/// Truncate `messages` to [`MAX_CONTEXT_LENGTH`]. Returns how many messages were dropped.
pub fn truncate_context(messages: &mut Vec<Message>, key_point_count: usize) -> usize {
    truncate_to_budget(messages, key_point_count, MAX_CONTEXT_LENGTH)
}

/// Drop the oldest messages until the measured length is at most `budget`.
///
/// A length exactly equal to the budget is kept. If the key points alone
/// exceed the budget the history drains to empty.
pub fn truncate_to_budget(
    messages: &mut Vec<Message>,
    key_point_count: usize,
    budget: usize,
) -> usize {
    let mut total = context_length(messages, key_point_count);
    let mut dropped = 0;

    while total > budget && dropped < messages.len() {
        total -= messages[dropped].char_len();
        dropped += 1;
    }

    if dropped > 0 {
        messages.drain(..dropped);
        debug!(
            dropped,
            kept = messages.len(),
            length = total,
            budget,
            "Truncated conversation history"
        );
    }

    dropped
}
