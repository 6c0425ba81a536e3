//! CLI channel — interactive terminal chat.
//!
//! Reads lines from stdin (or any async reader) and writes replies to stdout.
//! Used by `wayfarer chat`.

use async_trait::async_trait;
use std::io::Write;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::{Mutex, mpsc};
use wayfarer_core::channel::{Channel, ChannelId, ChannelMessage};
use wayfarer_core::error::ChannelError;

/// Prompt shown before each user line.
pub const USER_PROMPT: &str = "You: ";

/// Prefix put in front of every reply.
pub const BOT_PREFIX: &str = "Bot:";

type LineSource = Box<dyn AsyncBufRead + Send + Unpin>;

/// Whether `line` ends the session.
pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

/// Interactive CLI channel for terminal-based chat.
pub struct CliChannel {
    id: ChannelId,
    input: Mutex<Option<LineSource>>,
}

impl CliChannel {
    /// A channel reading from stdin.
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }

    /// A channel reading from `reader`. `start` may only be called once.
    pub fn from_reader(reader: impl AsyncBufRead + Send + Unpin + 'static) -> Self {
        Self {
            id: ChannelId("cli".into()),
            input: Mutex::new(Some(Box::new(reader))),
        }
    }

    /// Print the user prompt without a trailing newline.
    pub fn prompt(&self) {
        print!("{USER_PROMPT}");
        let _ = std::io::stdout().flush();
    }
}

impl Default for CliChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Channel for CliChannel {
    fn name(&self) -> &str {
        "cli"
    }

    fn id(&self) -> &ChannelId {
        &self.id
    }

    async fn start(
        &self,
    ) -> Result<mpsc::Receiver<Result<ChannelMessage, ChannelError>>, ChannelError> {
        let reader = self
            .input
            .lock()
            .await
            .take()
            .ok_or_else(|| ChannelError::ConnectionLost("input already consumed".into()))?;

        let (tx, rx) = mpsc::channel(1);
        let channel_id = self.id.clone();

        tokio::spawn(async move {
            let mut lines = reader.lines();

            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if is_exit_command(&line) {
                            tracing::debug!("Exit command received");
                            break;
                        }

                        let msg = ChannelMessage {
                            channel_id: channel_id.clone(),
                            sender_id: "local_user".into(),
                            content: line,
                        };

                        if tx.send(Ok(msg)).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => break, // EOF (Ctrl+D)
                    Err(e) => {
                        let _ = tx
                            .send(Err(ChannelError::ConnectionLost(e.to_string())))
                            .await;
                        break;
                    }
                }
            }
        });

        Ok(rx)
    }

    async fn send(&self, content: &str) -> Result<(), ChannelError> {
        println!("{BOT_PREFIX} {content}");
        Ok(())
    }
}
