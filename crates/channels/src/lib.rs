//! Chat channels for Wayfarer.
//!
//! A channel yields user lines and delivers replies. The only channel is the
//! interactive terminal used by `wayfarer chat`.

pub mod cli;

pub use cli::{BOT_PREFIX, CliChannel, USER_PROMPT, is_exit_command};
