//! # Pete UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Small helpers for writing the conversation to the terminal. Everything the
//! user sees goes through here so the chat transcript has one consistent
//! shape:
//!
//! ```text
//! Hi I'm 3Pete your ai Sports Chatbot!
//! Type 'exit' to end the chat.
//! You: hello
//! Bot: Hello! How can I assist you in the world of sports today?
//! ```
//!
//! All helpers take any `Write` so tests can capture output in a `Vec<u8>`.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::io::Write;

/// Label printed in front of every bot reply.
pub const BOT_LABEL: &str = "Bot: ";

/// Label printed before reading each line of user input.
pub const USER_PROMPT: &str = "You: ";

/// Writes a plain line of text.
pub fn line<W: Write + ?Sized>(out: &mut W, text: &str) -> Result<()> {
    writeln!(out, "{}", text).context("Failed to write to the terminal")
}

/// Writes a bot reply, prefixed with `Bot: `.
pub fn say<W: Write + ?Sized>(out: &mut W, reply: &str) -> Result<()> {
    writeln!(out, "{}{}", BOT_LABEL, reply).context("Failed to write the bot reply")
}

/// Writes the input prompt without a newline and flushes so it shows up
/// before the read blocks.
pub fn prompt<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    write!(out, "{}", USER_PROMPT).context("Failed to write the prompt")?;
    out.flush().context("Failed to flush stdout")
}
