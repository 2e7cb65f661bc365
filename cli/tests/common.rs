//! # Pete CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each `.rs` file
//! in this directory is compiled as its own test crate, so helpers live here
//! and are pulled in with `mod common;`.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// The first reply 3Pete can give to anything.
pub const BANNER: &str = "Hi I'm 3Pete your ai Sports Chatbot!";

/// # Get Pete Command (`pete_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `pete` binary of the
/// current test run.
///
/// ## Panics
/// Panics if the `pete` binary cannot be found via `Command::cargo_bin`.
pub fn pete_cmd() -> Command {
    Command::cargo_bin("pete").expect("Failed to find pete binary for testing")
}

/// Collects the `Bot: ` replies from a transcript, in order.
pub fn bot_replies(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .split("You: ")
        .flat_map(|chunk| chunk.lines())
        .filter_map(|line| line.strip_prefix("Bot: "))
        .map(str::to_string)
        .collect()
}
