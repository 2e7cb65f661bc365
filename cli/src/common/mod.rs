//! # Pete Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers that are not chatbot logic themselves. Currently only the
//! terminal output helpers in `ui`.
//!

/// Terminal output helpers: prompt, plain lines, `Bot: ` replies.
pub mod ui;
