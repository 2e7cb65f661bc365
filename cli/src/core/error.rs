//! # Pete Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout the chatbot. There are
//! very few ways for the bot to fail: the fact catalog can be malformed, and
//! the terminal streams can fail underneath the chat session.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `PeteError`: A custom error enum using `thiserror` for the chatbot domain
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for application plumbing
//!
//! Domain code (`bot::catalog`, `bot::responder`) returns `PeteError` directly
//! so callers and tests can match on variants. The session driver and `main`
//! work with `anyhow` so I/O failures can carry context.
//!
//! ## Examples
//!
//! ```rust
//! use anyhow::Context;
//! use pete::bot::catalog::FactCatalog;
//! use pete::core::error::{PeteError, Result};
//! use std::io::BufRead;
//!
//! # fn main() -> Result<()> {
//! // Constructing a catalog with no facts fails fast
//! let err = FactCatalog::new(Vec::<String>::new()).unwrap_err();
//! assert!(matches!(err, PeteError::InvalidCatalog(_)));
//!
//! // Adding context to I/O errors using anyhow
//! let mut input = "hello\n".as_bytes();
//! let mut line = String::new();
//! input
//!     .read_line(&mut line)
//!     .context("Failed to read a line from the user")?;
//! # Ok(())
//! # }
//! ```
//!
use thiserror::Error;

/// Custom error type for the chatbot.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PeteError {
    /// A fact was requested from a catalog that holds none.
    #[error("The fact catalog is empty; there is nothing to tell.")]
    EmptyCatalog,

    /// A catalog was constructed from unusable input.
    #[error("Invalid fact catalog: {0}")]
    InvalidCatalog(String),
}

/// Type alias for Result using anyhow::Error for application-level plumbing.
pub type Result<T> = anyhow::Result<T>;
