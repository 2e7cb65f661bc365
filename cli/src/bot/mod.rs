//! # Pete Chatbot Modules
//!
//! File: cli/src/bot/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything the chatbot knows and does:
//!
//! - `catalog`: the fixed list of sports facts
//! - `responder`: keyword matching from a query to a reply
//! - `session`: the interactive loop that reads queries and prints replies
//!
//! ```rust
//! use pete::bot::catalog::FactCatalog;
//! use pete::bot::responder::Responder;
//! use pete::bot::session::ChatSession;
//! use pete::core::config::ChatConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ChatConfig::new(Some(1), 0);
//! let responder = Responder::new(FactCatalog::default(), config.rng());
//! let mut session = ChatSession::new(responder);
//!
//! let mut transcript = Vec::new();
//! session.run(&mut "hello\nexit\n".as_bytes(), &mut transcript)?;
//! assert!(String::from_utf8(transcript)?.ends_with("Bot: Goodbye!\n"));
//! # Ok(())
//! # }
//! ```
//!

/// The immutable fact list and random selection from it.
pub mod catalog;
/// Query classification and reply generation.
pub mod responder;
/// The read-respond-print loop and its Running/Terminated states.
pub mod session;
