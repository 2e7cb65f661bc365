//! # Pete Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the chatbot:
//! - `config`: Runtime settings derived from command-line arguments
//! - `error`: Error types and the `Result` alias
//!
//! ```rust
//! use pete::core::config::ChatConfig;
//! use pete::core::error::{PeteError, Result};
//! ```
//!
pub mod config;
pub mod error;
