//! # Pete Library Interface
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! Exposes the chatbot modules to `main.rs` and to the integration tests in
//! `cli/tests/`.
//!
pub mod bot;
pub mod common;
pub mod core;
