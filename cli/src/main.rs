//! # Pete Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the 3Pete chatbot. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Wiring the fact catalog, responder and chat session together
//! - Reporting any error that ends the session
//!
//! ## Examples
//!
//! ```bash
//! # Chat interactively
//! pete
//!
//! # Reproducible fact picks, with debug logs on stderr
//! pete --seed 42 -vv
//! ```
//!
//! Processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Build the responder and run the chat on stdin/stdout
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use pete::bot::catalog::FactCatalog;
use pete::bot::responder::Responder;
use pete::bot::session::ChatSession;
use pete::core::config::ChatConfig;
use pete::core::error::Result;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "pete",
    about = "🏀 3Pete: your command-line sports trivia chatbot",
    long_about = "Chat with 3Pete. Say hello, or ask for a sports fact.\n\
                  Type 'exit' to end the chat.",
    version
)]
struct Cli {
    /// Seed the fact picker for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn run(config: ChatConfig) -> Result<usize> {
    let responder = Responder::new(FactCatalog::default(), config.rng());
    info!("Loaded {} sports facts.", responder.catalog().len());

    let mut session = ChatSession::new(responder);
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    session.run(&mut input, &mut output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ChatConfig::new(cli.seed, cli.verbose);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(config) {
        tracing::error!("Chat session failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
