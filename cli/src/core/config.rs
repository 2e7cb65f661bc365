//! # Pete Configuration
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The chatbot's behaviour is fixed: the catalog, the greeting, the fallback
//! and the exit sentinel cannot be changed. What *can* be tuned from the
//! command line is how the process runs:
//! - how noisy the diagnostic logs on stderr are (`-v`, `-vv`, ...)
//! - whether fact selection is reproducible (`--seed <N>`)
//!
//! There are no configuration files. `ChatConfig` is built once in `main`
//! from the parsed arguments and handed to the session.
//!
//! ## Examples
//!
//! ```rust
//! use pete::bot::catalog::FactCatalog;
//! use pete::bot::responder::Responder;
//! use pete::core::config::ChatConfig;
//!
//! let cfg = ChatConfig::new(Some(42), 0);
//! let responder = Responder::new(FactCatalog::default(), cfg.rng());
//! assert_eq!(cfg.log_level(), "warn");
//! # let _ = responder;
//! ```
//!
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Effective runtime settings for one chat session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatConfig {
    /// Seed for the fact selector. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Number of `-v` flags given on the command line.
    pub verbose: u8,
}

impl ChatConfig {
    pub fn new(seed: Option<u64>, verbose: u8) -> Self {
        Self { seed, verbose }
    }

    /// Default log filter directive for the configured verbosity.
    /// `RUST_LOG` still takes precedence when set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Builds the random source the responder draws facts from.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                debug!("Seeding fact selector with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                debug!("Seeding fact selector from OS entropy");
                StdRng::from_entropy()
            }
        }
    }
}
