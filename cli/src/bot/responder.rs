//! # Responder
//!
//! File: cli/src/bot/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Maps one line of user input to one reply by plain keyword matching. The
//! query is lower-cased and checked, in priority order, for:
//! 1. `"fact"`: reply with a random fact from the catalog
//! 2. `"hello"`: reply with the greeting
//! 3. anything else: reply with the fallback hint
//!
//! So `"hello, give me a fact"` gets a fact, not the greeting.
//!
//! The random source is injected rather than pulled from a global, so tests
//! (and `pete --seed N`) get reproducible draws.
//!
//! ## Examples
//!
//! ```rust
//! use pete::bot::catalog::FactCatalog;
//! use pete::bot::responder::{Responder, FALLBACK, GREETING};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # fn main() -> Result<(), pete::core::error::PeteError> {
//! let mut bot = Responder::new(FactCatalog::default(), StdRng::seed_from_u64(3));
//! assert_eq!(bot.respond("Hello there")?, GREETING);
//! assert_eq!(bot.respond("what's up")?, FALLBACK);
//! # Ok(())
//! # }
//! ```
//!
use crate::bot::catalog::FactCatalog;
use crate::core::error::PeteError;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::trace;

/// Reply to any query mentioning "hello" (and not "fact").
pub const GREETING: &str = "Hello! How can I assist you in the world of sports today?";

/// Reply to queries that match no keyword.
pub const FALLBACK: &str = "Sorry, I don't understand that query. You can ask for a sports fact!";

const FACT_KEYWORD: &str = "fact";
const GREETING_KEYWORD: &str = "hello";

/// Which reply a query maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Fact,
    Greeting,
    Unknown,
}

impl Intent {
    /// Classifies a raw query, case-insensitively.
    pub fn classify(query: &str) -> Self {
        let query = query.to_lowercase();
        if query.contains(FACT_KEYWORD) {
            Intent::Fact
        } else if query.contains(GREETING_KEYWORD) {
            Intent::Greeting
        } else {
            Intent::Unknown
        }
    }
}

/// Owns the fact catalog and the random source facts are drawn with.
#[derive(Debug)]
pub struct Responder<R = StdRng> {
    catalog: FactCatalog,
    rng: R,
}

impl<R: Rng> Responder<R> {
    pub fn new(catalog: FactCatalog, rng: R) -> Self {
        Self { catalog, rng }
    }

    pub fn catalog(&self) -> &FactCatalog {
        &self.catalog
    }

    /// Returns one catalog fact, chosen uniformly with replacement.
    pub fn get_fact(&mut self) -> Result<&str, PeteError> {
        self.catalog.choose(&mut self.rng)
    }

    /// Produces the reply for `query`.
    ///
    /// Never fails for any input text; the only error is
    /// `PeteError::EmptyCatalog`, which a constructed catalog cannot hit.
    pub fn respond(&mut self, query: &str) -> Result<String, PeteError> {
        let intent = Intent::classify(query);
        trace!("Classified {:?} as {:?}", query, intent);
        let reply = match intent {
            Intent::Fact => self.get_fact()?.to_string(),
            Intent::Greeting => GREETING.to_string(),
            Intent::Unknown => FALLBACK.to_string(),
        };
        Ok(reply)
    }
}
