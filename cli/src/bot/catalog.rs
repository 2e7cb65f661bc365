//! # Fact Catalog
//!
//! File: cli/src/bot/catalog.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The fixed, ordered list of sports trivia the bot can tell. A catalog is
//! built once, never mutated, and always holds at least one fact: the
//! constructor refuses an empty list instead of letting a later draw fail.
//!
use crate::core::error::PeteError;
use rand::seq::SliceRandom;
use rand::Rng;

/// The trivia shipped with the bot, in catalog order.
pub const SPORTS_FACTS: [&str; 5] = [
    "Basketball was invented by Dr. James Naismith in 1891.",
    "The fastest recorded pitch in Major League Baseball was 105.1 mph by Aroldis Chapman.",
    "The Olympic Games were first held in 776 BCE in Olympia, Greece.",
    "Brazil has won the FIFA World Cup 5 times, more than any other country.",
    "Michael Jordan is often considered the best basketball player of all time.",
];

/// An immutable, non-empty, ordered sequence of facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactCatalog {
    facts: Vec<String>,
}

impl FactCatalog {
    /// Builds a catalog from the given facts, keeping their order.
    ///
    /// ## Errors
    ///
    /// Returns `PeteError::InvalidCatalog` if `facts` is empty or any entry
    /// is blank.
    pub fn new<I, S>(facts: I) -> Result<Self, PeteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let facts: Vec<String> = facts.into_iter().map(Into::into).collect();
        if facts.is_empty() {
            return Err(PeteError::InvalidCatalog(
                "at least one fact is required".into(),
            ));
        }
        if let Some(pos) = facts.iter().position(|f| f.trim().is_empty()) {
            return Err(PeteError::InvalidCatalog(format!(
                "fact #{} is blank",
                pos + 1
            )));
        }
        Ok(Self { facts })
    }

    /// Picks one fact uniformly at random.
    ///
    /// Unreachable failure for catalogs built through `new`, but an empty
    /// catalog yields `PeteError::EmptyCatalog` rather than a panic.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, PeteError> {
        if self.is_empty() {
            return Err(PeteError::EmptyCatalog);
        }
        self.facts
            .choose(rng)
            .map(String::as_str)
            .ok_or(PeteError::EmptyCatalog)
    }

    pub fn contains(&self, fact: &str) -> bool {
        self.facts.iter().any(|f| f == fact)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.facts.iter().map(String::as_str)
    }
}

impl Default for FactCatalog {
    fn default() -> Self {
        Self {
            facts: SPORTS_FACTS.iter().map(|f| f.to_string()).collect(),
        }
    }
}
