//! # Chat Session
//!
//! File: cli/src/bot/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The read-respond-print loop. A session is a two-state machine:
//!
//! - **Running**: print the prompt, block on one line of input, then either
//!   end the chat (sentinel) or print `Bot: <reply>` and read again.
//! - **Terminated**: the loop has exited; further calls to `run` return at once.
//!
//! The sentinel is `exit`, matched after trimming surrounding whitespace and
//! ignoring case. Closing stdin (EOF) ends the session the same way.
//!
//! Input and output are generic so tests can drive a session from a byte
//! slice and inspect the transcript.
//!
use crate::bot::responder::Responder;
use crate::common::ui;
use crate::core::error::Result;
use anyhow::Context;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const BANNER: &str = "Hi I'm 3Pete your ai Sports Chatbot!";
pub const USAGE_HINT: &str = "Type 'exit' to end the chat.";
pub const GOODBYE: &str = "Goodbye!";

/// Input that ends the chat.
pub const EXIT_SENTINEL: &str = "exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Returns true if `line` is the exit sentinel.
pub fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT_SENTINEL)
}

/// Drives a `Responder` over a line-oriented input stream.
#[derive(Debug)]
pub struct ChatSession<R: Rng> {
    responder: Responder<R>,
    state: SessionState,
}

impl<R: Rng> ChatSession<R> {
    pub fn new(responder: Responder<R>) -> Self {
        Self {
            responder,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Runs the chat until the sentinel or end of input.
    ///
    /// Returns the number of queries answered. Fails only if reading from
    /// `input` or writing to `out` fails.
    pub fn run<I, W>(&mut self, input: &mut I, out: &mut W) -> Result<usize>
    where
        I: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        if self.state == SessionState::Terminated {
            debug!("Session already terminated; nothing to do.");
            return Ok(0);
        }

        ui::line(out, BANNER)?;
        ui::line(out, USAGE_HINT)?;

        let mut answered = 0;
        let mut bytes = Vec::new();
        while self.state == SessionState::Running {
            ui::prompt(out)?;

            bytes.clear();
            let read = input
                .read_until(b'\n', &mut bytes)
                .context("Failed to read a line from the user")?;

            if read == 0 {
                info!("Input closed; ending chat.");
                self.finish(out)?;
                break;
            }

            // Bytes that are not UTF-8 become U+FFFD and fall through to the
            // fallback reply.
            let line = String::from_utf8_lossy(&bytes);
            let query = line.trim_end_matches(['\n', '\r']);
            if is_exit(query) {
                debug!("Exit sentinel received.");
                self.finish(out)?;
                break;
            }

            let reply = self.responder.respond(query)?;
            ui::say(out, &reply)?;
            answered += 1;
        }

        info!("Chat ended after {} replies.", answered);
        Ok(answered)
    }

    fn finish<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<()> {
        self.state = SessionState::Terminated;
        ui::say(out, GOODBYE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::catalog::FactCatalog;
    use crate::bot::responder::{FALLBACK, GREETING};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> ChatSession<StdRng> {
        ChatSession::new(Responder::new(
            FactCatalog::default(),
            StdRng::seed_from_u64(42),
        ))
    }

    /// Runs a session over `input`, returning the transcript lines with the
    /// `You: ` prompts stripped.
    fn transcript(session: &mut ChatSession<StdRng>, input: &str) -> (usize, Vec<String>) {
        let mut out = Vec::new();
        let answered = session.run(&mut input.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines = text
            .lines()
            .map(|l| l.trim_start_matches(ui::USER_PROMPT).to_string())
            .collect();
        (answered, lines)
    }

    #[test]
    fn test_hello_fact_exit_scenario() {
        let mut s = session();
        let (answered, lines) = transcript(&mut s, "hello\ngive me a fact\nexit\n");

        assert_eq!(answered, 2);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], BANNER);
        assert_eq!(lines[1], USAGE_HINT);
        assert_eq!(lines[2], format!("Bot: {}", GREETING));
        let fact = lines[3].strip_prefix("Bot: ").unwrap();
        assert!(FactCatalog::default().contains(fact));
        assert_eq!(lines[4], "Bot: Goodbye!");
        assert_eq!(s.state(), SessionState::Terminated);
    }

    #[test]
    fn test_sentinel_variants_terminate() {
        for sentinel in ["exit", "EXIT", " exit ", "\tExIt", "exit\r"] {
            let mut s = session();
            let (answered, lines) = transcript(&mut s, &format!("{}\nhello\n", sentinel));
            assert_eq!(answered, 0, "sentinel {:?} did not stop the chat", sentinel);
            assert_eq!(lines.last().unwrap(), "Bot: Goodbye!");
            assert_eq!(s.state(), SessionState::Terminated);
        }
    }

    #[test]
    fn test_is_exit_rejects_near_misses() {
        assert!(is_exit("exit"));
        assert!(is_exit("  EXIT \n"));
        assert!(!is_exit("exit now"));
        assert!(!is_exit("quit"));
        assert!(!is_exit("e xit"));
        assert!(!is_exit(""));
    }

    #[test]
    fn test_lines_after_exit_are_not_processed() {
        let mut s = session();
        let (_, lines) = transcript(&mut s, "exit\nhello\nfact\n");
        assert!(!lines.iter().any(|l| l.contains(GREETING)));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_and_unknown_lines_get_fallback() {
        let mut s = session();
        let (answered, lines) = transcript(&mut s, "\n   \nwhat's the score?\nexit\n");
        assert_eq!(answered, 3);
        for line in &lines[2..5] {
            assert_eq!(line, &format!("Bot: {}", FALLBACK));
        }
    }

    #[test]
    fn test_non_utf8_line_is_answered() {
        let mut s = session();
        let mut out = Vec::new();
        let answered = s
            .run(&mut &b"\xff\xfe hello\nexit\n"[..], &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(answered, 1);
        assert!(text.contains(&format!("Bot: {}\n", GREETING)));
        assert!(text.ends_with("Bot: Goodbye!\n"));
        assert_eq!(s.state(), SessionState::Terminated);
    }

    #[test]
    fn test_invalid_bytes_without_keywords_get_fallback() {
        let mut s = session();
        let mut out = Vec::new();
        let answered = s.run(&mut &b"\xc3\x28\r\nEXIT\r\n"[..], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(answered, 1);
        assert!(text.contains(&format!("Bot: {}\n", FALLBACK)));
        assert!(text.ends_with("Bot: Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_terminates() {
        let mut s = session();
        let (answered, lines) = transcript(&mut s, "hello");
        assert_eq!(answered, 1);
        assert_eq!(lines.last().unwrap(), "Bot: Goodbye!");
        assert_eq!(s.state(), SessionState::Terminated);
    }

    #[test]
    fn test_prompt_precedes_each_read() {
        let mut s = session();
        let mut out = Vec::new();
        s.run(&mut "hello\nexit\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(ui::USER_PROMPT).count(), 2);
        assert!(text.contains(&format!("You: Bot: {}\n", GREETING)));
    }

    #[test]
    fn test_terminated_session_does_not_rerun() {
        let mut s = session();
        transcript(&mut s, "exit\n");
        let mut out = Vec::new();
        let answered = s.run(&mut "hello\n".as_bytes(), &mut out).unwrap();
        assert_eq!(answered, 0);
        assert!(out.is_empty());
    }
}
