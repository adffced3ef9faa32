//! Prints the transcript to a plain terminal as it grows.

use std::io::{self, Write};

use devcon_terminal::ConsoleSession;

/// Tracks how much of the transcript has been printed.
#[derive(Default)]
pub struct Renderer {
    printed: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print new transcript lines, then the input field if the console is
    /// visible.
    pub fn flush(&mut self, session: &ConsoleSession, out: &mut impl Write) -> io::Result<()> {
        let lines = session.transcript().lines();
        for line in &lines[self.printed..] {
            writeln!(out, "{line}")?;
        }
        self.printed = lines.len();

        if session.is_visible() && !session.input().is_empty() {
            writeln!(out, "> {}", session.input())?;
        }
        out.flush()
    }
}
