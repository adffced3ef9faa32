//! Transcript storage and the log message channel that feeds it.
//!
//! The transcript itself is owned by the session and only touched from the
//! input-handling thread. Log producers on other threads hold a
//! [`LogSender`]; their messages queue in a channel until the session drains
//! it.

use std::sync::mpsc;

use devcon_types::severity::{LogMessage, Severity};

/// Append-only sequence of console lines.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The whole transcript as one block, each line newline-terminated.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Cloneable, thread-safe handle for sending log messages to a session.
#[derive(Debug, Clone)]
pub struct LogSender {
    tx: mpsc::Sender<LogMessage>,
}

impl LogSender {
    /// Queue a message. Silently dropped if the session is gone.
    pub fn send(&self, severity: Severity, message: impl Into<String>) {
        self.send_message(LogMessage::new(severity, message));
    }

    pub fn send_message(&self, message: LogMessage) {
        let _ = self.tx.send(message);
    }
}

/// Receiving end of a log channel, drained by the session.
#[derive(Debug)]
pub struct LogReceiver {
    rx: mpsc::Receiver<LogMessage>,
}

impl LogReceiver {
    /// Take every message queued so far without blocking.
    pub fn drain(&self) -> impl Iterator<Item = LogMessage> + '_ {
        self.rx.try_iter()
    }
}

/// Create a log channel.
///
/// Sessions make their own, but a host that wants log records emitted
/// before the session exists (command registration, for one) creates the
/// channel first and hands it to [`ConsoleSession::with_log_channel`].
///
/// [`ConsoleSession::with_log_channel`]: crate::ConsoleSession::with_log_channel
pub fn log_channel() -> (LogSender, LogReceiver) {
    let (tx, rx) = mpsc::channel();
    (LogSender { tx }, LogReceiver { rx })
}
