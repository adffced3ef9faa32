//! Developer console core.
//!
//! The console is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by token. The session collects key
//! events into an input line, parses submitted lines, resolves the token and
//! dispatches `execute()`. Submitted lines are kept in a small history for
//! recall, and the completion key expands a partial token.

mod commands;
mod completion;
mod history;
mod interpreter;
mod logger;
mod session;
mod transcript;

/// Register the built-in commands (quit, help) into a registry.
pub use commands::register_builtins;
/// First-match prefix completion over registered tokens.
pub use completion::suggest;
/// Fixed-capacity input history with a recall cursor.
pub use history::{HistoryBuffer, StoreOutcome};
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Context passed to every command.
pub use interpreter::Environment;
/// A line split into its token and arguments.
pub use interpreter::{ParsedLine, parse_line};
/// `log::Log` implementation that feeds the transcript.
pub use logger::ConsoleLogger;
/// The interactive console state machine.
pub use session::{ConsoleSession, EXECUTED_SUCCESSFULLY, HISTORY_CLEARED};
/// Append-only message log and its cross-thread producer handle.
pub use transcript::{LogReceiver, LogSender, Transcript, log_channel};

pub use devcon_types::config::ConsoleConfig;
pub use devcon_types::error::{ConsoleError, Result};
pub use devcon_types::input::{ConsoleAction, Key, KeyEvent};
pub use devcon_types::severity::{LogMessage, Severity};
