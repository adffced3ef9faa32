//! The interactive console: input field, visibility, transcript.
//!
//! A [`ConsoleSession`] consumes key events one at a time on the host's
//! input thread. Nothing in here blocks except the commands themselves. Log
//! messages from other threads arrive through a [`LogSender`] and are
//! appended whenever the session is polled or handles a key.

use devcon_types::config::ConsoleConfig;
use devcon_types::error::{ConsoleError, Result};
use devcon_types::input::{ConsoleAction, KeyEvent};
use devcon_types::severity::{LogMessage, Severity};

use crate::completion;
use crate::history::{HistoryBuffer, StoreOutcome};
use crate::interpreter::{CommandOutput, CommandRegistry};
use crate::transcript::{self, LogReceiver, LogSender, Transcript};

/// Outcome line for a command that ran and printed nothing.
pub const EXECUTED_SUCCESSFULLY: &str = "Command executed successfully";

/// Shown when the history fills up and is wiped.
pub const HISTORY_CLEARED: &str = "Console clipboard cleared";

const QUITTING: &str = "Quitting...";

/// A developer console session.
pub struct ConsoleSession {
    config: ConsoleConfig,
    registry: CommandRegistry,
    history: HistoryBuffer,
    transcript: Transcript,
    input: String,
    /// Caret position in characters.
    caret: usize,
    visible: bool,
    quit_requested: bool,
    log_tx: LogSender,
    log_rx: LogReceiver,
}

impl ConsoleSession {
    /// Create a hidden session around a populated registry.
    pub fn new(config: ConsoleConfig, registry: CommandRegistry) -> Result<Self> {
        Self::with_log_channel(config, registry, transcript::log_channel())
    }

    /// Like [`ConsoleSession::new`], draining a channel the host created
    /// earlier. Messages already queued show up on the first poll.
    pub fn with_log_channel(
        config: ConsoleConfig,
        registry: CommandRegistry,
        (log_tx, log_rx): (LogSender, LogReceiver),
    ) -> Result<Self> {
        config.validate()?;
        if !config.history_enabled() {
            log::debug!("Console history disabled");
        }
        log::debug!(
            "Console session: {} command(s), history {}, completion after {} char(s)",
            registry.len(),
            config.history_capacity,
            config.autocomplete_min_chars,
        );
        Ok(Self {
            history: HistoryBuffer::new(config.history_capacity),
            config,
            registry,
            transcript: Transcript::new(),
            input: String::new(),
            caret: 0,
            visible: false,
            quit_requested: false,
            log_tx,
            log_rx,
        })
    }

    // -- Accessors --

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Current input field text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Caret position in characters.
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a command asked the host to quit.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Handle for log producers on any thread.
    pub fn log_sender(&self) -> LogSender {
        self.log_tx.clone()
    }

    // -- Event handling --

    /// Append queued log messages to the transcript. Returns how many.
    pub fn poll(&mut self) -> usize {
        let mut count = 0;
        for msg in self.log_rx.drain() {
            self.transcript.push(msg.to_string());
            count += 1;
        }
        count
    }

    /// Handle one key-down event.
    pub fn handle_key(&mut self, event: KeyEvent) {
        self.apply(ConsoleAction::from_key(event));
    }

    /// Type each character of `text` into the input field.
    pub fn type_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.apply(ConsoleAction::Insert(ch));
        }
    }

    /// Perform one console action.
    ///
    /// Everything except toggling visibility is ignored while hidden.
    pub fn apply(&mut self, action: ConsoleAction) {
        self.poll();

        if action == ConsoleAction::ToggleVisibility {
            self.toggle_visibility();
            return;
        }
        if !self.visible {
            return;
        }

        match action {
            ConsoleAction::Submit => self.submit(),
            ConsoleAction::RecallOlder => self.recall_older(),
            ConsoleAction::RecallNewer => self.recall_newer(),
            ConsoleAction::Complete => self.complete(),
            ConsoleAction::Insert(ch) => self.insert(ch),
            ConsoleAction::DeleteBack => self.delete_back(),
            ConsoleAction::ToggleVisibility => {},
        }
    }

    fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
        if !self.visible {
            self.set_input(String::new());
        }
        log::debug!("Console visible: {}", self.visible);
    }

    fn submit(&mut self) {
        if self.input.is_empty() {
            return;
        }
        let line = std::mem::take(&mut self.input);
        self.caret = 0;

        self.transcript.push(line.as_str());
        let outcome = self.registry.dispatch(&line);
        let rendered = self.render_outcome(outcome);
        self.transcript.push(rendered);

        if self.history.store(&line) == StoreOutcome::Cleared {
            self.transcript.push(HISTORY_CLEARED);
        }
    }

    fn render_outcome(&mut self, outcome: Result<CommandOutput>) -> String {
        match outcome {
            Ok(CommandOutput::Text(text)) => text,
            Ok(CommandOutput::None) => EXECUTED_SUCCESSFULLY.to_string(),
            Ok(CommandOutput::Quit) => {
                self.quit_requested = true;
                QUITTING.to_string()
            },
            Err(e @ ConsoleError::CommandPanicked(_)) => {
                log::debug!("Command fault caught: {e}");
                LogMessage::new(Severity::Exception, e.to_string()).to_string()
            },
            Err(e) if e.is_dispatch_outcome() => {
                LogMessage::new(Severity::Warning, e.to_string()).to_string()
            },
            Err(e) => {
                log::debug!("Command failed outside dispatch: {e}");
                LogMessage::new(Severity::Error, e.to_string()).to_string()
            },
        }
    }

    fn recall_older(&mut self) {
        if let Some(line) = self.history.recall_older() {
            self.input = line.to_string();
        }
        self.caret = self.input.chars().count();
    }

    fn recall_newer(&mut self) {
        if let Some(line) = self.history.recall_newer() {
            let line = line.to_string();
            self.set_input(line);
        }
    }

    fn complete(&mut self) {
        if let Some(token) = completion::suggest(
            &self.input,
            self.registry.tokens(),
            self.config.autocomplete_min_chars,
        ) {
            let token = token.to_string();
            self.set_input(token);
        }
    }

    fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.caret);
        self.input.insert(at, ch);
        self.caret += 1;
    }

    fn delete_back(&mut self) {
        if self.caret == 0 {
            return;
        }
        let at = self.byte_offset(self.caret - 1);
        self.input.remove(at);
        self.caret -= 1;
    }

    /// Replace the input and put the caret at its end.
    fn set_input(&mut self, text: String) {
        self.caret = text.chars().count();
        self.input = text;
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.input
            .char_indices()
            .nth(chars)
            .map_or(self.input.len(), |(i, _)| i)
    }
}
