//! Command trait, registry, parsing, and dispatch logic.
//!
//! Lines are split on single spaces only. There is no quoting, no variable
//! expansion and no chaining: the first piece is the token, the rest are
//! passed to the command untouched.

use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use devcon_types::error::{ConsoleError, Result};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text shown as the outcome line of the dispatch.
    Text(String),
    /// Command produced no visible output.
    None,
    /// Signal to the host that the operator asked to quit.
    Quit,
}

/// Context passed to every command.
pub struct Environment<'a> {
    /// The registry the command was dispatched from.
    pub registry: &'a CommandRegistry,
}

/// A single executable command.
pub trait Command {
    /// Human-readable name, e.g. "Quit".
    fn name(&self) -> &str;

    /// What the operator types. This is the registry key.
    fn token(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Longer usage notes for `help <token>`.
    fn help(&self) -> &str;

    /// Execute the command with the given arguments.
    ///
    /// Argument count and type checks are the command's own business; report
    /// them as `ParametersAmount` or `TypeNotSupported`.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// A line split into its command token and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub token: &'a str,
    pub args: Vec<&'a str>,
}

/// Split a line on single spaces.
///
/// Consecutive spaces produce empty arguments; they are not collapsed.
/// Returns `None` for a line that is empty or whitespace only.
pub fn parse_line(line: &str) -> Option<ParsedLine<'_>> {
    if line.trim().is_empty() {
        return None;
    }
    let mut pieces = line.split(' ');
    let token = pieces.next()?;
    Some(ParsedLine {
        token,
        args: pieces.collect(),
    })
}

/// Registry of available commands with dispatch.
///
/// Tokens are bound once: registering a token that is already present is a
/// silent no-op and the first command stays. Commands are never removed.
/// Enumeration follows registration order.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a command under its token.
    ///
    /// Returns `false` and drops `cmd` if the token is already bound.
    pub fn register(&mut self, cmd: Box<dyn Command>) -> bool {
        let token = cmd.token().to_string();
        if self.index.contains_key(&token) {
            log::debug!("Command '{token}' already registered, keeping the first");
            return false;
        }
        log::info!("{} command has been added to the console.", cmd.name());
        self.index.insert(token, self.commands.len());
        self.commands.push(cmd);
        true
    }

    /// Find the command bound to `token`. Matching is exact.
    pub fn lookup(&self, token: &str) -> Option<&dyn Command> {
        self.index.get(token).map(|&i| self.commands[i].as_ref())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Registered tokens in registration order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.token())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Return a list of (token, description) pairs sorted by token.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = self
            .commands
            .iter()
            .map(|c| (c.token(), c.description()))
            .collect();
        cmds.sort_by_key(|(token, _)| *token);
        cmds
    }

    /// Parse a line, resolve its token and run the command.
    ///
    /// Empty lines and unknown tokens fail with `NotRecognized`. A panic
    /// inside the command is caught and reported as `CommandPanicked`. The
    /// panic hook still runs, so the host's hook (the default one prints to
    /// stderr) sees the panic before it is caught.
    pub fn dispatch(&self, line: &str) -> Result<CommandOutput> {
        let parsed = parse_line(line).ok_or(ConsoleError::NotRecognized)?;
        let cmd = self
            .lookup(parsed.token)
            .ok_or(ConsoleError::NotRecognized)?;

        log::debug!("Dispatching '{}' with {} arg(s)", parsed.token, parsed.args.len());
        let mut env = Environment { registry: self };
        panic::catch_unwind(AssertUnwindSafe(|| cmd.execute(&parsed.args, &mut env)))
            .unwrap_or_else(|payload| Err(ConsoleError::CommandPanicked(panic_message(&*payload))))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
