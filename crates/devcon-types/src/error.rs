//! Error types for devcon.

use std::io;

/// Errors produced by the console.
///
/// The first four variants are dispatch outcomes: they are shown to the
/// operator as a transcript line and never end the session.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Empty input, or a token with no registered command.
    #[error("Command not recognized")]
    NotRecognized,

    /// A command was given the wrong number of arguments.
    #[error("Wrong amount of parameters")]
    ParametersAmount,

    /// A command argument could not be interpreted as the expected type.
    #[error("Type of command not supported")]
    TypeNotSupported,

    /// A command panicked while executing.
    #[error("command panicked: {0}")]
    CommandPanicked(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl ConsoleError {
    /// Whether this error is a dispatch outcome the session renders and
    /// survives, as opposed to a setup failure.
    pub fn is_dispatch_outcome(&self) -> bool {
        matches!(
            self,
            Self::NotRecognized
                | Self::ParametersAmount
                | Self::TypeNotSupported
                | Self::CommandPanicked(_)
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ConsoleError>;
