//! Error types for retroterm.

use std::io;

/// Errors produced by retroterm.
///
/// The command registry renders every variant as response text, so the
/// `Display` form of `Usage` and `UnknownCommand` is what the user sees.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    /// A recognized command was called with the wrong arguments.
    #[error("{0}")]
    Usage(String),

    /// No command is registered under the typed name.
    #[error("Command not found: {0}")]
    UnknownCommand(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("audio error: {0}")]
    Audio(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermError>;
