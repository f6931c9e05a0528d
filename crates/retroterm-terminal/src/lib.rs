//! Command interpreter and terminal session.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The interpreter parses input
//! lines, resolves the command name, and dispatches `execute()`. A
//! `TerminalSession` owns the registry together with the transcript and the
//! keystroke sound settings, and is driven by host input events.

mod commands;
pub mod date_format;
pub mod fun_commands;
mod interpreter;
pub mod session;
pub mod settings;
pub mod sound_commands;
pub mod system_commands;

/// Register all built-in commands (date, clear, echo, fortune, sound) into a registry.
pub use commands::register_builtins;
/// Quotation source for `fortune` and the builtin quote set.
pub use fun_commands::{FORTUNES, FortuneSource, RandomFortunes};
/// Register the `fortune` command into a registry.
pub use fun_commands::register_fun_commands;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text or signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Environment passed to every command.
pub use interpreter::Environment;
/// Result of interpreting one submitted line.
pub use interpreter::Interpretation;
/// One terminal instance and its transcript.
pub use session::{LineKind, TerminalSession, TranscriptLine};
/// Keystroke sound settings and partial updates to them.
pub use settings::{SessionSettings, SettingsPatch};
/// Register the `sound` and `soundeffect` commands into a registry.
pub use sound_commands::register_sound_commands;
/// Register the `date` command into a registry.
pub use system_commands::register_system_commands;
