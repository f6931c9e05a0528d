//! Command trait, registry, and dispatch logic.
//!
//! A submitted line is trimmed and lowercased as a whole before it is split
//! on whitespace, so both the command name and its arguments arrive in
//! lower case. The original-case arguments stay reachable through
//! [`Environment::raw_args`]. Every line yields a response: failures are
//! rendered as text.

use std::collections::HashMap;

use retroterm_platform::TimeService;
use retroterm_types::error::{Result, TermError};

use crate::fun_commands::FortuneSource;
use crate::settings::{SessionSettings, SettingsPatch};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Plain text, possibly multi-line.
    Text(String),
    /// Nothing was executed (blank line).
    None,
    /// Signal to wipe the transcript.
    Clear,
    /// Signal to update the session settings, with a confirmation message.
    Settings {
        patch: SettingsPatch,
        message: String,
    },
}

/// Context passed to every command.
pub struct Environment<'a> {
    /// Settings as they are before this command runs.
    pub settings: SessionSettings,
    /// Wall clock for `date`.
    pub time: &'a dyn TimeService,
    /// Quotation source for `fortune`.
    pub fortunes: &'a dyn FortuneSource,
    /// Arguments of the current command with their original case, set by
    /// the registry before dispatch.
    pub raw_args: Vec<String>,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types, lower case).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "echo \[text\]").
    fn usage(&self) -> &str;

    /// Lines contributed to `help`, as (usage, description) pairs.
    fn help_entries(&self) -> Vec<(&str, &str)> {
        vec![(self.usage(), self.description())]
    }

    /// Execute the command with the given (lowercased) arguments.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// The session-facing result of interpreting one line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interpretation {
    /// Text for the Output line. Empty for `clear`.
    pub response_text: String,
    /// Settings to change, if any.
    pub settings_patch: Option<SettingsPatch>,
    /// Whether the whole transcript must be wiped.
    pub clear_transcript: bool,
}

impl Interpretation {
    fn text(response_text: String) -> Self {
        Self {
            response_text,
            ..Self::default()
        }
    }
}

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
    /// Registration order, used for `help`.
    order: Vec<String>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name,
    /// keeping its original position in `help`.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_lowercase();
        if self.commands.insert(name.clone(), cmd).is_none() {
            self.order.push(name);
        }
    }

    /// Parse and execute a command line.
    ///
    /// `help` is handled by the registry itself. Unknown names fail with
    /// [`TermError::UnknownCommand`] carrying the normalized line.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let lowered = line.trim().to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return Ok(CommandOutput::None);
        };

        log::debug!("dispatch {name:?} with {} arg(s)", args.len());
        env.raw_args = line.split_whitespace().skip(1).map(str::to_string).collect();

        if name == "help" {
            return Ok(self.execute_help());
        }

        match self.commands.get(name) {
            Some(cmd) => cmd.execute(args, env),
            None => Err(TermError::UnknownCommand(tokens.join(" "))),
        }
    }

    /// Interpret a line for a session. Never fails: errors become text.
    pub fn interpret(&self, line: &str, env: &mut Environment<'_>) -> Interpretation {
        match self.execute(line, env) {
            Ok(CommandOutput::Text(text)) => Interpretation::text(text),
            Ok(CommandOutput::None) => Interpretation::default(),
            Ok(CommandOutput::Clear) => Interpretation {
                clear_transcript: true,
                ..Interpretation::default()
            },
            Ok(CommandOutput::Settings { patch, message }) => Interpretation {
                response_text: message,
                settings_patch: Some(patch),
                clear_transcript: false,
            },
            Err(e) => {
                log::debug!("command failed: {e}");
                Interpretation::text(e.to_string())
            },
        }
    }

    /// Registered commands in registration order, as (name, description).
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .map(|c| (c.name(), c.description()))
            .collect()
    }

    fn execute_help(&self) -> CommandOutput {
        let mut lines = vec![
            "Available commands:".to_string(),
            "  help - Show this help message".to_string(),
        ];
        for cmd in self.order.iter().filter_map(|name| self.commands.get(name)) {
            for (usage, description) in cmd.help_entries() {
                lines.push(format!("  {usage} - {description}"));
            }
        }
        CommandOutput::Text(lines.join("\n"))
    }
}
