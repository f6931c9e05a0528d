//! Clock commands: date.

use retroterm_types::error::{Result, TermError};

use crate::date_format;
use crate::interpreter::{Command, CommandOutput, Environment};

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Display current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn help_entries(&self) -> Vec<(&str, &str)> {
        vec![
            (self.usage(), self.description()),
            ("date +FORMAT", "Display date in specified format"),
        ]
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        // Escapes are case-sensitive (%M vs %m), so the pattern is read from
        // the original-case argument. Only the first argument matters.
        let pattern = match env.raw_args.first() {
            None => None,
            Some(arg) => match arg.strip_prefix('+') {
                Some(pattern) => Some(pattern),
                None => {
                    return Err(TermError::Usage(
                        "Invalid date format. Use 'date +FORMAT'.".to_string(),
                    ));
                },
            },
        };

        let now = env.time.now()?;
        let text = match pattern {
            Some(pattern) => date_format::format(pattern, &now),
            None => date_format::long_form(&now),
        };
        Ok(CommandOutput::Text(text))
    }
}

/// Register clock commands.
pub fn register_system_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(DateCmd));
}
