//! Fun commands: fortune.

use rand::Rng;
use retroterm_types::error::Result;

use crate::interpreter::{Command, CommandOutput, Environment};

/// The quotations `fortune` draws from.
pub const FORTUNES: [&str; 10] = [
    "The best way to predict the future is to create it. - Peter Drucker",
    "Stay hungry, stay foolish. - Steve Jobs",
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Innovation distinguishes between a leader and a follower. - Steve Jobs",
    "The greatest glory in living lies not in never falling, but in rising every time we fall. - Nelson Mandela",
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
    "Success is not final, failure is not fatal: it is the courage to continue that counts. - Winston Churchill",
    "Life is what happens to you while you're busy making other plans. - John Lennon",
    "In the end, it's not the years in your life that count. It's the life in your years. - Abraham Lincoln",
    "The only limit to our realization of tomorrow will be our doubts of today. - Franklin D. Roosevelt",
];

/// Source of quotations for `fortune`.
pub trait FortuneSource {
    fn next_fortune(&self) -> String;
}

/// Uniform pick from [`FORTUNES`] using the thread-local RNG.
///
/// Draws are independent; the same quote may come up twice in a row.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomFortunes;

impl FortuneSource for RandomFortunes {
    fn next_fortune(&self) -> String {
        let idx = rand::rng().random_range(0..FORTUNES.len());
        FORTUNES[idx].to_string()
    }
}

// ---------------------------------------------------------------------------
// fortune
// ---------------------------------------------------------------------------

struct FortuneCmd;
impl Command for FortuneCmd {
    fn name(&self) -> &str {
        "fortune"
    }
    fn description(&self) -> &str {
        "Display a random quote or piece of wisdom"
    }
    fn usage(&self) -> &str {
        "fortune"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.fortunes.next_fortune()))
    }
}

/// Register fun commands.
pub fn register_fun_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(FortuneCmd));
}
