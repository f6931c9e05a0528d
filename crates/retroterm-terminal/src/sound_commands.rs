//! Keystroke sound commands: sound, soundeffect.

use retroterm_types::error::{Result, TermError};
use retroterm_types::slot::SoundSlot;

use crate::interpreter::{Command, CommandOutput, Environment};
use crate::settings::SettingsPatch;

/// Reply to a malformed `soundeffect`. The advertised range lags the real
/// one (slot 4 is accepted); the text is kept as users have seen it.
pub const SOUNDEFFECT_SYNTAX_ERROR: &str = "Invalid syntax. Use 'soundeffect [1-3]'.";

// ---------------------------------------------------------------------------
// sound
// ---------------------------------------------------------------------------

struct SoundCmd;
impl Command for SoundCmd {
    fn name(&self) -> &str {
        "sound"
    }
    fn description(&self) -> &str {
        "Toggle keyboard sound effects"
    }
    fn usage(&self) -> &str {
        "sound"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let enabled = !env.settings.sound_enabled;
        let state = if enabled { "enabled" } else { "disabled" };
        Ok(CommandOutput::Settings {
            patch: SettingsPatch::sound_enabled(enabled),
            message: format!("Sound effects {state}."),
        })
    }
}

// ---------------------------------------------------------------------------
// soundeffect
// ---------------------------------------------------------------------------

struct SoundEffectCmd;
impl Command for SoundEffectCmd {
    fn name(&self) -> &str {
        "soundeffect"
    }
    fn description(&self) -> &str {
        "Switch between different keyboard sound effects"
    }
    fn usage(&self) -> &str {
        "soundeffect [1-4]"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let slot = match args {
            [n] => n.parse::<SoundSlot>().ok(),
            _ => None,
        };
        let Some(slot) = slot else {
            return Err(TermError::Usage(SOUNDEFFECT_SYNTAX_ERROR.to_string()));
        };
        Ok(CommandOutput::Settings {
            patch: SettingsPatch::active_slot(slot),
            message: format!("Switched to sound effect {slot}."),
        })
    }
}

/// Register sound commands.
pub fn register_sound_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(SoundCmd));
    reg.register(Box::new(SoundEffectCmd));
}
