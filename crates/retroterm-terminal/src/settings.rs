//! Sound-related session settings.

use retroterm_types::config::TerminalConfig;
use retroterm_types::slot::SoundSlot;

/// Per-session keystroke sound settings. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Whether keystroke cues play at all.
    pub sound_enabled: bool,
    /// Which cue resource plays.
    pub active_slot: SoundSlot,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            active_slot: SoundSlot::DEFAULT,
        }
    }
}

impl From<&TerminalConfig> for SessionSettings {
    fn from(config: &TerminalConfig) -> Self {
        Self {
            sound_enabled: config.sound_enabled,
            active_slot: config.sound_slot,
        }
    }
}

/// Partial update to [`SessionSettings`] requested by a command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub sound_enabled: Option<bool>,
    pub active_slot: Option<SoundSlot>,
}

impl SettingsPatch {
    pub fn sound_enabled(enabled: bool) -> Self {
        Self {
            sound_enabled: Some(enabled),
            ..Self::default()
        }
    }

    pub fn active_slot(slot: SoundSlot) -> Self {
        Self {
            active_slot: Some(slot),
            ..Self::default()
        }
    }
}

impl SessionSettings {
    /// Apply a patch, returning the settings as they were before.
    pub fn apply(&mut self, patch: SettingsPatch) -> SessionSettings {
        let previous = *self;
        if let Some(enabled) = patch.sound_enabled {
            self.sound_enabled = enabled;
        }
        if let Some(slot) = patch.active_slot {
            self.active_slot = slot;
        }
        previous
    }
}
