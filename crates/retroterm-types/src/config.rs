//! Terminal configuration loaded from TOML.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, TermError};
use crate::slot::SoundSlot;

/// Number of keystroke cue assets, one per slot.
pub const CUE_ASSET_COUNT: usize = 4;

/// Session-level settings for a retroterm instance (`retroterm.toml`).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TerminalConfig {
    /// Cosmetic delay between submitting a line and its response appearing.
    #[serde(default = "default_delay_ms")]
    pub response_delay_ms: u64,
    /// Whether keystroke cues start enabled.
    #[serde(default = "yes")]
    pub sound_enabled: bool,
    /// Initially active cue slot.
    #[serde(default)]
    pub sound_slot: SoundSlot,
    /// Asset path for each slot, in slot order.
    #[serde(default = "default_cue_assets")]
    pub cue_assets: Vec<String>,
    /// Prompt shown before echoed input lines.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_delay_ms() -> u64 {
    100
}
fn yes() -> bool {
    true
}
fn default_cue_assets() -> Vec<String> {
    (1..=CUE_ASSET_COUNT)
        .map(|n| format!("/keyboard-sound-{n}.mp3"))
        .collect()
}
fn default_prompt() -> String {
    "$ ".to_string()
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: default_delay_ms(),
            sound_enabled: true,
            sound_slot: SoundSlot::DEFAULT,
            cue_assets: default_cue_assets(),
            prompt: default_prompt(),
        }
    }
}

impl TerminalConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::info!("Loaded terminal config from {}", path.display());
        Ok(config)
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.cue_assets.len() != CUE_ASSET_COUNT {
            return Err(TermError::Config(format!(
                "cue_assets must list exactly {CUE_ASSET_COUNT} paths, got {}",
                self.cue_assets.len()
            )));
        }
        if let Some(i) = self.cue_assets.iter().position(|p| p.trim().is_empty()) {
            return Err(TermError::Config(format!("cue_assets[{i}] is empty")));
        }
        Ok(())
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = TerminalConfig::default();
        assert_eq!(cfg.response_delay_ms, 100);
        assert!(cfg.sound_enabled);
        assert_eq!(cfg.sound_slot.get(), 1);
        assert_eq!(cfg.prompt, "$ ");
        assert_eq!(cfg.cue_assets[0], "/keyboard-sound-1.mp3");
        assert_eq!(cfg.cue_assets[3], "/keyboard-sound-4.mp3");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = TerminalConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.response_delay_ms, 100);
        assert_eq!(cfg.cue_assets.len(), CUE_ASSET_COUNT);
    }

    #[test]
    fn partial_document() {
        let cfg = TerminalConfig::from_toml_str(
            "response_delay_ms = 0\nsound_enabled = false\nsound_slot = 3\n",
        )
        .unwrap();
        assert_eq!(cfg.response_delay(), Duration::ZERO);
        assert!(!cfg.sound_enabled);
        assert_eq!(cfg.sound_slot.get(), 3);
        assert_eq!(cfg.cue_assets[cfg.sound_slot.index()], "/keyboard-sound-3.mp3");
    }

    #[test]
    fn out_of_range_slot_rejected() {
        let err = TerminalConfig::from_toml_str("sound_slot = 5").unwrap_err();
        assert!(matches!(err, TermError::TomlParse(_)));
    }

    #[test]
    fn wrong_asset_count_rejected() {
        let err = TerminalConfig::from_toml_str("cue_assets = [\"a.mp3\", \"b.mp3\"]").unwrap_err();
        match err {
            TermError::Config(msg) => assert!(msg.contains("exactly 4")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn blank_asset_rejected() {
        let err =
            TerminalConfig::from_toml_str("cue_assets = [\"a\", \" \", \"c\", \"d\"]").unwrap_err();
        match err {
            TermError::Config(msg) => assert!(msg.contains("cue_assets[1]")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(TerminalConfig::from_toml_str("volume = 11").is_err());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = TerminalConfig::load(Path::new("/nonexistent/retroterm.toml")).unwrap_err();
        assert!(matches!(err, TermError::Io(_)));
    }
}
