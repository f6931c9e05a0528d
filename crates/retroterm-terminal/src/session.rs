//! Terminal session: transcript, pending input line, sound settings.
//!
//! The session is a pure accumulator driven by host events. Submitted lines
//! are echoed immediately and answered after a configurable cosmetic delay;
//! answers are resolved strictly in submission order by [`TerminalSession::pump`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use retroterm_platform::{CueService, TimeService};
use retroterm_types::config::TerminalConfig;
use retroterm_types::input::InputEvent;

use crate::commands::register_builtins;
use crate::fun_commands::{FortuneSource, RandomFortunes};
use crate::interpreter::{CommandRegistry, Environment};
use crate::settings::{SessionSettings, SettingsPatch};

/// Whether a transcript line was typed by the user or produced by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Output,
}

/// One immutable line of terminal history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    kind: LineKind,
    text: String,
}

impl TranscriptLine {
    pub fn input(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Input,
            text: text.into(),
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Output,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A submitted line waiting for its response.
#[derive(Debug)]
struct PendingSubmission {
    line: String,
    due: Instant,
}

/// A single terminal instance.
pub struct TerminalSession {
    registry: CommandRegistry,
    transcript: Vec<TranscriptLine>,
    settings: SessionSettings,
    pending_input: String,
    queue: VecDeque<PendingSubmission>,
    response_delay: Duration,
    clock: Box<dyn TimeService>,
    fortunes: Box<dyn FortuneSource>,
    cue: Box<dyn CueService>,
    revision: u64,
    epoch: u64,
}

impl TerminalSession {
    /// Create a session with the builtin commands and random fortunes.
    pub fn new(
        config: &TerminalConfig,
        clock: Box<dyn TimeService>,
        cue: Box<dyn CueService>,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);

        let mut session = Self {
            registry,
            transcript: Vec::new(),
            settings: SessionSettings::from(config),
            pending_input: String::new(),
            queue: VecDeque::new(),
            response_delay: config.response_delay(),
            clock,
            fortunes: Box::new(RandomFortunes),
            cue,
            revision: 0,
            epoch: 0,
        };
        session.prepare_cue();
        session
    }

    /// Replace the quotation source.
    pub fn with_fortunes(mut self, fortunes: Box<dyn FortuneSource>) -> Self {
        self.fortunes = fortunes;
        self
    }

    /// Replace the cosmetic response delay.
    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = delay;
        self
    }

    // -- Accessors --

    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    /// The line currently being typed.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Whether submissions are still waiting for their response.
    pub fn is_busy(&self) -> bool {
        !self.queue.is_empty()
    }

    /// When the oldest waiting submission becomes due.
    pub fn next_due(&self) -> Option<Instant> {
        self.queue.front().map(|p| p.due)
    }

    /// Incremented on every transcript change. Hosts scroll to the latest
    /// line whenever it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Incremented whenever the transcript is cleared.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn response_delay(&self) -> Duration {
        self.response_delay
    }

    // -- Host events --

    /// Dispatch a host input event.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::TextInput(ch) => self.pending_input.push(*ch),
            InputEvent::Backspace => {
                self.pending_input.pop();
            },
            InputEvent::Submit => {
                let line = std::mem::take(&mut self.pending_input);
                self.submit(&line);
            },
            InputEvent::ToggleSound => self.toggle_sound(),
            InputEvent::Key(_) | InputEvent::Quit => {},
        }
        if event.is_keystroke() {
            self.keystroke();
        }
    }

    /// Typing activity: play the active cue if sound is enabled.
    ///
    /// Playback failures are logged and otherwise ignored.
    pub fn keystroke(&mut self) {
        if !self.settings.sound_enabled {
            return;
        }
        if let Err(e) = self.cue.play(self.settings.active_slot) {
            log::warn!("keystroke cue failed: {e}");
        }
    }

    /// The sound toggle control. Same field as the `sound` command.
    pub fn toggle_sound(&mut self) {
        let enabled = !self.settings.sound_enabled;
        self.apply_patch(SettingsPatch::sound_enabled(enabled));
    }

    /// Submit a line now.
    pub fn submit(&mut self, raw: &str) {
        self.submit_at(raw, Instant::now());
    }

    /// Submit a line at `now`. Blank lines are ignored entirely.
    ///
    /// The trimmed line is echoed at once; its response appears once the
    /// response delay has elapsed and [`pump`](Self::pump) runs.
    pub fn submit_at(&mut self, raw: &str, now: Instant) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }
        self.push_line(TranscriptLine::input(line));
        self.queue.push_back(PendingSubmission {
            line: line.to_string(),
            due: now + self.response_delay,
        });
        self.pump_at(now);
    }

    /// Resolve every submission that is due now.
    pub fn pump(&mut self) -> usize {
        self.pump_at(Instant::now())
    }

    /// Resolve submissions due at or before `now`, oldest first. A later
    /// submission never overtakes an earlier one.
    pub fn pump_at(&mut self, now: Instant) -> usize {
        let mut resolved = 0;
        while self.queue.front().is_some_and(|p| p.due <= now) {
            if let Some(pending) = self.queue.pop_front() {
                self.resolve(&pending.line);
                resolved += 1;
            }
        }
        resolved
    }

    /// Resolve every waiting submission regardless of its due time.
    pub fn flush(&mut self) -> usize {
        let mut resolved = 0;
        while let Some(pending) = self.queue.pop_front() {
            self.resolve(&pending.line);
            resolved += 1;
        }
        resolved
    }

    // -- Internals --

    fn resolve(&mut self, line: &str) {
        let result = {
            let mut env = Environment {
                settings: self.settings,
                time: self.clock.as_ref(),
                fortunes: self.fortunes.as_ref(),
                raw_args: Vec::new(),
            };
            self.registry.interpret(line, &mut env)
        };

        if result.clear_transcript {
            self.transcript.clear();
            self.revision += 1;
            self.epoch += 1;
            return;
        }
        if let Some(patch) = result.settings_patch {
            self.apply_patch(patch);
        }
        self.push_line(TranscriptLine::output(result.response_text));
    }

    fn apply_patch(&mut self, patch: SettingsPatch) {
        let before = self.settings.apply(patch);
        if before.sound_enabled != self.settings.sound_enabled {
            log::info!(
                "keystroke sound {}",
                if self.settings.sound_enabled { "on" } else { "off" }
            );
        }
        if before.active_slot != self.settings.active_slot {
            log::info!("keystroke sound slot {}", self.settings.active_slot);
            self.prepare_cue();
        }
    }

    fn prepare_cue(&mut self) {
        if let Err(e) = self.cue.prepare(self.settings.active_slot) {
            log::warn!("failed to load cue {}: {e}", self.settings.active_slot);
        }
    }

    fn push_line(&mut self, line: TranscriptLine) {
        self.transcript.push(line);
        self.revision += 1;
    }
}
