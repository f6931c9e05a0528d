//! Platform-agnostic input event types.
//!
//! Every host maps its native keyboard and pointer input to these enums. The
//! terminal session never sees raw platform input.

/// A platform-agnostic input event delivered to a terminal session.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Character typed into the pending line.
    TextInput(char),
    /// Backspace / delete-left on the pending line.
    Backspace,
    /// Any other key press that does not edit or commit the line.
    Key(Key),
    /// Commit the pending line (Enter).
    Submit,
    /// The host's sound toggle control was activated.
    ToggleSound,
    /// User requested quit (window close, EOF, etc.).
    Quit,
}

impl InputEvent {
    /// Whether this event counts as typing activity and should play a cue.
    ///
    /// Submitting a line is deliberately silent.
    pub fn is_keystroke(&self) -> bool {
        matches!(self, Self::TextInput(_) | Self::Backspace | Self::Key(_))
    }
}

/// Non-editing keys a host may forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Tab,
    Escape,
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_ascii() {
        let e = InputEvent::TextInput('A');
        assert_eq!(e, InputEvent::TextInput('A'));
    }

    #[test]
    fn text_input_unicode() {
        let e = InputEvent::TextInput('\u{1F600}');
        if let InputEvent::TextInput(ch) = e {
            assert_eq!(ch, '\u{1F600}');
        }
    }

    #[test]
    fn keystrokes_play_cues() {
        assert!(InputEvent::TextInput('x').is_keystroke());
        assert!(InputEvent::Backspace.is_keystroke());
        assert!(InputEvent::Key(Key::Tab).is_keystroke());
    }

    #[test]
    fn submit_and_controls_are_silent() {
        assert!(!InputEvent::Submit.is_keystroke());
        assert!(!InputEvent::ToggleSound.is_keystroke());
        assert!(!InputEvent::Quit.is_keystroke());
    }

    #[test]
    fn key_hash_distinct() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Key::Up);
        set.insert(Key::Down);
        set.insert(Key::Up);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn all_event_variants_distinct() {
        let events: Vec<InputEvent> = vec![
            InputEvent::TextInput('x'),
            InputEvent::Backspace,
            InputEvent::Key(Key::Other),
            InputEvent::Submit,
            InputEvent::ToggleSound,
            InputEvent::Quit,
        ];
        for (i, a) in events.iter().enumerate() {
            for (j, b) in events.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "variants {i} and {j} should differ");
                }
            }
        }
    }
}
