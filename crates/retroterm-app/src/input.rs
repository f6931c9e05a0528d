//! Translate raw stdin lines into terminal input events.

use retroterm_types::input::{InputEvent, Key};

/// Ctrl-D. Ends the session.
const END_OF_TRANSMISSION: char = '\x04';
/// Ctrl-S. Toggles keystroke sound without touching the transcript.
const TOGGLE_SOUND: char = '\x13';

/// Map one line read from stdin to the events a keyboard would have sent.
///
/// Every character becomes a keystroke and the line ends with `Submit`.
/// Control characters map to their keys. A Ctrl-D stops translation and
/// yields `Quit` instead of `Submit`.
pub fn line_events(line: &str) -> Vec<InputEvent> {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut events = Vec::with_capacity(line.len() + 1);
    for ch in line.chars() {
        let event = match ch {
            END_OF_TRANSMISSION => {
                events.push(InputEvent::Quit);
                return events;
            },
            TOGGLE_SOUND => InputEvent::ToggleSound,
            '\t' => InputEvent::Key(Key::Tab),
            '\x1b' => InputEvent::Key(Key::Escape),
            '\x08' | '\x7f' => InputEvent::Backspace,
            c if c.is_control() => InputEvent::Key(Key::Other),
            c => InputEvent::TextInput(c),
        };
        events.push(event);
    }
    events.push(InputEvent::Submit);
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_then_submit() {
        assert_eq!(
            line_events("ls\n"),
            vec![
                InputEvent::TextInput('l'),
                InputEvent::TextInput('s'),
                InputEvent::Submit,
            ]
        );
    }

    #[test]
    fn empty_line_is_bare_submit() {
        assert_eq!(line_events("\r\n"), vec![InputEvent::Submit]);
        assert_eq!(line_events(""), vec![InputEvent::Submit]);
    }

    #[test]
    fn control_characters() {
        assert_eq!(
            line_events("a\x7fb\x08\t\x1b\x01"),
            vec![
                InputEvent::TextInput('a'),
                InputEvent::Backspace,
                InputEvent::TextInput('b'),
                InputEvent::Backspace,
                InputEvent::Key(Key::Tab),
                InputEvent::Key(Key::Escape),
                InputEvent::Key(Key::Other),
                InputEvent::Submit,
            ]
        );
    }

    #[test]
    fn toggle_sound_key() {
        assert_eq!(
            line_events("\x13"),
            vec![InputEvent::ToggleSound, InputEvent::Submit]
        );
    }

    #[test]
    fn ctrl_d_quits_without_submit() {
        assert_eq!(
            line_events("ab\x04cd"),
            vec![
                InputEvent::TextInput('a'),
                InputEvent::TextInput('b'),
                InputEvent::Quit,
            ]
        );
    }

    #[test]
    fn unicode_is_text() {
        assert_eq!(
            line_events("é"),
            vec![InputEvent::TextInput('é'), InputEvent::Submit]
        );
    }
}
