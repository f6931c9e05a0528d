//! Incremental transcript rendering onto a byte stream.

use std::io::{self, Write};

use retroterm_terminal::{LineKind, TerminalSession};

/// ANSI: erase the display and home the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Tracks how much of the transcript has been written out.
///
/// Lines are immutable once appended, so only the tail past `rendered` is
/// ever written. A change of the session epoch means the transcript was
/// cleared and the screen is wiped before writing again.
pub struct Screen {
    prompt: String,
    echo_input: bool,
    rendered: usize,
    epoch: u64,
}

impl Screen {
    /// `echo_input` controls whether input lines are written back. An
    /// interactive terminal already shows what the user typed.
    pub fn new(prompt: impl Into<String>, echo_input: bool) -> Self {
        Self {
            prompt: prompt.into(),
            echo_input,
            rendered: 0,
            epoch: 0,
        }
    }

    /// Write every transcript line not yet shown.
    pub fn sync(&mut self, session: &TerminalSession, out: &mut impl Write) -> io::Result<()> {
        if session.epoch() != self.epoch {
            self.epoch = session.epoch();
            self.rendered = 0;
            out.write_all(CLEAR_SCREEN.as_bytes())?;
        }

        for line in session.transcript().iter().skip(self.rendered) {
            match line.kind() {
                LineKind::Input if self.echo_input => {
                    writeln!(out, "{}{}", self.prompt, line.text())?
                },
                LineKind::Input => {},
                LineKind::Output => writeln!(out, "{}", line.text())?,
            }
        }
        self.rendered = session.transcript().len();
        out.flush()
    }

    /// Write the prompt for the next line.
    pub fn show_prompt(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", self.prompt)?;
        out.flush()
    }
}
