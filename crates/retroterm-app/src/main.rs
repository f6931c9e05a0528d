//! retroterm desktop entry point.
//!
//! Line-oriented front end: each line read from stdin is replayed to the
//! session as keystrokes followed by a submit. Ctrl-S on a line toggles
//! keystroke sound, Ctrl-D or end of input quits.

mod input;
mod render;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use render::Screen;
use retroterm_platform::{DesktopPlatform, LogCue};
use retroterm_terminal::TerminalSession;
use retroterm_types::config::TerminalConfig;
use retroterm_types::input::InputEvent;

/// Resolve config from CLI arg, RETROTERM_CONFIG env var, or defaults.
fn load_config() -> Result<TerminalConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("RETROTERM_CONFIG").ok())
        .map(PathBuf::from);
    match path {
        Some(path) => TerminalConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display())),
        None => {
            log::info!("No config given, using defaults");
            Ok(TerminalConfig::default())
        },
    }
}

/// Block until every queued response has been resolved.
fn drain(session: &mut TerminalSession) {
    while let Some(due) = session.next_due() {
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }
        session.pump();
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!(
        "Starting retroterm (delay {}ms, sound {}, slot {})",
        config.response_delay_ms,
        if config.sound_enabled { "on" } else { "off" },
        config.sound_slot,
    );

    let mut session = TerminalSession::new(
        &config,
        Box::new(DesktopPlatform::new()),
        Box::new(LogCue::new(config.cue_assets.clone())),
    );

    let stdin = io::stdin();
    let mut screen = Screen::new(config.prompt.clone(), !stdin.is_terminal());
    let mut out = io::stdout().lock();

    writeln!(out, "retroterm -- Type 'help' for commands")?;
    let mut line = String::new();
    'running: loop {
        screen.show_prompt(&mut out)?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        for event in input::line_events(&line) {
            if event == InputEvent::Quit {
                break 'running;
            }
            session.handle_input(&event);
        }
        // Echo shows at once; the response follows after the delay.
        screen.sync(&session, &mut out)?;
        drain(&mut session);
        screen.sync(&session, &mut out)?;
    }

    session.flush();
    screen.sync(&session, &mut out)?;
    writeln!(out)?;
    log::info!("retroterm shut down cleanly");
    Ok(())
}
