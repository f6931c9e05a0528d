//! Platform services for retroterm.
//!
//! The terminal core reaches the outside world only through these traits:
//! a wall clock for `date` and a cue player for keystroke sounds.

mod services;

pub use services::{
    CueService, DesktopPlatform, FixedClock, LogCue, NullCue, TimeService, Timestamp,
};
