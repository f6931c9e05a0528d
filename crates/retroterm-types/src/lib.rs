//! Foundation types for retroterm.
//!
//! Shared by every retroterm crate: the error type, platform-agnostic input
//! events, the sound-slot newtype and the TOML configuration.

pub mod config;
pub mod error;
pub mod input;
pub mod slot;
