//! Keyboard input mapping.
//!
//! This module provides:
//! - [`KeyBindings`]: Lane key bindings with save/load through the game config
//! - [`InputMapper`]: Raw key events to `KeyPress` actions (press only)
//! - [`ScriptedInput`]: Pre-recorded events for autoplay and replays

mod input_mapper;
mod key_config;
mod scripted;

pub use input_mapper::InputMapper;
pub use key_config::{KeyBindings, SerializableKeyCode};
pub use scripted::{ScriptedInput, autoplay_events};
