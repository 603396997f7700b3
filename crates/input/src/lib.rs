//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the configured controls and produces
//! [`InputCommand`]s. Independent of any rendering code.

pub mod map;

pub use autotris_types as types;

pub use map::{key_name, should_quit, InputCommand, KeyMap};
