//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget toolkits and renders into a simple framebuffer that is flushed to
//! the terminal by [`TerminalRenderer`].
//!
//! - `core` stays deterministic and free of I/O
//! - [`GameView`] is pure and unit-tested
//! - cells are 2 characters wide to keep blocks roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod theme;

pub use autotris_core as core;
pub use autotris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, ViewOptions, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use theme::{palette, Palette};
