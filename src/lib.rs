//! autotris (workspace facade crate).
//!
//! Re-exports the member crates under one name so binaries, integration
//! tests and benches can use `autotris::{core, engine, input, storage, term, types}`.

pub use autotris_core as core;
pub use autotris_engine as engine;
pub use autotris_input as input;
pub use autotris_storage as storage;
pub use autotris_term as term;
pub use autotris_types as types;
