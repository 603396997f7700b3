//! Persistence for the settings record and the high score table.
//!
//! - [`settings`]: the settings record, defaults and lenient merging
//! - [`high_scores`]: score records, capped and sorted
//! - [`store`]: the key-value backends (files, memory) and the [`Storage`] service
//! - [`config`]: process configuration from the environment

pub mod config;
pub mod error;
pub mod high_scores;
pub mod settings;
pub mod store;

pub use config::StorageConfig;
pub use error::{Result, StorageError};
pub use high_scores::{insert_high_score, qualifies, HighScore, MAX_HIGH_SCORES};
pub use settings::{AiSettings, Controls, GameSettings, Theme};
pub use store::{FileStore, KeyValueStore, MemoryStore, Storage, HIGH_SCORES_KEY, SETTINGS_KEY};
