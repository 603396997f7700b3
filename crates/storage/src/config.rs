use std::env;
use std::path::PathBuf;

/// Directory name used under the home directory (or the working directory).
pub const DATA_DIR_NAME: &str = ".autotris";

/// Process-level configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding the settings and high score files
    pub data_dir: PathBuf,
    /// Fixed piece seed; a random one is used when unset
    pub seed: Option<u32>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            seed: None,
        }
    }
}

impl StorageConfig {
    /// Create from environment variables
    ///
    /// - `AUTOTRIS_DATA_DIR`: data directory (default `$HOME/.autotris`, else `./.autotris`)
    /// - `AUTOTRIS_SEED`: fixed seed for the piece bag
    pub fn from_env() -> Self {
        let data_dir = env::var("AUTOTRIS_DATA_DIR")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let seed = env::var("AUTOTRIS_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok());

        Self { data_dir, seed }
    }
}

fn default_data_dir() -> PathBuf {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".").join(DATA_DIR_NAME))
}
