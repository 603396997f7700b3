//! Key-value backends and the storage service on top of them.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde_json::Value;

use crate::error::{Result, StorageError};
use crate::high_scores::{insert_high_score, parse_high_scores, HighScore};
use crate::settings::GameSettings;

pub const SETTINGS_KEY: &str = "tetris_settings";
pub const HIGH_SCORES_KEY: &str = "tetris_high_scores";

/// Flat string store addressed by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::io(path, err)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::io(&self.dir, e))?;

        // Write then rename so a crash never leaves a half-written record.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| StorageError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::io(&path, e))?;
        debug!("wrote {}", path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::io(path, err)),
        }
    }
}

/// In-process store for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Settings and high scores over any `KeyValueStore`.
///
/// Loads never fail: unreadable or malformed records yield defaults.
#[derive(Debug, Clone)]
pub struct Storage<S> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("failed to read {}: {}", key, err);
                None
            }
        }
    }

    pub fn load_settings(&self) -> GameSettings {
        self.read(SETTINGS_KEY)
            .map(|raw| GameSettings::from_json_lenient(&raw))
            .unwrap_or_default()
    }

    /// Store `settings` in full.
    pub fn save_settings(&mut self, settings: &GameSettings) -> Result<()> {
        let raw = serde_json::to_string(settings)?;
        self.store.set(SETTINGS_KEY, &raw)
    }

    /// Merge a partial record over the stored settings and store the result.
    pub fn update_settings(&mut self, patch: &Value) -> Result<GameSettings> {
        let merged = self.load_settings().merged_with(patch);
        self.save_settings(&merged)?;
        Ok(merged)
    }

    pub fn reset_settings(&mut self) -> Result<GameSettings> {
        let defaults = GameSettings::default();
        self.save_settings(&defaults)?;
        info!("settings reset to defaults");
        Ok(defaults)
    }

    /// Stored table, best first.
    pub fn load_high_scores(&self) -> Vec<HighScore> {
        self.read(HIGH_SCORES_KEY)
            .map(|raw| parse_high_scores(&raw))
            .unwrap_or_default()
    }

    /// Record a finished game; returns the updated table.
    pub fn save_high_score(&mut self, score: u32, level: u32, lines: u32) -> Result<Vec<HighScore>> {
        self.record_high_score(HighScore::now(score, level, lines))
    }

    pub fn record_high_score(&mut self, entry: HighScore) -> Result<Vec<HighScore>> {
        let mut table = self.load_high_scores();
        insert_high_score(&mut table, entry);
        let raw = serde_json::to_string(&table)?;
        self.store.set(HIGH_SCORES_KEY, &raw)?;
        Ok(table)
    }

    pub fn clear_high_scores(&mut self) -> Result<()> {
        self.store.remove(HIGH_SCORES_KEY)
    }
}
