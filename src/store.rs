//! Key-value persistence for the high score.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;

/// Key the high score is stored under.
pub const HIGH_SCORE_KEY: &str = "flappyHighScore";

pub trait HighScoreStore {
    fn get(&self, key: &str) -> Option<u32>;
    fn set(&mut self, key: &str, value: u32) -> io::Result<()>;
}

/// Store backed by a pretty-printed JSON object of key to integer.
///
/// The whole file is rewritten on every `set`, so the file always matches
/// what `get` returns.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, u32>,
}

impl JsonFileStore {
    /// Loads `path`, starting empty if it is missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                warn!("Ignoring unreadable store {}: {err}", path.display());
                BTreeMap::new()
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                warn!("Could not read store {}: {err}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) -> io::Result<()> {
        self.entries.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}

/// Non-persistent store, used when no data directory can be found.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, u32>,
}

impl HighScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) -> io::Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
