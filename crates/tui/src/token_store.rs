use std::{
    collections::HashMap,
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use course_client::{Storage, StorageError};
use log::{debug, warn};
use xdg::BaseDirectories;

use crate::config::XDG_PREFIX;

const SESSION_FILE: &str = "session.json";

/// Persists the session token between runs, in the cache directory
#[derive(Debug)]
pub struct TokenFile {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl TokenFile {
    pub fn open() -> Result<Self> {
        let path = BaseDirectories::with_prefix(XDG_PREFIX)?.place_cache_file(SESSION_FILE)?;
        Self::at(path)
    }

    /// Use the file at `path`. A missing or unreadable file starts out empty.
    pub fn at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let file = File::open(&path).context("error opening session file")?;
            serde_json::from_reader(&file).unwrap_or_else(|e| {
                warn!("ignoring unreadable session file: {}", e);
                HashMap::new()
            })
        } else {
            HashMap::new()
        };

        Ok(Self { path, values })
    }

    /// Write `values` to disk, and only then make them current
    fn commit(&mut self, values: HashMap<String, String>) -> Result<(), StorageError> {
        let mut file = File::create(&self.path)?;
        serde_json::to_writer(&mut file, &values)?;
        debug!("saved session to {:?}", self.path);
        self.values = values;

        Ok(())
    }
}

impl Storage for TokenFile {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.clone();
        values.insert(key.to_string(), value.to_string());
        self.commit(values)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if !self.values.contains_key(key) {
            return Ok(());
        }
        let mut values = self.values.clone();
        values.remove(key);
        self.commit(values)
    }
}
