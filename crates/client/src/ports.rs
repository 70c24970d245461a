//! Capabilities the client needs from wherever it runs.
//!
//! The terminal front end implements these against files and its own views;
//! tests implement them in memory.
use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("couldn't persist storage: {}", .0)]
    IOError(#[from] std::io::Error),

    #[error("couldn't encode storage: {}", .0)]
    SerdeError(#[from] serde_json::Error),
}

/// A persistent string key-value store, like a browser's local storage
pub trait Storage {
    /// Read a value. A missing key is `None`, never an error.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing whatever was there
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value. Removing a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// User-facing notices and moving between views
pub trait Navigator {
    /// Show a blocking notice
    fn alert(&mut self, message: &str);

    /// Move to the view at `path`, e.g. [`crate::LOGIN_PATH`]
    fn navigate(&mut self, path: &str);
}

/// The page the course list is rendered into
pub trait Page {
    /// Replace everything inside the container `container_id` with `html`
    fn replace_contents(&mut self, container_id: &str, html: String);
}

/// In-memory [`Storage`]. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `key = value`
    pub fn with(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}
