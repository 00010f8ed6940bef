//! Persistent key-value storage.
//!
//! [`Storage`] is the raw string store; [`LocalStorage`] layers JSON
//! serialization on top and reports every outcome as an [`ApiResponse`].

mod file;
mod memory;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::api::ApiResponse;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key holding the serialized task collection.
pub const TASKS_KEY: &str = "dreamAppTasks";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage entry '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse '{key}': {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage quota exceeded writing '{key}': {needed} bytes, {limit} allowed")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("Invalid storage key '{key}'")]
    InvalidKey { key: String },
}

/// String key-value store.
pub trait Storage: Send + Sync {
    /// `Ok(None)` when the key was never written or has been removed.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// JSON persistence over a [`Storage`] backend.
#[derive(Clone)]
pub struct LocalStorage {
    backend: Arc<dyn Storage>,
}

impl LocalStorage {
    pub fn new(backend: impl Storage + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn from_shared(backend: Arc<dyn Storage>) -> Self {
        Self { backend }
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, data: &T) -> ApiResponse<()> {
        let result = serde_json::to_string(data)
            .map_err(|source| StorageError::Serialize {
                key: key.to_string(),
                source,
            })
            .and_then(|json| self.backend.set_item(key, &json));
        report(result.map(|()| None))
    }

    /// A key that was never written yields `success == false` with neither
    /// data nor error.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> ApiResponse<T> {
        let result = self.backend.get_item(key).and_then(|raw| {
            raw.map(|json| {
                serde_json::from_str(&json).map_err(|source| StorageError::Deserialize {
                    key: key.to_string(),
                    source,
                })
            })
            .transpose()
        });
        match result {
            Ok(None) => ApiResponse::missing(),
            other => report(other),
        }
    }

    pub fn remove(&self, key: &str) -> ApiResponse<()> {
        report(self.backend.remove_item(key).map(|()| None))
    }
}

fn report<T>(result: Result<Option<T>, StorageError>) -> ApiResponse<T> {
    match result {
        Ok(Some(data)) => ApiResponse::ok(data),
        Ok(None) => ApiResponse::done(),
        Err(err) => {
            tracing::error!(error = %err, "LocalStorage error");
            ApiResponse::failure(err.to_string())
        }
    }
}
