//! In-memory secret store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use zeroize::Zeroizing;

use super::SecretStore;
use crate::error::{Result, StoreError};

/// Secret store backed by a map held in process memory.
///
/// Counts every `fetch` call so callers can observe caching behavior.
#[derive(Default)]
pub struct MemoryStore {
    secrets: RwLock<HashMap<String, Zeroizing<String>>>,
    fetches: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        for (name, value) in pairs {
            store.insert(name, value);
        }
        store
    }

    /// Insert or replace a secret.
    pub fn insert(&self, name: impl Into<String>, value: impl Into<String>) {
        self.secrets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), Zeroizing::new(value.into()));
    }

    /// Remove a secret.
    pub fn remove(&self, name: &str) {
        self.secrets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }

    /// Number of `fetch` calls made so far, successful or not.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl SecretStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn fetch(&self, secret_name: &str) -> Result<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.secrets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(secret_name)
            .map(|value| value.as_str().to_owned())
            .ok_or_else(|| StoreError::NotFound(secret_name.to_string()).into())
    }
}
