//! Cached secret resolution.
//!
//! The resolver fetches each secret at most once per successful lookup and
//! evaluates each `(secret, query)` pair at most once. Both caches live as
//! long as the resolver and are never invalidated: a cached query result is
//! returned even if the secret changes upstream.
//!
//! Failures are not cached. A secret that could not be fetched is fetched
//! again on its next reference, and a query that produced nothing is
//! evaluated again.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::directive::Directive;
use crate::core::query;
use crate::core::store::SecretStore;
use crate::error::{Error, Result};

type Slot = Arc<Mutex<Option<Zeroizing<String>>>>;

/// Memoization table handing out one slot per key.
///
/// The table lock is only held to look up the slot. The slot lock is held
/// while its value is computed, so concurrent callers for the same key wait
/// for the first one instead of repeating its work.
struct Cache<K> {
    slots: Mutex<HashMap<K, Slot>>,
}

impl<K: Eq + Hash> Cache<K> {
    fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    fn slot(&self, key: K) -> Slot {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(key).or_default())
    }

    /// Return the cached value for `key`, computing it with `fill` on a miss.
    ///
    /// A `None` from `fill` leaves the slot empty.
    fn get_or_fill<F>(&self, key: K, fill: F) -> Option<Zeroizing<String>>
    where
        F: FnOnce() -> Option<String>,
    {
        let slot = self.slot(key);
        let mut value = slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = value.as_ref() {
            return Some(cached.clone());
        }

        let filled = Zeroizing::new(fill()?);
        *value = Some(filled.clone());
        Some(filled)
    }

    /// Number of keys holding a value.
    #[cfg(test)]
    fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|slot| slot.lock().unwrap_or_else(PoisonError::into_inner).is_some())
            .count()
    }
}

/// Resolves secret references against a store, caching raw secrets and
/// query results for the resolver's lifetime.
pub struct Resolver<S> {
    store: S,
    raw: Cache<String>,
    queries: Cache<(String, String)>,
}

impl<S: SecretStore> Resolver<S> {
    /// Create a resolver with empty caches.
    pub fn new(store: S) -> Self {
        Self {
            store,
            raw: Cache::new(),
            queries: Cache::new(),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve a secret, optionally narrowed by a JMESPath query.
    ///
    /// Without a query the raw secret text is returned exactly as stored.
    /// With a query the secret is decoded as JSON and the result is coerced
    /// to text. Returns `None` if the secret cannot be fetched, is not JSON,
    /// the query fails, or the query result is null.
    pub fn resolve(&self, secret_name: &str, query_path: Option<&str>) -> Option<String> {
        let raw = self.get_raw(secret_name)?;
        let value = match query_path {
            None => raw,
            Some(path) => self.get_by_query(secret_name, &raw, path)?,
        };
        Some(value.as_str().to_owned())
    }

    /// Resolve the value a directive should take.
    ///
    /// Plain directives resolve to their trimmed value.
    ///
    /// # Errors
    ///
    /// Returns `Error::SecretNotFound` if a referenced secret cannot be resolved.
    pub fn resolve_directive(&self, directive: &Directive) -> Result<String> {
        let Some(secret_name) = directive.secret_name() else {
            return Ok(directive.raw_value().to_string());
        };

        self.resolve(secret_name, directive.query_path())
            .ok_or_else(|| Error::SecretNotFound {
                secret: secret_name.to_string(),
                path: directive.query_path().map(str::to_string),
            })
    }

    fn get_raw(&self, secret_name: &str) -> Option<Zeroizing<String>> {
        self.raw.get_or_fill(secret_name.to_string(), || {
            match self.store.fetch(secret_name) {
                Ok(raw) => {
                    debug!(
                        secret = secret_name,
                        backend = self.store.name(),
                        len = raw.len(),
                        "fetched secret"
                    );
                    Some(raw)
                }
                Err(e) => {
                    debug!(secret = secret_name, error = %e, "secret fetch failed");
                    None
                }
            }
        })
    }

    fn get_by_query(
        &self,
        secret_name: &str,
        raw: &str,
        query_path: &str,
    ) -> Option<Zeroizing<String>> {
        let key = (secret_name.to_string(), query_path.to_string());
        self.queries.get_or_fill(key, || match query::search(raw, query_path) {
            Ok(value) => Some(value.to_string()),
            Err(failure) => {
                debug!(
                    secret = secret_name,
                    path = query_path,
                    reason = %failure,
                    "query produced no value"
                );
                None
            }
        })
    }
}
