//! Secret store backends.
//!
//! A store performs the single remote call the resolver depends on:
//! fetching the raw text of a secret by name.
//!
//! ## Backends
//!
//! - **sdk**: Feature-gated (`aws`). Uses the AWS SDK for Rust.
//! - **cli**: Always available. Shells out to the `aws` command-line tool.
//! - **memory**: In-process map, for tests and pre-loaded secrets.

use tracing::debug;

use crate::core::config::{StoreConfig, StoreKind};
use crate::error::Result;

#[cfg(feature = "aws")]
mod aws;
mod cli;
mod memory;

#[cfg(feature = "aws")]
pub use aws::AwsSecretsManager;
pub use cli::AwsCli;
pub use memory::MemoryStore;

/// Remote secret store capability.
///
/// Implementations must be shareable across threads; the resolver may call
/// `fetch` concurrently for different secret names.
pub trait SecretStore: Send + Sync {
    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Fetch the raw stored text of a secret.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the secret is missing, access is denied, or
    /// the transport fails.
    fn fetch(&self, secret_name: &str) -> Result<String>;
}

impl<T: SecretStore + ?Sized> SecretStore for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fetch(&self, secret_name: &str) -> Result<String> {
        (**self).fetch(secret_name)
    }
}

/// Open the store selected by `config`.
///
/// # Errors
///
/// Returns `StoreError::Unavailable` if the SDK backend is requested but
/// not compiled in, or an error from the backend's initialization.
pub fn open(config: &StoreConfig) -> Result<Box<dyn SecretStore>> {
    let store: Box<dyn SecretStore> = match config.kind {
        StoreKind::Auto => default_store(config)?,
        StoreKind::Sdk => sdk_store(config)?,
        StoreKind::Cli => Box::new(AwsCli::new(config)),
    };
    debug!(kind = %config.kind, backend = store.name(), "opened secret store");
    Ok(store)
}

#[cfg(feature = "aws")]
fn default_store(config: &StoreConfig) -> Result<Box<dyn SecretStore>> {
    sdk_store(config)
}

#[cfg(not(feature = "aws"))]
fn default_store(config: &StoreConfig) -> Result<Box<dyn SecretStore>> {
    Ok(Box::new(AwsCli::new(config)))
}

#[cfg(feature = "aws")]
fn sdk_store(config: &StoreConfig) -> Result<Box<dyn SecretStore>> {
    Ok(Box::new(AwsSecretsManager::new(config)?))
}

#[cfg(not(feature = "aws"))]
fn sdk_store(_config: &StoreConfig) -> Result<Box<dyn SecretStore>> {
    Err(crate::error::StoreError::Unavailable(
        "sdk backend requires building with `--features aws`".to_string(),
    )
    .into())
}
