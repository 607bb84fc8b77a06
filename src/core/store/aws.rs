//! AWS SDK secret store backend.
//!
//! Fetches secrets with the `GetSecretValue` API.
//! Enable with `--features aws`.
//!
//! Credentials come from the default provider chain (environment variables,
//! shared config and credentials files, SSO, instance metadata).

use aws_sdk_secretsmanager::Client;
use tracing::trace;

use super::SecretStore;
use crate::core::config::StoreConfig;
use crate::error::{Result, StoreError};

/// Secret store backed by the AWS SDK for Rust.
///
/// The SDK is async; the store owns a current-thread runtime and blocks on
/// each request so callers stay synchronous.
pub struct AwsSecretsManager {
    runtime: tokio::runtime::Runtime,
    client: Client,
}

impl AwsSecretsManager {
    /// Load AWS configuration and build a client.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Runtime` if the tokio runtime cannot be created.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Runtime(e.to_string()))?;

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }

        let sdk_config = runtime.block_on(loader.load());
        trace!(region = ?sdk_config.region(), "loaded AWS configuration");

        Ok(Self {
            runtime,
            client: Client::new(&sdk_config),
        })
    }
}

impl SecretStore for AwsSecretsManager {
    fn name(&self) -> &'static str {
        "aws-sdk"
    }

    fn fetch(&self, secret_name: &str) -> Result<String> {
        trace!(secret = secret_name, "fetching with AWS SDK");

        let response = self
            .runtime
            .block_on(
                self.client
                    .get_secret_value()
                    .secret_id(secret_name)
                    .send(),
            )
            .map_err(|e| StoreError::Failed {
                name: secret_name.to_string(),
                message: format!("AWS Secrets Manager error: {}", e),
            })?;

        let secret = response
            .secret_string()
            .ok_or_else(|| StoreError::Failed {
                name: secret_name.to_string(),
                message: "secret has no string value (may be binary)".to_string(),
            })?
            .to_string();

        trace!(secret = secret_name, len = secret.len(), "fetched with AWS SDK");
        Ok(secret)
    }
}
