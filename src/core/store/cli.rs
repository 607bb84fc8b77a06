//! AWS CLI secret store backend.
//!
//! Fetches secrets by running `aws secretsmanager get-secret-value`.
//!
//! ## Requirements
//!
//! - `aws` CLI v2 must be installed and on PATH
//! - The caller needs `secretsmanager:GetSecretValue` on the secret

use std::process::{Command, Stdio};
use tracing::trace;

use super::SecretStore;
use crate::core::config::StoreConfig;
use crate::core::constants::AWS_CLI;
use crate::error::{Result, StoreError};

/// Secret store that delegates to the `aws` command-line tool.
#[derive(Debug, Clone)]
pub struct AwsCli {
    program: String,
    region: Option<String>,
    profile: Option<String>,
}

impl AwsCli {
    /// Create a CLI store using the region and profile from `config`.
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            program: AWS_CLI.to_string(),
            region: config.region.clone(),
            profile: config.profile.clone(),
        }
    }

    /// Use a different executable in place of `aws`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments passed to the CLI for one secret.
    fn args(&self, secret_name: &str) -> Vec<String> {
        let mut args = vec![
            "secretsmanager".to_string(),
            "get-secret-value".to_string(),
            "--secret-id".to_string(),
            secret_name.to_string(),
            "--query".to_string(),
            "SecretString".to_string(),
            "--output".to_string(),
            "json".to_string(),
        ];

        if let Some(region) = &self.region {
            args.push("--region".to_string());
            args.push(region.clone());
        }

        if let Some(profile) = &self.profile {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }

        args
    }
}

impl SecretStore for AwsCli {
    fn name(&self) -> &'static str {
        "aws-cli"
    }

    fn fetch(&self, secret_name: &str) -> Result<String> {
        trace!(secret = secret_name, program = %self.program, "fetching with aws CLI");

        let output = Command::new(&self.program)
            .args(self.args(secret_name))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| StoreError::Failed {
                name: secret_name.to_string(),
                message: format!("failed to execute {}: {}", self.program, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StoreError::Failed {
                name: secret_name.to_string(),
                message: stderr.trim().to_string(),
            }
            .into());
        }

        // `SecretString` is null for binary-only secrets
        let secret = serde_json::from_slice::<Option<String>>(&output.stdout)
            .map_err(|e| StoreError::Failed {
                name: secret_name.to_string(),
                message: format!("unexpected aws CLI output: {}", e),
            })?
            .ok_or_else(|| StoreError::Failed {
                name: secret_name.to_string(),
                message: "secret has no string value (may be binary)".to_string(),
            })?;

        trace!(secret = secret_name, len = secret.len(), "fetched with aws CLI");
        Ok(secret)
    }
}
