//! Store configuration.
//!
//! Collects the options that decide which backend talks to Secrets Manager
//! and how it authenticates.

use std::fmt;

/// Secret store backend selection.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    /// AWS SDK when compiled in, otherwise the aws CLI
    #[default]
    Auto,
    /// AWS SDK for Rust (requires the `aws` feature)
    Sdk,
    /// The `aws` command-line tool found on PATH
    Cli,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Sdk => "sdk",
            Self::Cli => "cli",
        };
        f.write_str(name)
    }
}

/// Options used to open a secret store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Backend to use.
    pub kind: StoreKind,
    /// AWS region override.
    pub region: Option<String>,
    /// Named AWS profile.
    pub profile: Option<String>,
}

impl StoreConfig {
    /// Create a configuration for the given backend.
    pub fn new(kind: StoreKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Set the AWS region.
    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region.filter(|r| !r.is_empty());
        self
    }

    /// Set the AWS profile.
    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile.filter(|p| !p.is_empty());
        self
    }
}
