//! aws-env - Inject AWS Secrets Manager secrets into environment variables.
//!
//! Values of the form `secretsmanager://SECRET[##QUERY]` are replaced by the
//! referenced secret, optionally narrowed by a JMESPath query.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── pipe          # Resolve NAME=VALUE lines from stdin
//! │   ├── exec          # Resolve the environment and exec a command
//! │   └── output        # Diagnostics on stderr
//! └── core/             # Core library components
//!     ├── directive     # NAME=VALUE and reference parsing
//!     ├── query         # JMESPath evaluation and coercion
//!     ├── resolver      # Cached secret resolution
//!     ├── config        # Store configuration
//!     └── store/        # Secret store backends
//!         ├── mod       # SecretStore trait
//!         ├── aws       # AWS SDK (feature `aws`)
//!         ├── cli       # aws command-line tool
//!         └── memory    # In-process map
//! ```
//!
//! # Example
//!
//! ```
//! use aws_env::core::directive::Directive;
//! use aws_env::core::resolver::Resolver;
//! use aws_env::core::store::MemoryStore;
//!
//! let store = MemoryStore::from_pairs([("app/db", r#"{"user": "admin", "port": 5432}"#)]);
//! let resolver = Resolver::new(store);
//!
//! let directive = Directive::parse("DB_PORT=secretsmanager://app/db##port").unwrap();
//! assert_eq!(resolver.resolve_directive(&directive).unwrap(), "5432");
//! ```

pub mod cli;
pub mod core;
pub mod error;
