//! Command-line interface.

pub mod exec;
pub mod output;
pub mod pipe;

use std::io;

use clap::Parser;

use crate::cli::output::Diagnostics;
use crate::cli::pipe::LineFormat;
use crate::core::config::{StoreConfig, StoreKind};
use crate::core::resolver::Resolver;
use crate::core::store;
use crate::error::Result;

/// aws-env - Inject AWS Secrets Manager secrets into environment variables.
#[derive(Parser, Debug)]
#[command(
    name = "aws-env",
    about = "Resolve secretsmanager:// references into environment variables",
    version,
    after_help = "References: NAME=secretsmanager://SECRET or NAME=secretsmanager://SECRET##JMESPATH"
)]
pub struct Cli {
    /// Pipe mode: read NAME=VALUE lines from stdin and print resolved assignments
    #[arg(short, long)]
    pub pipe: bool,

    /// Emit ARRAY[NAME]=VALUE for a Bash associative array (pipe mode only)
    #[arg(short = 'a', long = "array", value_name = "ARRAY")]
    pub array: Option<String>,

    /// Prefix each assignment with `export` (pipe mode only)
    #[arg(short, long)]
    pub export: bool,

    /// Do not print warnings or errors to stderr
    #[arg(short, long)]
    pub silent: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// AWS region to query
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// AWS named profile
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Secret store backend
    #[arg(long, value_enum, default_value_t = StoreKind::Auto)]
    pub store: StoreKind,

    /// Command and arguments to exec with resolved environment
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// Store configuration derived from the flags.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.store)
            .with_region(self.region.clone())
            .with_profile(self.profile.clone())
    }
}

/// Execute the selected mode.
pub fn execute(cli: Cli) -> Result<()> {
    let diagnostics = Diagnostics::new(cli.silent);
    let resolver = Resolver::new(store::open(&cli.store_config())?);

    if cli.pipe {
        let format = LineFormat::new(cli.array, cli.export)?;
        let stdin = io::stdin();
        let stdout = io::stdout();
        pipe::execute(
            &resolver,
            &format,
            diagnostics,
            stdin.lock(),
            stdout.lock(),
        )?;
        return Ok(());
    }

    if cli.array.is_some() {
        diagnostics.warn("-a is only valid in pipe mode; ignoring it");
    }
    if cli.export {
        diagnostics.warn("-e is only valid in pipe mode; ignoring it");
    }
    exec::execute(&resolver, diagnostics, &cli.command)
}
