//! aws-env - Inject AWS Secrets Manager secrets into environment variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use aws_env::cli::output;
use aws_env::cli::{execute, Cli};
use aws_env::core::constants::{LOG_ENV, LOG_FORMAT_ENV};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("aws_env=debug")
        } else if cli.silent {
            EnvFilter::new("off")
        } else {
            EnvFilter::new("aws_env=warn")
        }
    });

    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    let silent = cli.silent;
    if let Err(e) = execute(cli) {
        if !silent {
            output::error(&e.to_string());
        }
        std::process::exit(1);
    }
}
