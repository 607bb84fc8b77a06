//! Exec mode.
//!
//! Resolves every secret reference in the current environment and replaces
//! this process with the given command, running with the resolved values.

use std::process::Command;
use std::thread;

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::cli::output::Diagnostics;
use crate::core::directive::Directive;
use crate::core::resolver::Resolver;
use crate::core::store::SecretStore;
use crate::error::{Error, Result};

/// Resolve the environment and exec `command`.
///
/// On Unix this only returns if the exec fails. Elsewhere the command is
/// spawned and this process exits with its exit code.
///
/// # Errors
///
/// Returns `Error::Usage` if `command` is empty, `Error::CommandNotFound`
/// if the program is not on PATH, and an I/O error if it cannot be started.
pub fn execute<S: SecretStore>(
    resolver: &Resolver<S>,
    diagnostics: Diagnostics,
    command: &[String],
) -> Result<()> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Usage("no command specified".to_string()))?;
    let path = which::which(program).map_err(|_| Error::CommandNotFound(program.clone()))?;

    let overrides = resolve_environment(resolver, diagnostics, environment());
    info!(
        program = %path.display(),
        resolved = overrides.len(),
        "exec mode: starting command"
    );

    let mut cmd = Command::new(&path);
    cmd.args(args);
    for (name, value) in &overrides {
        cmd.env(name, value.as_str());
    }

    run(cmd, program)
}

/// Resolve the secret references among `vars`.
///
/// Returns only the variables whose value changed, in input order. Plain
/// variables are left to be inherited. References that fail to parse or
/// resolve are reported and keep their original value. Distinct references
/// are resolved concurrently.
pub fn resolve_environment<S, I>(
    resolver: &Resolver<S>,
    diagnostics: Diagnostics,
    vars: I,
) -> Vec<(String, Zeroizing<String>)>
where
    S: SecretStore,
    I: IntoIterator<Item = (String, String)>,
{
    let directives: Vec<Directive> = vars
        .into_iter()
        .filter_map(|(name, value)| match Directive::from_pair(&name, &value) {
            Ok(directive) => Some(directive).filter(Directive::is_secret),
            Err(e) => {
                diagnostics.error(e);
                None
            }
        })
        .collect();
    debug!(references = directives.len(), "found secret references");

    let results: Vec<Result<String>> = thread::scope(|s| {
        let handles: Vec<_> = directives
            .iter()
            .map(|directive| s.spawn(move || resolver.resolve_directive(directive)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|p| std::panic::resume_unwind(p)))
            .collect()
    });

    directives
        .iter()
        .zip(results)
        .filter_map(|(directive, result)| match result {
            Ok(value) => Some((directive.name().to_string(), Zeroizing::new(value))),
            Err(e) => {
                diagnostics.error(e);
                None
            }
        })
        .collect()
}

/// Current process environment, skipping entries that are not UTF-8.
fn environment() -> impl Iterator<Item = (String, String)> {
    std::env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
}

#[cfg(unix)]
fn run(mut cmd: Command, program: &str) -> Result<()> {
    use std::os::unix::process::CommandExt;

    cmd.arg0(program);
    // exec only returns on failure
    let err = cmd.exec();
    Err(err.into())
}

#[cfg(not(unix))]
fn run(mut cmd: Command, _program: &str) -> Result<()> {
    let status = cmd.status()?;
    std::process::exit(status.code().unwrap_or(1));
}
