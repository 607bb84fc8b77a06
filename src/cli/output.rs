//! Diagnostics written to stderr.
//!
//! Stdout carries resolved assignments in pipe mode, so every message here
//! goes to stderr. Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Yellow: warnings

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ secret app/db (path=user) not found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message to stderr (yellow).
///
/// Example: `⚠ -e is only valid in pipe mode; ignoring it`
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow().for_stderr(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Diagnostics sink that honors `--silent`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    silent: bool,
}

impl Diagnostics {
    pub fn new(silent: bool) -> Self {
        Self { silent }
    }

    pub fn error(&self, msg: impl std::fmt::Display) {
        if !self.silent {
            error(&msg.to_string());
        }
    }

    pub fn warn(&self, msg: impl std::fmt::Display) {
        if !self.silent {
            warn(&msg.to_string());
        }
    }
}
