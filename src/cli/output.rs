//! Output formatting for the CLI
//!
//! All user-facing text goes through [`OutputFormatter`] so the `--json` and
//! `--no-color` flags behave consistently across commands. In JSON mode the
//! human-readable messages are suppressed and each command emits a single
//! JSON document instead.

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Formats command output according to the global CLI flags
#[derive(Debug, Clone, Copy)]
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Create a formatter from the global flags
    #[must_use]
    pub const fn new(json: bool, no_color: bool) -> Self {
        Self { json, no_color }
    }

    /// Whether JSON mode is active
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success message (suppressed in JSON mode)
    pub fn success(&self, message: &str) {
        if self.json {
            return;
        }
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.green());
        }
    }

    /// Print an informational message (suppressed in JSON mode)
    pub fn info(&self, message: &str) {
        if self.json {
            return;
        }
        println!("{message}");
    }

    /// Print a warning (suppressed in JSON mode)
    pub fn warning(&self, message: &str) {
        if self.json {
            return;
        }
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.yellow());
        }
    }

    /// Print an error message to stderr
    pub fn error(&self, message: &str) {
        if self.no_color || self.json {
            eprintln!("Error: {message}");
        } else {
            eprintln!("{} {message}", "Error:".red().bold());
        }
    }

    /// Print a value as pretty JSON
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print a plain line (suppressed in JSON mode)
    pub fn line(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }
}
