//! # Output Configuration
//!
//! Status lines printed by the CLI (`generate`, `check`, `plan`). Each line
//! starts with a marker that is an emoji on color-capable terminals and a
//! bracketed tag (`[OK]`, `[ERR]`, ...) otherwise.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! Quiet mode suppresses everything except failures.

use std::env;
use std::fmt::Display;

use console::style;

/// Kind of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Start,
    Success,
    Failure,
    Info,
    DryRun,
}

impl Status {
    fn marker(self, use_color: bool) -> &'static str {
        match (self, use_color) {
            (Status::Start, true) => "🔧",
            (Status::Start, false) => "[GEN]",
            (Status::Success, true) => "✅",
            (Status::Success, false) => "[OK]",
            (Status::Failure, true) => "❌",
            (Status::Failure, false) => "[ERR]",
            (Status::Info, true) => "  ",
            (Status::Info, false) => "  ",
            (Status::DryRun, true) => "🔎",
            (Status::DryRun, false) => "[DRY]",
        }
    }
}

/// Output configuration for controlling colors, markers and verbosity.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
    /// Print failures only.
    pub quiet: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `color_flag` is the value of `--color`: "always", "never", or "auto".
    /// In auto mode colors are disabled by `NO_COLOR`, `CLICOLOR=0`,
    /// `TERM=dumb`, or a non-TTY stdout (unless `CLICOLOR_FORCE=1`).
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self {
            use_color,
            quiet: false,
        }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// Format a status line without printing it.
    pub fn format(&self, status: Status, message: impl Display) -> String {
        let marker = status.marker(self.use_color);
        if !self.use_color {
            return format!("{} {}", marker, message);
        }
        let message = match status {
            Status::Success => style(message.to_string()).green().to_string(),
            Status::Failure => style(message.to_string()).red().bold().to_string(),
            Status::DryRun => style(message.to_string()).yellow().to_string(),
            _ => message.to_string(),
        };
        format!("{} {}", marker, message)
    }

    /// Print a status line to stdout unless quiet mode hides it.
    pub fn line(&self, status: Status, message: impl Display) {
        if self.quiet && status != Status::Failure {
            return;
        }
        println!("{}", self.format(status, message));
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self {
            use_color: true,
            quiet: false,
        }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self {
            use_color: false,
            quiet: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
