//! git-specific constants
//!
//! Centralized definitions for the git command name, flags, and the log
//! format this tool consumes.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// Separator between author, date, and message in log lines.
///
/// Only the first two occurrences are structural; anything after the
/// second one belongs to the commit message.
pub const FIELD_SEPARATOR: char = '|';

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
}

/// git command flags
pub mod flags {
    /// Run as if started in the given directory (global flag)
    pub const CHDIR: &str = "-C";
    /// Never pipe output through a pager (global flag)
    pub const NO_PAGER: &str = "--no-pager";
    /// Log format producing `author | date | message` lines
    pub const PRETTY_LOG: &str = "--pretty=format:%an | %ad | %s";
    /// Strict ISO 8601 timestamps (e.g. `2024-03-01T10:00:00+00:00`)
    pub const DATE_ISO_STRICT: &str = "--date=iso8601-strict";
    /// Show version
    pub const VERSION: &str = "--version";
}

/// Special git values
pub mod special {
    /// Version output prefix (e.g. "git version 2.43.0")
    pub const VERSION_PREFIX: &str = "git version ";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating the path is not inside a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
}
