//! gci - Git Commit Insights
//!
//! A TUI tool that turns raw `git log` text into classified, grouped
//! commit summaries and CSV exports.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`classify`]: Noise filtering, keyword classification, and grouping
//! - [`export`]: CSV export of pipeline results
//! - [`git`]: git command execution and log line parsing
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod app;
pub mod classify;
pub mod export;
pub mod git;
pub mod keys;
pub mod model;
pub mod ui;
