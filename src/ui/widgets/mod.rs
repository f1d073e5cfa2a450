//! Reusable widgets rendered over or around views

pub mod error_banner;
pub mod help_panel;
pub mod status_bar;

pub use error_banner::render_error_banner;
pub use help_panel::render_help_panel;
pub use status_bar::{render_input_status_bar, render_results_status_bar};
