//! Pipeline, repository loading, and export actions

use std::path::{Path, PathBuf};

use crate::classify;
use crate::export;
use crate::model::Notification;
use crate::ui::views::{InputAction, ResultsAction};

use super::state::{App, View};

impl App {
    pub(crate) fn handle_input_action(&mut self, action: InputAction) {
        match action {
            InputAction::None => {}
            InputAction::RunPipeline(raw) => {
                self.run_grouping(&raw);
            }
            InputAction::LoadRepo { path, branch } => {
                self.load_repository_log(&path, branch.as_deref());
            }
        }
    }

    pub(crate) fn handle_results_action(&mut self, action: ResultsAction) {
        match action {
            ResultsAction::None => {}
            ResultsAction::Export(path) => {
                self.export_csv(Path::new(&path));
            }
            ResultsAction::ToggleFilter => {
                self.options.noise_filter = !self.options.noise_filter;
                self.rerun_pipeline();
                self.notification = Some(Notification::info(if self.options.noise_filter {
                    "Noise filter on"
                } else {
                    "Noise filter off"
                }));
            }
            ResultsAction::ToggleLayout => {
                self.options.grouped = !self.options.grouped;
                self.rerun_pipeline();
                self.notification = Some(Notification::info(if self.options.grouped {
                    "Grouped layout"
                } else {
                    "Flat layout"
                }));
            }
        }
    }

    /// Verify git can be invoked; a failure lands in the error banner.
    ///
    /// Pasted log text still works without git, so this never blocks
    /// startup.
    pub(crate) fn check_git(&mut self) {
        if let Err(e) = self.git.version() {
            self.error_message = Some(format!("git error: {}", e));
        }
    }

    /// Run the grouping pipeline over raw log text and show the Results view
    pub(crate) fn run_grouping(&mut self, raw: &str) {
        let output = classify::run_pipeline(raw, self.options);

        if output.is_empty() {
            self.notification = Some(Notification::warning("No commits recognized in input"));
            return;
        }

        self.results_view.set_output(output);
        self.go_to_view(View::Results);
    }

    /// Re-run the pipeline over the current editor text (after an option toggle)
    pub(crate) fn rerun_pipeline(&mut self) {
        let raw = self.input_view.text();
        let output = classify::run_pipeline(&raw, self.options);
        self.results_view.set_output(output);
    }

    /// Load log text from a repository path into the editor
    pub(crate) fn load_repository_log(&mut self, path: &str, branch: Option<&str>) {
        let repo_path = if path.is_empty() {
            None
        } else {
            Some(PathBuf::from(path))
        };
        self.git.set_repo_path(repo_path);

        match self.git.log_raw(branch) {
            Ok(raw) => {
                let count = raw.lines().filter(|l| !l.trim().is_empty()).count();
                self.input_view.set_text(&raw);
                self.notification = Some(Notification::info(format!("Loaded {} log lines", count)));
            }
            Err(e) => {
                self.error_message = Some(format!("git error: {}", e));
            }
        }
    }

    /// Write the current result to a CSV file
    pub(crate) fn export_csv(&mut self, path: &Path) {
        if self.results_view.output.is_empty() {
            self.notification = Some(Notification::warning("Nothing to export"));
            return;
        }

        match export::write_csv(&self.results_view.output, path) {
            Ok(rows) => {
                self.notification = Some(Notification::success(format!(
                    "Exported {} rows to {}",
                    rows,
                    path.display()
                )));
            }
            Err(e) => {
                self.error_message = Some(format!("Export failed: {}", e));
            }
        }
    }
}
