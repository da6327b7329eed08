//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from enum generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Path of the definition file that was loaded.
    pub definitions_path: PathBuf,

    /// Number of definitions in the file.
    pub total: usize,

    /// Per-definition failure messages.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of enum generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Paths of the files written.
    pub written: Vec<String>,
    /// Paths left untouched because they already exist.
    pub skipped: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        // Per-definition failures first; the run still completes.
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value(
            "Definitions",
            &self.definitions_path.display().to_string(),
        );
        out.newline();

        if !written.written.is_empty() {
            out.section(&format!("Generated ({})", written.written.len()));
            for path in &written.written {
                out.added_item(path);
            }
            out.newline();
        }

        if !written.skipped.is_empty() {
            out.section(&format!(
                "Skipped ({}, pass --force to overwrite)",
                written.skipped.len()
            ));
            for path in &written.skipped {
                out.list_item(path);
            }
            out.newline();
        }

        out.preformatted(&format!(
            "Done: {} of {} enums written to {}/",
            written.written.len(),
            self.total,
            written.output_dir.display()
        ));
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} of {} enums would be generated",
            preview.files.len(),
            self.total
        ));
    }
}
