//! Generate operation - enum file generation from a definition file.

use std::path::Path;

use chrono::Local;
use enumsmith_codegen::{EnumFailure, Generator};
use enumsmith_core::Overwrite;
use enumsmith_manifest::{DefinitionFile, ENUM_DIR, Result};

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory to search for the definition file.
    pub root: &'a Path,
    /// Whether to overwrite enum files that already exist.
    pub force: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Locates and loads the definition file under the root, then renders
/// one Go source file per definition. Definitions that fail to
/// normalize are collected as warnings and never block the rest of the
/// batch.
pub fn generate(opts: GenerateOptions) -> Result<GenerateReport> {
    let file = DefinitionFile::locate(opts.root)?;
    let definitions = file.load()?;

    let generated_at = Local::now().naive_local();
    let generator = Generator::new(&definitions, generated_at);
    let total = definitions.len();

    let mut warnings = Vec::new();
    let result = if opts.dry_run {
        let preview = generator.preview();
        collect_failures(&mut warnings, &preview.failures);

        GenerationResult::Preview(PreviewResult {
            files: preview
                .files
                .into_iter()
                .map(|f| PreviewFile {
                    path: f.path,
                    content: f.content,
                })
                .collect(),
        })
    } else {
        let overwrite = if opts.force {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };
        let output_dir = opts.root.join(ENUM_DIR);
        let generated = generator.generate(&output_dir, overwrite);
        collect_failures(&mut warnings, &generated.failures);

        GenerationResult::Written(WrittenResult {
            output_dir,
            written: generated
                .written
                .iter()
                .map(|w| w.path.display().to_string())
                .collect(),
            skipped: generated
                .skipped
                .iter()
                .map(|s| s.path.display().to_string())
                .collect(),
        })
    };

    Ok(GenerateReport {
        definitions_path: file.path().to_path_buf(),
        total,
        warnings,
        result,
    })
}

fn collect_failures(warnings: &mut Vec<String>, failures: &[EnumFailure]) {
    for failure in failures {
        warnings.push(format!(
            "definition {} ('{}'): {}",
            failure.index + 1,
            failure.name,
            failure.error
        ));
    }
}
