//! Batch generation of enum source files.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use enumsmith_core::{FileError, GeneratedFile, Overwrite};
use enumsmith_manifest::EnumDefinition;

use crate::{Error, GO_NAMING, NamingConvention, NormalizedEnum, files::EnumGoFile};

/// Go code generator over a list of enum definitions.
pub struct Generator<'a> {
    definitions: &'a [EnumDefinition],
    naming: NamingConvention,
    generated_at: NaiveDateTime,
}

/// A successfully written enum file.
#[derive(Debug)]
pub struct GeneratedEnum {
    /// Normalized enum name.
    pub name: String,
    /// Path of the output file.
    pub path: PathBuf,
}

/// A definition that failed to normalize or emit.
#[derive(Debug)]
pub struct EnumFailure {
    /// Zero-based position in the definition file.
    pub index: usize,
    /// Raw name as authored (may be empty).
    pub name: String,
    /// What went wrong.
    pub error: Error,
}

/// Result of writing enum files to disk.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written.
    pub written: Vec<GeneratedEnum>,
    /// Definitions skipped because their output file already exists.
    pub skipped: Vec<GeneratedEnum>,
    /// Definitions that failed.
    pub failures: Vec<EnumFailure>,
}

/// Result of a dry-run preview.
#[derive(Debug, Default)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
    /// Definitions that failed.
    pub failures: Vec<EnumFailure>,
}

/// A rendered file for preview.
#[derive(Debug)]
pub struct PreviewFile {
    /// File name relative to the output directory.
    pub path: String,
    /// Rendered content.
    pub content: String,
}

impl<'a> Generator<'a> {
    /// Create a generator over the given definitions using Go naming.
    ///
    /// The timestamp stamps the generation header of every file in the
    /// batch.
    pub fn new(definitions: &'a [EnumDefinition], generated_at: NaiveDateTime) -> Self {
        Self {
            definitions,
            naming: GO_NAMING,
            generated_at,
        }
    }

    /// Render every definition without touching the filesystem.
    pub fn preview(&self) -> PreviewResult {
        let mut result = PreviewResult::default();

        for (index, definition) in self.definitions.iter().enumerate() {
            match self.normalize(definition) {
                Ok(normalized) => {
                    let file = EnumGoFile::new(&normalized, &self.naming);
                    result.files.push(PreviewFile {
                        path: self.naming.file_name(&normalized.name),
                        content: file.render(),
                    });
                }
                Err(error) => result.failures.push(EnumFailure {
                    index,
                    name: definition.name.clone(),
                    error,
                }),
            }
        }

        result
    }

    /// Normalize and write one file per definition into `output_dir`.
    ///
    /// A failing definition is recorded and the batch continues, so one
    /// bad entry never blocks the rest. Existing files are recorded as
    /// skipped unless `overwrite` allows replacing them.
    pub fn generate(&self, output_dir: &Path, overwrite: Overwrite) -> GenerateResult {
        let mut result = GenerateResult::default();

        for (index, definition) in self.definitions.iter().enumerate() {
            let normalized = match self.normalize(definition) {
                Ok(normalized) => normalized,
                Err(error) => {
                    result.failures.push(EnumFailure {
                        index,
                        name: definition.name.clone(),
                        error,
                    });
                    continue;
                }
            };

            let file = EnumGoFile::new(&normalized, &self.naming);
            match file.write(output_dir, overwrite) {
                Ok(path) => result.written.push(GeneratedEnum {
                    name: normalized.name,
                    path,
                }),
                Err(FileError::AlreadyExists { path }) => result.skipped.push(GeneratedEnum {
                    name: normalized.name,
                    path,
                }),
                Err(error) => result.failures.push(EnumFailure {
                    index,
                    name: definition.name.clone(),
                    error: Error::File(error),
                }),
            }
        }

        result
    }

    fn normalize(&self, definition: &EnumDefinition) -> Result<NormalizedEnum, Error> {
        NormalizedEnum::from_definition(definition, &self.naming, self.generated_at)
    }
}
