use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for definition loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no enum definition file found in '{searched}'")]
    #[diagnostic(
        code(enumsmith::no_definition_file),
        help(
            "create an 'enums.yaml' or 'enums.json' in the working directory or its 'enum/' subdirectory"
        )
    )]
    NoDefinitionFile { searched: PathBuf },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(enumsmith::read_error))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    #[diagnostic(
        code(enumsmith::parse_error),
        help("definitions are a sequence of entries with 'name', optional 'plural', and 'values'")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a parse error with source context
    pub fn parse(
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
        message: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }
}
