//! Validation, normalization, and Go source rendering for enum definitions.
//!
//! The pipeline runs in two stages: [`NormalizedEnum::from_definition`]
//! turns a raw definition into a validated, casing-resolved value, and
//! [`Generator`] renders one Go file per normalized enum. A definition
//! that fails either stage is reported and skipped; it never aborts the
//! batch.

mod builder;
mod error;
mod files;
mod generator;
mod naming;
mod normalize;

pub use builder::{CodeBuilder, Indent};
pub use error::Error;
pub use files::EnumGoFile;
pub use generator::{
    EnumFailure, GenerateResult, GeneratedEnum, Generator, PreviewFile, PreviewResult,
};
pub use naming::{GO_NAMING, NamingConvention};
pub use normalize::{NormalizedEnum, NormalizedValue};
