// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Enum definition loading for the enumsmith generator.
//!
//! Definitions live in an `enums.yaml` or `enums.json` file next to
//! where the tool runs (or in its `enum/` subdirectory). This crate
//! locates that file, deserializes it, and reports failures as
//! [`miette`] diagnostics.

mod definition;
mod error;
mod file;
mod parse;

pub use definition::{EnumDefinition, ValueEntry};
pub use error::{Error, Result};
pub use file::{DefinitionFile, ENUM_DIR, Format, JSON_FILE, YAML_FILE};
