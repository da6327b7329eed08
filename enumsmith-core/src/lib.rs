//! Core utilities and types for the enumsmith generator.
//!
//! This crate provides fundamental types and utilities used across
//! the enumsmith ecosystem.

mod file;
mod strings;

// File operations
pub use file::{FileError, GeneratedFile, Overwrite, write_file};
// String utilities
pub use strings::{capitalize_first, decapitalize_first, pluralize, to_file_stem};
