//! Core operations.
//!
//! This module contains the business logic for the enumsmith CLI,
//! separated from argument parsing and output rendering.

pub mod generate;

pub use generate::{GenerateOptions, generate};
