//! Report data structures for the CLI.
//!
//! This module provides data structures that separate data collection from rendering.
//! Operations build reports, then the CLI renders them to an Output target.

mod generate;
mod output;

pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};
