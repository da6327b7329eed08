//! Naming conventions for generated target languages.

use enumsmith_core::to_file_stem;

use crate::Error;

/// Language-specific naming rules.
///
/// Carries the reserved words and file extension consulted when
/// validating identifiers and deriving output file names.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Language identifier (e.g., "go")
    pub language: &'static str,
    /// File extension for generated source files (e.g., "go")
    pub file_extension: &'static str,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Validate a candidate identifier, returning its trimmed form.
    ///
    /// The `kind` label names the field being validated (e.g., "name",
    /// "key") and is carried into errors.
    pub fn check_identifier<'a>(
        &self,
        raw: &'a str,
        kind: &'static str,
    ) -> Result<&'a str, Error> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(Error::EmptyName { kind });
        }
        if let Some(reason) = invalid_identifier_reason(name) {
            return Err(Error::InvalidIdentifier {
                kind,
                name: name.to_string(),
                reason,
            });
        }
        if self.is_reserved(name) {
            return Err(Error::InvalidIdentifier {
                kind,
                name: name.to_string(),
                reason: "reserved word",
            });
        }
        Ok(name)
    }

    /// Derive the output file name for an enum name.
    pub fn file_name(&self, name: &str) -> String {
        format!("{}.{}", to_file_stem(name), self.file_extension)
    }
}

/// Check the identifier grammar: an ASCII letter first, then ASCII
/// letters, digits, or underscores.
/// Returns None if valid, Some(reason) if invalid.
fn invalid_identifier_reason(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some(_) => return Some("must start with a letter"),
        None => return Some("cannot be empty"),
    }
    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Some("must contain only letters, digits, and underscores");
        }
    }
    None
}

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    language: "go",
    file_extension: "go",
    reserved_words: &[
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
    ],
};
