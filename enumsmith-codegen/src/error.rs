use enumsmith_core::FileError;
use thiserror::Error;

/// Errors from normalizing or emitting a single enum definition.
///
/// These are per-definition failures: the caller reports them and moves
/// on to the next definition.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{kind} is empty")]
    EmptyName { kind: &'static str },

    #[error("invalid {kind} '{name}': {reason}")]
    InvalidIdentifier {
        kind: &'static str,
        name: String,
        reason: &'static str,
    },

    #[error("{first} and {second} resolve to the same name '{name}'")]
    DuplicateName {
        first: &'static str,
        second: &'static str,
        name: String,
    },

    #[error("duplicate key '{key}'")]
    DuplicateKey { key: String },

    #[error("duplicate value '{value}'")]
    DuplicateValue { value: String },

    #[error(transparent)]
    File(#[from] FileError),
}
