//! Configuration errors raised while building the token tables.

use thiserror::Error;

/// A fault in the token table definition.
///
/// These only occur while a registry is being built. A registry that was
/// built successfully never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("token type `{name}` is already defined")]
    DuplicateName { name: String },

    #[error("reserved word `{spelling}` is already registered")]
    DuplicateKeyword { spelling: String },

    #[error("invalid reserved word {spelling:?}")]
    InvalidKeyword { spelling: String },

    #[error("token type `{name}` has invalid precedence {precedence}; binary precedence starts at 1")]
    InvalidPrecedence { name: String, precedence: u8 },

    #[error("token type `{name}` has inconsistent flags: {reason}")]
    InconsistentFlags { name: String, reason: &'static str },

    #[error("cannot define `{name}`: the catalog is full")]
    TooManyTokens { name: String },

    #[error("token type `{label}` already has a context hook attached")]
    ContextAlreadyAttached { label: String },
}
