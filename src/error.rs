use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sprig operations.
///
/// Normalization is the only fallible stage: a malformed tag shorthand or
/// an unusable value in head position aborts the whole call. Serialization
/// never fails.
#[derive(Error, Diagnostic, Debug)]
pub enum SprigError {
    #[error("invalid tag: {found}")]
    #[diagnostic(code(sprig::invalid_tag))]
    InvalidTag {
        found: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SprigError>;
