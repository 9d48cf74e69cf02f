use thiserror::Error;

/// Broad classification of a validation failure: the argument had the
/// wrong type entirely, or the right type with an unusable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Value,
}

/// Errors raised at the validation boundary, before any transformation
/// work. There is no partial output and no recovery; callers re-invoke
/// with a valid argument.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("input must be a string, got {0}")]
    ExpectedText(&'static str),

    #[error("arguments must be numbers, got {0}")]
    ExpectedNumber(&'static str),

    #[error("arguments must be provided and cannot be null")]
    MissingArgument,

    #[error("arguments cannot be NaN")]
    NotANumber,

    #[error("unknown case convention: {0}")]
    UnknownConvention(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ExpectedText(_) | Error::ExpectedNumber(_) => ErrorKind::Type,
            Error::MissingArgument | Error::NotANumber | Error::UnknownConvention(_) => {
                ErrorKind::Value
            }
        }
    }
}
