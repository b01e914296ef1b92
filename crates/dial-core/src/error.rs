use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialError {
    #[error("unknown scale: {0}")]
    UnknownScale(String),
    #[error("unknown chord: {0}")]
    UnknownChord(String),
    #[error("cannot parse action {input:?}: {reason}")]
    InvalidAction { input: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, DialError>;
