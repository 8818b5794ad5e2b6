//! Shared error types for the live-coding assistant

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid file name: {name} ({reason})")]
    InvalidFileName { name: String, reason: String },

    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Unknown request type: {value}")]
    UnknownRequestType { value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
