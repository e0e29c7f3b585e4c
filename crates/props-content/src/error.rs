//! Error types for props-content

/// Result type for props-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding configuration text
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {format} content at line {line}: {message}")]
    ParseError {
        format: String,
        line: usize,
        message: String,
    },
}

impl Error {
    pub fn parse(format: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            format: format.into(),
            line,
            message: message.into(),
        }
    }
}
