//! Error types for props-core

use std::path::PathBuf;

use props_content::Format;

/// Result type for props-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in props-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error
    #[error(transparent)]
    Fs(#[from] props_fs::Error),

    /// A named document does not exist
    #[error("{format} file {} does not exist", .path.display())]
    FileNotFound { format: Format, path: PathBuf },

    /// A document exists but its content is malformed
    #[error("{}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: props_content::Error,
    },

    /// Mapping arguments were not given as from/to pairs
    #[error("Mapping arguments must come in from/to pairs, got {count} argument(s)")]
    InvalidPairs { count: usize },
}
