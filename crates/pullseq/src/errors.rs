//! # Error Types

use std::path::PathBuf;

/// Errors from pullseq operations.
#[derive(Debug, thiserror::Error)]
pub enum PullseqError {
    /// I/O failure on an owned input stream.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A line source path could not be opened.
    #[error("failed to open line source {path:?}")]
    Open {
        /// The path that failed to open.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for pullseq operations.
pub type PullseqResult<T> = std::result::Result<T, PullseqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_display() {
        let err = PullseqError::Open {
            path: PathBuf::from("/no/such/file"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "nope"),
        };
        assert_eq!(
            err.to_string(),
            "failed to open line source \"/no/such/file\""
        );
    }

    #[test]
    fn test_io_error_from() {
        let err: PullseqError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, PullseqError::Io(_)));
        assert_eq!(err.to_string(), "pipe closed");
    }
}
