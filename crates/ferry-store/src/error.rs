use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("no parent dir for {}", .0.display())]
    NoParent(PathBuf),

    #[error("failed to encode effect entry: {0}")]
    Encode(#[source] serde_json::Error),

    /// A log line that is not a valid effect entry. Lines are 1-based.
    #[error("{}:{line}: malformed effect entry: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
