use std::path::PathBuf;

/// Errors surfaced by the index.
///
/// Trie and engine operations themselves are total; errors only come from
/// configuration (construction time) and from loading files.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Invalid normalization pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, IndexError>;

impl IndexError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
