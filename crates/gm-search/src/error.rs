/// Errors raised while building, reading or writing search indices.
#[derive(thiserror::Error, Debug)]
pub enum SearchIndexError {
    /// Reading or writing a script failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A script body is not a well formed array.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two entries share the same key.
    #[error("Duplicate search key: {0}")]
    DuplicateKey(String),

    /// An entry has no reference.
    #[error("Search entry without references: {0}")]
    EmptyEntry(String),

    /// A key holds characters outside of the escaped alphabet.
    #[error("Invalid search key: {0:?}")]
    InvalidKey(String),

    /// A script does not follow the expected layout.
    #[error("Invalid search script: {0}")]
    InvalidScript(String),
}
