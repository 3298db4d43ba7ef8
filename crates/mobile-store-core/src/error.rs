#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("snapshot parse error at line {line}: {message}")]
    SnapshotParse { line: usize, message: String },

    #[error("snapshot encode error: {0}")]
    SnapshotEncode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
