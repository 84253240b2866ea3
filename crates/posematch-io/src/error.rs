/// An error type for the io module.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to read or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to parse or produce JSON.
    #[error("Failed to (de)serialize JSON. {0}")]
    JsonError(#[from] serde_json::Error),
}
