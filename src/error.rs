use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record format: {0}")]
    InvalidFormat(String),

    #[error("Invalid temperature field: {0}")]
    InvalidTemperature(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Worker channel disconnected before all chunks were merged")]
    ChannelDisconnected,
}
