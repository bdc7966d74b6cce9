// ABOUTME: Error types for printer connection and write operations
// ABOUTME: Distinguishes connect failures from mid-stream write failures

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrintError {
    #[error("Failed to connect to printer at {address}: {source}")]
    Connection {
        address: String,
        source: std::io::Error,
    },

    #[error("Invalid printer address '{address}'")]
    InvalidAddress { address: String },

    #[error("Failed to write to printer: {0}")]
    Write(#[from] std::io::Error),

    #[error("Print job cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, PrintError>;
