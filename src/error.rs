//! Error types for prime-stride
//!
//! Design philosophy:
//! - Use thiserror for structured error types in library code
//! - Errors should be actionable - include context about what to do
//! - Invalid configuration fails fast, before any worker is spawned

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the prime-stride application
#[derive(Error, Debug)]
pub enum SieveError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Worker/concurrency errors
    #[error("Worker error: {0}")]
    Worker(#[from] WorkerError),

    /// I/O errors (report file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid worker count
    #[error("Invalid worker count {count}: must be between 1 and {max}")]
    InvalidWorkerCount { count: usize, max: usize },

    /// Invalid prime limit
    #[error("Invalid limit {limit}: must be between {min} and {max}")]
    InvalidLimit {
        limit: usize,
        min: usize,
        max: usize,
    },

    /// Output path error
    #[error("Invalid output path '{path}': {reason}")]
    InvalidOutputPath { path: PathBuf, reason: String },
}

/// Worker thread errors
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Worker panicked
    #[error("Worker {index} panicked")]
    Panicked { index: usize },

    /// Worker thread could not be spawned
    #[error("Failed to spawn worker {index}: {reason}")]
    SpawnFailed { index: usize, reason: String },
}

/// Result type alias for SieveError
pub type Result<T> = std::result::Result<T, SieveError>;
