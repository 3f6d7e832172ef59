//! Error types for quadpress-test

use thiserror::Error;

/// Errors produced by the regression test framework
#[derive(Debug, Error)]
pub enum TestError {
    /// I/O error while reading or writing test artifacts
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test framework operations
pub type TestResult<T> = Result<T, TestError>;
