//! Error types for the application.
//!
//! Both variants are fatal: a class whose content cannot be read would make
//! the summary counts inconsistent with the record list, and a report that
//! cannot be written must not leave partial output behind. No retries; this
//! is a one-shot batch tool.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TestgapError {
    #[error("cannot read class file {}: {source}", path.display())]
    ClassRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write report {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias
pub type TestgapResult<T> = Result<T, TestgapError>;
