// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Every failure is fatal to the run: the pipeline either produces a full
//! schedule or produces nothing. The output file is only touched after
//! parsing and scheduling succeed, so a failed run never leaves a
//! half-written schedule behind.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaveplanError {
    #[error("line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    #[error("line {line}: record has no id attribute")]
    MissingIdError { line: usize },

    #[error("task '{task}' lists unknown predecessor '{reference}'")]
    DanglingReferenceError { task: String, reference: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WaveplanError>;
