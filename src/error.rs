//! Error types for each layer of the planner.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by [`CourseIndex`][crate::index::CourseIndex].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The record can't be placed in the tree (e.g. its course number is empty).
    #[error("invalid course record: {0}")]
    InvalidRecord(String),

    /// Lookup descended to an empty child without meeting the key.
    #[error("Course {0} not found.")]
    KeyNotFound(String),
}

/// Failures while reading delimited course data.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The course file couldn't be opened.
    #[error("could not open {}: {source}", .path.display())]
    Open {
        /// The path we tried to open.
        path: PathBuf,
        /// Why opening failed.
        #[source]
        source: io::Error,
    },

    /// Reading a line from an already open source failed.
    #[error("failed to read course data: {0}")]
    Read(#[from] io::Error),

    /// A line didn't carry a required field.
    #[error("line {line}: missing {field}")]
    MissingField {
        /// 1-based line number.
        line: usize,
        /// Which field was absent or empty.
        field: &'static str,
    },

    /// The index refused a parsed record.
    #[error("line {line}: {source}")]
    Index {
        /// 1-based line number.
        line: usize,
        /// The index's reason.
        #[source]
        source: IndexError,
    },
}

/// Failures that end an interactive planner session.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Reading the user's input or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Result of an index operation.
pub type IndexResult<T> = Result<T, IndexError>;

/// Result of a loader operation.
pub type LoadResult<T> = Result<T, LoadError>;
