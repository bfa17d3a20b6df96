/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for formatter construction.

use thiserror::Error;

/// Errors that can occur while building a formatter from a declaration table.
///
/// Formatting itself is total and never fails; the only failure mode lives
/// at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatterError {
    /// More than one entry in the declaration table normalizes to the
    /// `<emptyList>` directive key.
    #[error("Duplicate <emptyList> entry in formatter declaration: {key}")]
    DuplicateDirective {
        /// The offending key as written in the table.
        key: String,
    },
}

/// Result type for formatter construction.
pub type FormatterResult<T> = Result<T, FormatterError>;
