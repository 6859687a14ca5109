// Copyright (c) 2025 StringSearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the search algorithms.

/// Precondition violations reported by preprocessing and searching.
///
/// "Not found" is never an error; it is reported as `None`.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum SearchError {
    /// Empty pattern provided
    #[error("Pattern cannot be empty")]
    EmptyPattern,

    /// Search window does not lie within the text
    #[error("Invalid search window {start}..{end} for text of length {len}")]
    InvalidWindow {
        /// Requested window start
        start: usize,
        /// Requested window end (exclusive)
        end: usize,
        /// Length of the text
        len: usize,
    },

    /// Mismatch count too large to pack a single pattern position into a word
    #[error("Mismatch limit {k} leaves no room for pattern positions")]
    MismatchLimit {
        /// Requested number of tolerated mismatches
        k: usize,
    },
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
