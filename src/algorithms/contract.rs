// Copyright (c) 2025 StringSearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The two-phase preprocess/search contract shared by every algorithm.
//!
//! A pattern is preprocessed once into an immutable artifact, which is then
//! run against any number of text windows. Artifacts are plain values: they
//! can be cloned, compared and shared between threads, and searching never
//! mutates them.

use std::fmt::Debug;

use super::error::{Result, SearchError};
use super::tables::Symbol;

/// A match reported by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    /// Offset of the first matched symbol in the text
    pub position: usize,

    /// Number of substituted symbols (always 0 for exact searches)
    pub mismatches: usize,
}

impl Match {
    /// Creates an exact match at `position`.
    pub fn exact(position: usize) -> Self {
        Self::new(position, 0)
    }

    /// Creates a match at `position` with `mismatches` substitutions.
    pub fn new(position: usize, mismatches: usize) -> Self {
        Self { position, mismatches }
    }
}

/// Exact substring search with a reusable preprocessed artifact.
///
/// Implementors provide [`process`](StringSearch::process) and
/// [`scan`](StringSearch::scan); callers use the checked
/// [`preprocess`](StringSearch::preprocess) and
/// [`search`](StringSearch::search) entry points.
///
/// An artifact must be used with the pattern it was built from. Passing an
/// artifact built for a different pattern is not detected and yields an
/// unspecified (but memory-safe) result.
pub trait StringSearch {
    /// Preprocessed form of a pattern over alphabet `S`.
    type Artifact<S: Symbol>: Clone + Debug + PartialEq + Send + Sync;

    /// Builds the artifact for a non-empty pattern.
    fn process<S: Symbol>(&self, pattern: &[S]) -> Self::Artifact<S>;

    /// Returns the leftmost match of `pattern` inside `text[start..end]`.
    ///
    /// The pattern is non-empty and the window lies within `text`.
    fn scan<S: Symbol>(
        &self,
        text: &[S],
        start: usize,
        end: usize,
        pattern: &[S],
        artifact: &Self::Artifact<S>,
    ) -> Option<usize>;

    /// Preprocesses `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyPattern`] if the pattern is empty.
    fn preprocess<S: Symbol>(&self, pattern: &[S]) -> Result<Self::Artifact<S>> {
        ensure_pattern(pattern)?;
        Ok(self.process(pattern))
    }

    /// Searches `text[start..end]` for the leftmost occurrence of `pattern`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or the window does not lie
    /// within the text.
    fn search<S: Symbol>(
        &self,
        text: &[S],
        start: usize,
        end: usize,
        pattern: &[S],
        artifact: &Self::Artifact<S>,
    ) -> Result<Option<usize>> {
        ensure_pattern(pattern)?;
        ensure_window(text, start, end)?;
        Ok(self.scan(text, start, end, pattern, artifact))
    }

    /// Preprocesses `pattern` and searches the whole of `text`.
    fn find<S: Symbol>(&self, text: &[S], pattern: &[S]) -> Result<Option<usize>> {
        let artifact = self.preprocess(pattern)?;
        self.search(text, 0, text.len(), pattern, &artifact)
    }
}

/// Search tolerating up to `k` substituted symbols.
///
/// The exact [`StringSearch`] contract is satisfied with `k = 0`.
pub trait MismatchSearch: StringSearch {
    /// Builds the artifact for a non-empty pattern tolerating `k` mismatches.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MismatchLimit`] if `k` is too large to encode.
    fn process_mismatches<S: Symbol>(&self, pattern: &[S], k: usize)
        -> Result<Self::Artifact<S>>;

    /// Returns the leftmost match with at most `k` mismatches inside
    /// `text[start..end]`.
    fn scan_mismatches<S: Symbol>(
        &self,
        text: &[S],
        start: usize,
        end: usize,
        pattern: &[S],
        artifact: &Self::Artifact<S>,
        k: usize,
    ) -> Option<Match>;

    /// Preprocesses `pattern` for searches tolerating `k` mismatches.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or `k` cannot be encoded.
    fn preprocess_mismatches<S: Symbol>(
        &self,
        pattern: &[S],
        k: usize,
    ) -> Result<Self::Artifact<S>> {
        ensure_pattern(pattern)?;
        self.process_mismatches(pattern, k)
    }

    /// Searches `text[start..end]` for the leftmost occurrence of `pattern`
    /// with at most `k` mismatches.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or the window does not lie
    /// within the text.
    fn search_mismatches<S: Symbol>(
        &self,
        text: &[S],
        start: usize,
        end: usize,
        pattern: &[S],
        artifact: &Self::Artifact<S>,
        k: usize,
    ) -> Result<Option<Match>> {
        ensure_pattern(pattern)?;
        ensure_window(text, start, end)?;
        Ok(self.scan_mismatches(text, start, end, pattern, artifact, k))
    }

    /// Preprocesses `pattern` and searches the whole of `text`.
    fn find_mismatches<S: Symbol>(
        &self,
        text: &[S],
        pattern: &[S],
        k: usize,
    ) -> Result<Option<Match>> {
        let artifact = self.preprocess_mismatches(pattern, k)?;
        self.search_mismatches(text, 0, text.len(), pattern, &artifact, k)
    }
}

/// Rejects empty patterns.
pub(crate) fn ensure_pattern<S>(pattern: &[S]) -> Result<()> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }
    Ok(())
}

/// Rejects windows that do not lie within `text`.
pub(crate) fn ensure_window<S>(text: &[S], start: usize, end: usize) -> Result<()> {
    if start > end || end > text.len() {
        return Err(SearchError::InvalidWindow {
            start,
            end,
            len: text.len(),
        });
    }
    Ok(())
}
