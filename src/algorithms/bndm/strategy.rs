// Copyright (c) 2025 StringSearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Mask-building strategies for the BNDM family.
//!
//! A strategy decides which table entries receive a pattern position's bit
//! and which positions match every symbol. The search loop is shared by all
//! strategies, so folding and wildcards cost nothing at search time.

use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithms::tables::Symbol;

/// Wildcard used when none is configured.
pub const DEFAULT_WILDCARD: char = '.';

/// Controls how a pattern is turned into BNDM position masks.
pub trait MaskStrategy: Debug + Clone + PartialEq + Eq + Hash + Send + Sync {
    /// Symbols whose mask entry receives the bit of a pattern position
    /// holding `symbol`. Entries may repeat.
    fn variants<S: Symbol>(&self, symbol: S) -> [S; 3];

    /// Bits of pattern positions that match any text symbol.
    ///
    /// `pattern` is already truncated to the word size.
    fn always_matching<S: Symbol>(&self, _pattern: &[S]) -> u32 {
        0
    }
}

/// Symbols match only themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Exact;

impl MaskStrategy for Exact {
    #[inline]
    fn variants<S: Symbol>(&self, symbol: S) -> [S; 3] {
        [symbol; 3]
    }
}

/// Letters match their upper-case and lower-case forms.
///
/// ASCII letters fold by range. Bytes above 127 are read as Latin-1 and fold
/// only when the counterpart is itself a Latin-1 byte; characters fold through
/// Unicode simple case mappings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CaseInsensitive;

impl MaskStrategy for CaseInsensitive {
    #[inline]
    fn variants<S: Symbol>(&self, symbol: S) -> [S; 3] {
        symbol.case_variants()
    }
}

/// A configurable wildcard symbol matches any text symbol; other symbols are
/// handled by the inner strategy `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wildcards<F = Exact> {
    wildcard: char,
    folding: F,
}

impl<F: MaskStrategy + Default> Wildcards<F> {
    /// Creates a strategy treating `wildcard` as match-anything.
    pub fn new(wildcard: char) -> Self {
        Self {
            wildcard,
            folding: F::default(),
        }
    }
}

impl<F> Wildcards<F> {
    /// The configured wildcard symbol.
    pub fn wildcard(&self) -> char {
        self.wildcard
    }
}

impl<F: MaskStrategy + Default> Default for Wildcards<F> {
    fn default() -> Self {
        Self::new(DEFAULT_WILDCARD)
    }
}

impl<F: MaskStrategy> MaskStrategy for Wildcards<F> {
    #[inline]
    fn variants<S: Symbol>(&self, symbol: S) -> [S; 3] {
        self.folding.variants(symbol)
    }

    fn always_matching<S: Symbol>(&self, pattern: &[S]) -> u32 {
        // A wildcard that cannot be expressed in this alphabet never occurs.
        let Some(wildcard) = S::from_char(self.wildcard) else {
            return 0;
        };
        let last = pattern.len() - 1;
        pattern
            .iter()
            .enumerate()
            .filter(|(_, symbol)| **symbol == wildcard)
            .fold(0, |bits, (i, _)| bits | 1 << (last - i))
    }
}
