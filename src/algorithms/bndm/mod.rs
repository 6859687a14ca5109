// Copyright (c) 2025 StringSearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Backward Nondeterministic DAWG Matching (BNDM).
//!
//! BNDM simulates the suffix automaton of the reversed pattern with bit-parallel
//! AND/shift operations. Each pattern position is one bit of a 32-bit word, so
//! the automaton state fits a single register and a window is scanned backward
//! until the state dies out. The position of the last state that still
//! recognised a pattern prefix decides how far the window may move, which gives
//! sublinear average running time.
//!
//! # Pattern length
//!
//! Only the first 32 symbols of a pattern take part. Longer patterns are
//! searched by that prefix alone, so a reported offset guarantees a match of
//! the prefix, not of the whole pattern.
//!
//! # Variants
//!
//! The mask table is built by a [`MaskStrategy`]:
//!
//! - [`Exact`]: plain BNDM.
//! - [`CaseInsensitive`]: letters match either case.
//! - [`Wildcards`]: a wildcard symbol (default `.`) matches anything.
//!
//! # Example
//!
//! ```
//! use stringsearch_lib::algorithms::{Bndm, BndmCi, StringSearch};
//!
//! let bndm = Bndm::new();
//! assert_eq!(bndm.find(b"keksbassbla", b"bass").unwrap(), Some(4));
//!
//! let ci = BndmCi::default();
//! let masks = ci.preprocess(b"BASS").unwrap();
//! assert_eq!(ci.search(b"keksbassbla", 0, 11, b"BASS", &masks).unwrap(), Some(4));
//! ```

mod strategy;

pub use strategy::{CaseInsensitive, Exact, MaskStrategy, Wildcards, DEFAULT_WILDCARD};

use super::contract::StringSearch;
use super::tables::{Symbol, SymbolTable};

/// Number of pattern symbols a mask word can track.
pub const WORD_BITS: usize = u32::BITS as usize;

/// BNDM exact matcher parameterised by its mask-building strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bndm<M = Exact> {
    strategy: M,
}

/// Case-insensitive BNDM.
pub type BndmCi = Bndm<CaseInsensitive>;

/// BNDM with a wildcard symbol.
pub type BndmWildcards = Bndm<Wildcards>;

/// Case-insensitive BNDM with a wildcard symbol.
pub type BndmWildcardsCi = Bndm<Wildcards<CaseInsensitive>>;

impl Bndm {
    /// Creates an exact-match BNDM.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MaskStrategy> Bndm<M> {
    /// Creates a BNDM building its masks with `strategy`.
    pub fn with_strategy(strategy: M) -> Self {
        Self { strategy }
    }

    /// The mask-building strategy.
    pub fn strategy(&self) -> &M {
        &self.strategy
    }
}

impl<F: MaskStrategy + Default> Bndm<Wildcards<F>> {
    /// Creates a wildcard BNDM treating `wildcard` as match-anything.
    pub fn with_wildcard(wildcard: char) -> Self {
        Self::with_strategy(Wildcards::new(wildcard))
    }

    /// The configured wildcard symbol.
    pub fn wildcard(&self) -> char {
        self.strategy.wildcard()
    }
}

/// Leading part of `pattern` that fits the mask word.
#[inline]
fn word_prefix<S>(pattern: &[S]) -> &[S] {
    &pattern[..pattern.len().min(WORD_BITS)]
}

impl<M: MaskStrategy> StringSearch for Bndm<M> {
    type Artifact<S: Symbol> = S::Table;

    fn process<S: Symbol>(&self, pattern: &[S]) -> S::Table {
        let used = word_prefix(pattern);
        if used.len() < pattern.len() {
            tracing::debug!(
                pattern_len = pattern.len(),
                used = used.len(),
                "BNDM pattern truncated to word size"
            );
        }

        let always = self.strategy.always_matching(used);
        let mut masks = S::table(
            used.iter().flat_map(|&symbol| self.strategy.variants(symbol)),
            always,
        );

        // Bit (l - 1 - i) marks position i; walk from the end so the last
        // symbol owns bit 0.
        let mut bit = 1u32;
        for &symbol in used.iter().rev() {
            for variant in self.strategy.variants(symbol) {
                masks.set(variant, masks.get(variant) | bit);
            }
            bit <<= 1;
        }

        masks
    }

    fn scan<S: Symbol>(
        &self,
        text: &[S],
        start: usize,
        end: usize,
        pattern: &[S],
        masks: &S::Table,
    ) -> Option<usize> {
        let len = word_prefix(pattern).len();
        let mut pos = start;

        while pos + len <= end {
            let mut j = len - 1;
            let mut last = len;
            let mut state = u32::MAX;

            loop {
                state &= masks.get(text[pos + j]);
                if state == 0 {
                    break;
                }
                if j == 0 {
                    return Some(pos);
                }
                // A factor of the pattern is still alive; shifting past it could skip a match.
                last = j;
                j -= 1;
                state <<= 1;
            }

            pos += last;
        }

        None
    }
}
