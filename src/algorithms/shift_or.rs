// Copyright (c) 2025 StringSearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Shift-Or with up to `k` mismatches.
//!
//! Every pattern position owns a field of `b = ceil(log2(k + 1)) + 1` bits in a
//! 31-bit word: the low `b - 1` bits count mismatches and the high bit records
//! overflow. Shifting the word by `b` and adding the symbol's table entry
//! advances every alignment at once; a match is reported when the alignment
//! covering the whole pattern has counted no more than `k` mismatches.
//!
//! Only the first `31 / b` pattern symbols take part:
//!
//! | `k`   | symbols |
//! |-------|---------|
//! | 0     | 31      |
//! | 1     | 15      |
//! | 2-3   | 10      |
//! | 4-5   | 7       |
//!
//! Mismatch counts are exact for reported matches, but when `k` approaches the
//! pattern length most alignments saturate their fields and the automaton
//! degrades to reporting the earliest position with enough symbols read.

use super::contract::{Match, MismatchSearch, StringSearch};
use super::error::{Result, SearchError};
use super::tables::{Symbol, SymbolTable};

/// Usable bits of the automaton word.
const WORD_BITS: u32 = 31;

/// Ceiling of the base-2 logarithm, with `ceil_log2(0) == ceil_log2(1) == 0`.
#[inline]
fn ceil_log2(x: usize) -> u32 {
    if x <= 1 {
        0
    } else {
        usize::BITS - (x - 1).leading_zeros()
    }
}

/// Field width needed to count up to `k` mismatches plus an overflow bit.
///
/// # Errors
///
/// Returns [`SearchError::MismatchLimit`] when not even one field fits the word.
pub fn bits_per_position(k: usize) -> Result<u32> {
    let levels = k.checked_add(1).ok_or(SearchError::MismatchLimit { k })?;
    let bits = ceil_log2(levels) + 1;
    if bits > WORD_BITS {
        return Err(SearchError::MismatchLimit { k });
    }
    Ok(bits)
}

/// Number of leading pattern symbols that take part in a search with `k`
/// mismatches.
///
/// # Errors
///
/// Returns [`SearchError::MismatchLimit`] when `k` cannot be encoded.
pub fn max_pattern_len(k: usize) -> Result<usize> {
    bits_per_position(k).map(|bits| (WORD_BITS / bits) as usize)
}

/// Preprocessed Shift-Or automaton.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShiftOrArtifact<T> {
    table: T,
    mask: u32,
    overflow_mask: u32,
    threshold: u32,
    bits_per_position: u32,
    window: usize,
}

impl<T> ShiftOrArtifact<T> {
    /// Per-symbol mismatch words.
    pub fn table(&self) -> &T {
        &self.table
    }

    /// All bits of the used fields.
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// The high bit of every field.
    pub fn overflow_mask(&self) -> u32 {
        self.overflow_mask
    }

    /// Acceptance threshold for the `k` this artifact was built with.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Width of one field in bits.
    pub fn bits_per_position(&self) -> u32 {
        self.bits_per_position
    }

    /// Number of pattern symbols that take part in the search.
    pub fn window_len(&self) -> usize {
        self.window
    }

    /// Largest mismatch count a field can hold without overflowing.
    pub fn field_capacity(&self) -> usize {
        (1usize << (self.bits_per_position - 1)) - 1
    }

    fn top_shift(&self) -> u32 {
        (self.window as u32 - 1) * self.bits_per_position
    }

    /// Acceptance threshold for `k` mismatches, capped at the field capacity.
    pub fn threshold_for(&self, k: usize) -> u32 {
        let limit = k.min(self.field_capacity()) as u32 + 1;
        limit << self.top_shift()
    }
}

/// Shift-Or matcher tolerating substituted symbols.
///
/// With `k = 0` it is a plain exact matcher and implements [`StringSearch`]
/// directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ShiftOrMismatches;

impl ShiftOrMismatches {
    /// Creates the matcher.
    pub fn new() -> Self {
        Self
    }
}

/// Builds the automaton for `pattern` with fields of `bits` bits.
fn compile<S: Symbol>(pattern: &[S], k: usize, bits: u32) -> ShiftOrArtifact<S::Table> {
    let window = pattern.len().min((WORD_BITS / bits) as usize);
    if window < pattern.len() {
        tracing::debug!(
            pattern_len = pattern.len(),
            used = window,
            k,
            "Shift-Or pattern truncated to word size"
        );
    }
    let used = &pattern[..window];
    let fields = window as u32;

    let overflow_mask = (1..=fields).fold(0u32, |acc, j| acc | 1 << (j * bits - 1));
    let mask = (1u32 << (fields * bits)) - 1;

    // One mismatch in every field, cleared where the pattern symbol sits.
    let mut table = S::table(used.iter().copied(), overflow_mask >> (bits - 1));
    for (j, &symbol) in used.iter().enumerate() {
        let field = 1u32 << (j as u32 * bits);
        table.set(symbol, table.get(symbol) & !field);
    }

    // k < 2^(bits - 1) here, so the threshold fits the word.
    let threshold = (k as u32 + 1) << ((fields - 1) * bits);

    tracing::trace!(bits, window, threshold, "Shift-Or automaton built");

    ShiftOrArtifact {
        table,
        mask,
        overflow_mask,
        threshold,
        bits_per_position: bits,
        window,
    }
}

/// Runs the automaton over `text[start..end]`.
fn run<S: Symbol>(
    text: &[S],
    start: usize,
    end: usize,
    automaton: &ShiftOrArtifact<S::Table>,
    threshold: u32,
) -> Option<Match> {
    let bits = automaton.bits_per_position;
    let top = automaton.top_shift();
    let ovmask = automaton.overflow_mask;

    let mut state = automaton.mask & !ovmask;
    // Overflow starts set so no alignment is accepted before it has read a
    // full window of symbols.
    let mut overflow = ovmask;

    for (i, &symbol) in text[start..end].iter().enumerate() {
        state = (state << bits).wrapping_add(automaton.table.get(symbol)) & automaton.mask;
        overflow = ((overflow << bits) | (state & ovmask)) & automaton.mask;
        state &= !ovmask;

        if (state | overflow) < threshold {
            let position = start + i + 1 - automaton.window;
            return Some(Match::new(position, (state >> top) as usize));
        }
    }

    None
}

impl StringSearch for ShiftOrMismatches {
    type Artifact<S: Symbol> = ShiftOrArtifact<S::Table>;

    fn process<S: Symbol>(&self, pattern: &[S]) -> Self::Artifact<S> {
        // One bit per field: no counting, only the overflow flag.
        compile(pattern, 0, 1)
    }

    fn scan<S: Symbol>(
        &self,
        text: &[S],
        start: usize,
        end: usize,
        _pattern: &[S],
        automaton: &Self::Artifact<S>,
    ) -> Option<usize> {
        run(text, start, end, automaton, automaton.threshold_for(0)).map(|found| found.position)
    }
}

impl MismatchSearch for ShiftOrMismatches {
    fn process_mismatches<S: Symbol>(
        &self,
        pattern: &[S],
        k: usize,
    ) -> Result<Self::Artifact<S>> {
        let bits = bits_per_position(k)?;
        Ok(compile(pattern, k, bits))
    }

    fn scan_mismatches<S: Symbol>(
        &self,
        text: &[S],
        start: usize,
        end: usize,
        _pattern: &[S],
        automaton: &Self::Artifact<S>,
        k: usize,
    ) -> Option<Match> {
        run(text, start, end, automaton, automaton.threshold_for(k))
    }
}
