// Copyright (c) 2025 StringSearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Sparse character-to-integer lookup table.
//!
//! Patterns over wide character alphabets usually touch only a narrow band of
//! code points. Instead of a table with one slot per possible character, the
//! map stores a dense array covering `lowest..lowest + extent` and answers every
//! other lookup with a fixed default value.

use std::fmt;

/// A dense array addressed by `symbol - lowest`, with a default for everything
/// outside the stored extent.
///
/// Equality and hashing are structural: two maps are equal when they share the
/// lowest symbol, the default value and the stored contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SparseSymbolMap {
    /// Values for `lowest..lowest + extent`
    values: Box<[u32]>,
    /// First symbol covered by `values`
    lowest: char,
    /// Value returned for symbols outside the extent
    default: u32,
}

impl SparseSymbolMap {
    /// Creates a map covering `extent` symbols starting at `lowest`, with every
    /// slot initialised to `default`.
    pub fn new(extent: usize, lowest: char, default: u32) -> Self {
        Self {
            values: vec![default; extent].into_boxed_slice(),
            lowest,
            default,
        }
    }

    /// Creates a map whose extent spans exactly the smallest and largest of
    /// the given symbols.
    ///
    /// An empty iterator yields a map with no extent, so every lookup returns
    /// `default`.
    pub fn for_symbols<I>(symbols: I, default: u32) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let bounds = symbols.into_iter().fold(None, |bounds, c| match bounds {
            None => Some((c, c)),
            Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
        });

        match bounds {
            Some((lo, hi)) => Self::new((u32::from(hi) - u32::from(lo)) as usize + 1, lo, default),
            None => Self::new(0, '\0', default),
        }
    }

    /// Returns the value stored for `symbol`, or the default when `symbol` is
    /// outside the extent.
    #[inline]
    pub fn get(&self, symbol: char) -> u32 {
        self.slot(symbol)
            .map_or(self.default, |index| self.values[index])
    }

    /// Stores `value` for `symbol`. Symbols outside the extent are ignored.
    #[inline]
    pub fn set(&mut self, symbol: char, value: u32) {
        if let Some(index) = self.slot(symbol) {
            self.values[index] = value;
        }
    }

    /// Number of symbols covered by the backing array.
    pub fn extent(&self) -> usize {
        self.values.len()
    }

    /// First symbol covered by the backing array.
    pub fn lowest(&self) -> char {
        self.lowest
    }

    /// Code point one past the last covered symbol.
    ///
    /// Returned as a raw code point because it need not be a valid `char`.
    pub fn highest(&self) -> u32 {
        u32::from(self.lowest) + self.values.len() as u32
    }

    /// Value returned for symbols outside the extent.
    pub fn default_value(&self) -> u32 {
        self.default
    }

    #[inline]
    fn slot(&self, symbol: char) -> Option<usize> {
        // Symbols below `lowest` wrap around to huge offsets and fall out of range.
        let offset = u32::from(symbol).wrapping_sub(u32::from(self.lowest)) as usize;
        (offset < self.values.len()).then_some(offset)
    }
}

impl fmt::Display for SparseSymbolMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ SparseSymbolMap: lowest = {:?}, default = {}",
            self.lowest, self.default
        )?;
        if !self.values.is_empty() {
            write!(f, ", values =")?;
            for (index, value) in self.values.iter().enumerate().filter(|(_, v)| **v != 0) {
                write!(f, " {index}: {value}")?;
            }
        }
        write!(f, " }}")
    }
}
