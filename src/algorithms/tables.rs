// Copyright (c) 2025 StringSearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Symbol alphabets and the lookup tables built over them.
//!
//! Every algorithm preprocesses a pattern into a table that maps a text symbol
//! to an integer (a bit mask or a shift distance). Two alphabets are supported:
//!
//! 1. Bytes (`u8`): a dense 256-entry [`ByteTable`].
//!
//! 2. Characters (`char`): a [`SparseSymbolMap`] sized to the code point range
//!    the pattern actually uses.

use std::fmt::Debug;
use std::hash::Hash;

use super::sparse_map::SparseSymbolMap;

/// Number of distinct byte values.
const BYTE_ALPHABET: usize = 256;

/// A symbol-to-integer lookup table built during preprocessing.
pub trait SymbolTable<S>: Clone + Debug + PartialEq + Eq + Hash + Send + Sync {
    /// Returns the value stored for `symbol`.
    fn get(&self, symbol: S) -> u32;

    /// Stores `value` for `symbol`. Tables that cannot hold `symbol` ignore the call.
    fn set(&mut self, symbol: S, value: u32);
}

/// A symbol type the algorithms can search over.
pub trait Symbol: Copy + Ord + Hash + Debug + Send + Sync + 'static {
    /// Lookup table used for this alphabet.
    type Table: SymbolTable<Self>;

    /// Creates a table able to hold every symbol in `symbols`, with all
    /// entries (and all lookups outside the table's range) set to `default`.
    fn table<I>(symbols: I, default: u32) -> Self::Table
    where
        I: IntoIterator<Item = Self>;

    /// Returns the symbol itself followed by its lower-case and upper-case
    /// forms. Symbols without case repeat themselves.
    fn case_variants(self) -> [Self; 3];

    /// Converts a configured character (such as a wildcard) into this alphabet,
    /// or `None` when it has no representation.
    fn from_char(c: char) -> Option<Self>;
}

/// Dense table with one slot per byte value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ByteTable(Box<[u32; BYTE_ALPHABET]>);

impl ByteTable {
    /// Creates a table with every slot set to `value`.
    pub fn filled(value: u32) -> Self {
        Self(Box::new([value; BYTE_ALPHABET]))
    }

    /// All 256 slots, indexed by byte value.
    pub fn as_slice(&self) -> &[u32] {
        &self.0[..]
    }
}

impl SymbolTable<u8> for ByteTable {
    #[inline]
    fn get(&self, symbol: u8) -> u32 {
        self.0[usize::from(symbol)]
    }

    #[inline]
    fn set(&mut self, symbol: u8, value: u32) {
        self.0[usize::from(symbol)] = value;
    }
}

impl SymbolTable<char> for SparseSymbolMap {
    #[inline]
    fn get(&self, symbol: char) -> u32 {
        SparseSymbolMap::get(self, symbol)
    }

    #[inline]
    fn set(&mut self, symbol: char, value: u32) {
        SparseSymbolMap::set(self, symbol, value)
    }
}

impl Symbol for u8 {
    type Table = ByteTable;

    fn table<I>(_symbols: I, default: u32) -> ByteTable
    where
        I: IntoIterator<Item = u8>,
    {
        ByteTable::filled(default)
    }

    fn case_variants(self) -> [u8; 3] {
        match self {
            b'A'..=b'Z' | b'a'..=b'z' => [self, self | 0x20, self & !0x20],
            0x80..=0xFF => {
                // Latin-1 letters fold only when the counterpart is still a byte.
                let c = char::from(self);
                let latin1 = |folded: Option<char>| {
                    folded
                        .and_then(|f| u8::try_from(f).ok())
                        .unwrap_or(self)
                };
                [
                    self,
                    latin1(single_char(c.to_lowercase())),
                    latin1(single_char(c.to_uppercase())),
                ]
            }
            _ => [self; 3],
        }
    }

    fn from_char(c: char) -> Option<u8> {
        u8::try_from(c).ok()
    }
}

impl Symbol for char {
    type Table = SparseSymbolMap;

    fn table<I>(symbols: I, default: u32) -> SparseSymbolMap
    where
        I: IntoIterator<Item = char>,
    {
        SparseSymbolMap::for_symbols(symbols, default)
    }

    fn case_variants(self) -> [char; 3] {
        if !self.is_alphabetic() {
            return [self; 3];
        }
        let lower = single_char(self.to_lowercase()).unwrap_or(self);
        let upper = single_char(lower.to_uppercase()).unwrap_or(lower);
        [self, lower, upper]
    }

    fn from_char(c: char) -> Option<char> {
        Some(c)
    }
}

/// Returns the only character of a case mapping, or `None` for mappings that
/// expand to several characters (such as `ß` to `SS`).
fn single_char<I: Iterator<Item = char>>(mut mapping: I) -> Option<char> {
    let first = mapping.next()?;
    mapping.next().is_none().then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_byte_table() {
        let mut table = u8::table(b"abc".iter().copied(), 7);
        assert_eq!(table.get(b'z'), 7);

        table.set(b'a', 1);
        assert_eq!(table.get(b'a'), 1);
        assert_eq!(table.as_slice().len(), 256);
        assert_eq!(table, {
            let mut other = ByteTable::filled(7);
            other.set(b'a', 1);
            other
        });
    }

    #[test]
    fn test_char_table_is_sized_to_pattern() {
        let table = char::table("kakao".chars(), 0);
        assert_eq!(table.lowest(), 'a');
        assert_eq!(table.extent(), ('o' as usize) - ('a' as usize) + 1);
    }

    #[test_case(b'A', [b'A', b'a', b'A'] ; "ascii upper")]
    #[test_case(b'q', [b'q', b'q', b'Q'] ; "ascii lower")]
    #[test_case(b'-', [b'-', b'-', b'-'] ; "ascii punctuation")]
    #[test_case(0xD6, [0xD6, 0xF6, 0xD6] ; "latin1 upper o umlaut")]
    #[test_case(0xF6, [0xF6, 0xF6, 0xD6] ; "latin1 lower o umlaut")]
    #[test_case(0xDF, [0xDF, 0xDF, 0xDF] ; "sharp s has no single upper form")]
    #[test_case(0xFF, [0xFF, 0xFF, 0xFF] ; "y diaeresis folds outside latin1")]
    #[test_case(0xB5, [0xB5, 0xB5, 0xB5] ; "micro sign folds outside latin1")]
    fn test_byte_case_variants(byte: u8, expected: [u8; 3]) {
        assert_eq!(byte.case_variants(), expected);
    }

    #[test_case('B', ['B', 'b', 'B'] ; "ascii upper")]
    #[test_case('ö', ['ö', 'ö', 'Ö'] ; "latin1 lower")]
    #[test_case('Σ', ['Σ', 'σ', 'Σ'] ; "greek upper")]
    #[test_case('ß', ['ß', 'ß', 'ß'] ; "sharp s")]
    #[test_case('7', ['7', '7', '7'] ; "digit")]
    fn test_char_case_variants(c: char, expected: [char; 3]) {
        assert_eq!(c.case_variants(), expected);
    }

    #[test]
    fn test_from_char() {
        assert_eq!(u8::from_char('.'), Some(b'.'));
        assert_eq!(u8::from_char('ö'), Some(0xF6));
        assert_eq!(u8::from_char('€'), None);
        assert_eq!(char::from_char('€'), Some('€'));
    }
}
