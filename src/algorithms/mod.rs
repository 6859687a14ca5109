// Copyright (c) 2025 StringSearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Literal pattern matching algorithms.
//!
//! Every algorithm follows the same two-phase contract ([`StringSearch`]):
//! a pattern is preprocessed once into an immutable artifact that can then be
//! searched against any number of texts or text windows, from any number of
//! threads. Texts and patterns are slices of a [`Symbol`], which is either a
//! byte or a `char`.
//!
//! # Algorithms
//!
//! - [`Bndm`]: bit-parallel backward matching, the fastest exact matcher for
//!   patterns up to 32 symbols. Variants fold case ([`BndmCi`]), accept a
//!   wildcard ([`BndmWildcards`]) or both ([`BndmWildcardsCi`]).
//! - [`BoyerMooreHorspool`] and [`BoyerMooreHorspoolRaita`]: bad character
//!   skip tables, with no limit on pattern length.
//! - [`ShiftOrMismatches`]: approximate matching with up to `k` substituted
//!   symbols ([`MismatchSearch`]).
//!
//! [`Matcher`] picks one of them at runtime from an [`Algorithm`] value.
//!
//! # Example
//!
//! ```
//! use stringsearch_lib::algorithms::{BoyerMooreHorspool, MismatchSearch, ShiftOrMismatches, StringSearch};
//!
//! let horspool = BoyerMooreHorspool;
//! let skip = horspool.preprocess(b"Johann").unwrap();
//! assert_eq!(horspool.search(b"Hallo Johann", 0, 12, b"Johann", &skip).unwrap(), Some(6));
//!
//! let hit = ShiftOrMismatches.find_mismatches(b"keksbassbla", b"boss", 1).unwrap().unwrap();
//! assert_eq!((hit.position, hit.mismatches), (4, 1));
//! ```
//!
//! # Character tables
//!
//! Byte patterns index a dense 256-entry [`ByteTable`]. Character patterns use
//! a [`SparseSymbolMap`] covering only the code points between the smallest and
//! largest pattern symbol; every other character reads the table's default.

mod bndm;
mod contract;
mod error;
mod horspool;
mod matcher;
mod shift_or;
mod sparse_map;
mod tables;

// Re-exports
pub use bndm::{
    Bndm, BndmCi, BndmWildcards, BndmWildcardsCi, CaseInsensitive, Exact, MaskStrategy,
    Wildcards, DEFAULT_WILDCARD, WORD_BITS,
};
pub use contract::{Match, MismatchSearch, StringSearch};
pub use error::{Result, SearchError};
pub use horspool::{BoyerMooreHorspool, BoyerMooreHorspoolRaita, SkipTable};
pub use matcher::{Algorithm, Matcher, Matches};
pub use shift_or::{bits_per_position, max_pattern_len, ShiftOrArtifact, ShiftOrMismatches};
pub use sparse_map::SparseSymbolMap;
pub use tables::{ByteTable, Symbol, SymbolTable};

#[cfg(test)]
mod tests;
