// Copyright (c) 2025 StringSearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Runtime algorithm selection.
//!
//! [`Matcher`] owns a pattern together with the artifact of the chosen
//! [`Algorithm`], so callers that pick the algorithm at runtime (from a
//! configuration file or the command line) do not have to name the artifact
//! type.

use std::fmt;

use super::bndm::{Bndm, BndmCi, BndmWildcards, BndmWildcardsCi, WORD_BITS};
use super::contract::{ensure_pattern, ensure_window, Match, MismatchSearch, StringSearch};
use super::error::Result;
use super::horspool::{BoyerMooreHorspool, BoyerMooreHorspoolRaita, SkipTable};
use super::shift_or::{ShiftOrArtifact, ShiftOrMismatches};
use super::tables::Symbol;

/// A search algorithm and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Exact BNDM
    Bndm,
    /// Case-insensitive BNDM
    BndmCaseInsensitive,
    /// BNDM with a wildcard symbol
    BndmWildcards { wildcard: char },
    /// Case-insensitive BNDM with a wildcard symbol
    BndmWildcardsCaseInsensitive { wildcard: char },
    /// Boyer-Moore-Horspool
    Horspool,
    /// Boyer-Moore-Horspool with Raita's check
    HorspoolRaita,
    /// Shift-Or tolerating `k` mismatches
    ShiftOrMismatches { k: usize },
}

impl Algorithm {
    /// Short kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bndm => "bndm",
            Self::BndmCaseInsensitive => "bndm-ci",
            Self::BndmWildcards { .. } => "bndm-wildcards",
            Self::BndmWildcardsCaseInsensitive { .. } => "bndm-wildcards-ci",
            Self::Horspool => "horspool",
            Self::HorspoolRaita => "horspool-raita",
            Self::ShiftOrMismatches { .. } => "shift-or",
        }
    }

    /// Mismatches tolerated by this algorithm; 0 for exact algorithms.
    pub fn max_mismatches(&self) -> usize {
        match self {
            Self::ShiftOrMismatches { k } => *k,
            _ => 0,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BndmWildcards { wildcard } | Self::BndmWildcardsCaseInsensitive { wildcard } => {
                write!(f, "{} (wildcard {:?})", self.name(), wildcard)
            }
            Self::ShiftOrMismatches { k } => write!(f, "{} (k = {})", self.name(), k),
            _ => f.write_str(self.name()),
        }
    }
}

/// A preprocessed artifact tagged with the searcher that built it.
#[derive(Debug, Clone, PartialEq)]
enum Compiled<S: Symbol> {
    Bndm(Bndm, S::Table),
    BndmCi(BndmCi, S::Table),
    BndmWildcards(BndmWildcards, S::Table),
    BndmWildcardsCi(BndmWildcardsCi, S::Table),
    Horspool(SkipTable<S>),
    HorspoolRaita(SkipTable<S>),
    ShiftOr {
        k: usize,
        automaton: ShiftOrArtifact<S::Table>,
    },
}

/// A pattern preprocessed for one algorithm.
///
/// # Example
///
/// ```
/// use stringsearch_lib::algorithms::{Algorithm, Match, Matcher};
///
/// let matcher = Matcher::new(Algorithm::ShiftOrMismatches { k: 1 }, b"boss").unwrap();
/// assert_eq!(matcher.find(b"keksbassbla"), Some(Match::new(4, 1)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matcher<S: Symbol> {
    pattern: Vec<S>,
    compiled: Compiled<S>,
}

impl<S: Symbol> Matcher<S> {
    /// Preprocesses `pattern` for `algorithm`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or the mismatch count cannot
    /// be encoded.
    pub fn new(algorithm: Algorithm, pattern: &[S]) -> Result<Self> {
        ensure_pattern(pattern)?;

        let compiled = match algorithm {
            Algorithm::Bndm => {
                let bndm = Bndm::new();
                Compiled::Bndm(bndm, bndm.process(pattern))
            }
            Algorithm::BndmCaseInsensitive => {
                let bndm = BndmCi::default();
                Compiled::BndmCi(bndm, bndm.process(pattern))
            }
            Algorithm::BndmWildcards { wildcard } => {
                let bndm = BndmWildcards::with_wildcard(wildcard);
                Compiled::BndmWildcards(bndm, bndm.process(pattern))
            }
            Algorithm::BndmWildcardsCaseInsensitive { wildcard } => {
                let bndm = BndmWildcardsCi::with_wildcard(wildcard);
                Compiled::BndmWildcardsCi(bndm, bndm.process(pattern))
            }
            Algorithm::Horspool => Compiled::Horspool(BoyerMooreHorspool.process(pattern)),
            Algorithm::HorspoolRaita => {
                Compiled::HorspoolRaita(BoyerMooreHorspoolRaita.process(pattern))
            }
            Algorithm::ShiftOrMismatches { k } => Compiled::ShiftOr {
                k,
                automaton: ShiftOrMismatches.process_mismatches(pattern, k)?,
            },
        };

        tracing::debug!(%algorithm, pattern_len = pattern.len(), "Matcher compiled");

        Ok(Self {
            pattern: pattern.to_vec(),
            compiled,
        })
    }

    /// The algorithm this matcher runs.
    pub fn algorithm(&self) -> Algorithm {
        match &self.compiled {
            Compiled::Bndm(..) => Algorithm::Bndm,
            Compiled::BndmCi(..) => Algorithm::BndmCaseInsensitive,
            Compiled::BndmWildcards(bndm, _) => Algorithm::BndmWildcards {
                wildcard: bndm.wildcard(),
            },
            Compiled::BndmWildcardsCi(bndm, _) => Algorithm::BndmWildcardsCaseInsensitive {
                wildcard: bndm.wildcard(),
            },
            Compiled::Horspool(_) => Algorithm::Horspool,
            Compiled::HorspoolRaita(_) => Algorithm::HorspoolRaita,
            Compiled::ShiftOr { k, .. } => Algorithm::ShiftOrMismatches { k: *k },
        }
    }

    /// The pattern as given.
    pub fn pattern(&self) -> &[S] {
        &self.pattern
    }

    /// Number of leading pattern symbols a reported match covers.
    ///
    /// Smaller than the pattern length when the algorithm truncates long
    /// patterns to its word size.
    pub fn matched_len(&self) -> usize {
        match &self.compiled {
            Compiled::Bndm(..)
            | Compiled::BndmCi(..)
            | Compiled::BndmWildcards(..)
            | Compiled::BndmWildcardsCi(..) => self.pattern.len().min(WORD_BITS),
            Compiled::Horspool(_) | Compiled::HorspoolRaita(_) => self.pattern.len(),
            Compiled::ShiftOr { automaton, .. } => automaton.window_len(),
        }
    }

    /// Leftmost match in the whole of `text`.
    pub fn find(&self, text: &[S]) -> Option<Match> {
        self.scan(text, 0, text.len())
    }

    /// Leftmost match inside `text[start..end]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the window does not lie within `text`.
    pub fn find_in(&self, text: &[S], start: usize, end: usize) -> Result<Option<Match>> {
        ensure_window(text, start, end)?;
        Ok(self.scan(text, start, end))
    }

    /// Iterates over non-overlapping matches from left to right.
    pub fn find_iter<'m, 't>(&'m self, text: &'t [S]) -> Matches<'m, 't, S> {
        Matches {
            matcher: self,
            text,
            next_start: 0,
        }
    }

    fn scan(&self, text: &[S], start: usize, end: usize) -> Option<Match> {
        let pattern = &self.pattern;
        match &self.compiled {
            Compiled::Bndm(bndm, masks) => {
                bndm.scan(text, start, end, pattern, masks).map(Match::exact)
            }
            Compiled::BndmCi(bndm, masks) => {
                bndm.scan(text, start, end, pattern, masks).map(Match::exact)
            }
            Compiled::BndmWildcards(bndm, masks) => {
                bndm.scan(text, start, end, pattern, masks).map(Match::exact)
            }
            Compiled::BndmWildcardsCi(bndm, masks) => {
                bndm.scan(text, start, end, pattern, masks).map(Match::exact)
            }
            Compiled::Horspool(skip) => BoyerMooreHorspool
                .scan(text, start, end, pattern, skip)
                .map(Match::exact),
            Compiled::HorspoolRaita(skip) => BoyerMooreHorspoolRaita
                .scan(text, start, end, pattern, skip)
                .map(Match::exact),
            Compiled::ShiftOr { k, automaton } => {
                ShiftOrMismatches.scan_mismatches(text, start, end, pattern, automaton, *k)
            }
        }
    }
}

/// Iterator over non-overlapping matches, created by [`Matcher::find_iter`].
#[derive(Debug)]
pub struct Matches<'m, 't, S: Symbol> {
    matcher: &'m Matcher<S>,
    text: &'t [S],
    next_start: usize,
}

impl<S: Symbol> Iterator for Matches<'_, '_, S> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        if self.next_start > self.text.len() {
            return None;
        }
        match self.matcher.scan(self.text, self.next_start, self.text.len()) {
            Some(found) => {
                self.next_start = found.position + self.matcher.matched_len();
                Some(found)
            }
            None => {
                self.next_start = self.text.len() + 1;
                None
            }
        }
    }
}

impl<S: Symbol> std::iter::FusedIterator for Matches<'_, '_, S> {}
