// Copyright (c) 2025 StringSearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore-Horspool and its Raita refinement.
//!
//! Both algorithms use the bad character rule only: after comparing a window,
//! the window moves by the distance between the symbol under its last position
//! and that symbol's rightmost occurrence in the pattern (excluding the last
//! position). Raita's refinement checks the last and first pattern symbols
//! before running the full comparison.
//!
//! Patterns of one or two symbols skip preprocessing entirely and are scanned
//! directly; a skip table cannot pay for itself at those lengths.

use super::contract::StringSearch;
use super::tables::{Symbol, SymbolTable};

/// Longest pattern handled by the direct scan.
const SHORT_PATTERN_MAX: usize = 2;

/// Skip table for a pattern, or `None` for patterns short enough to scan directly.
pub type SkipTable<S> = Option<<S as Symbol>::Table>;

/// Boyer-Moore-Horspool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoyerMooreHorspool;

/// Boyer-Moore-Horspool with Raita's first/last symbol check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoyerMooreHorspoolRaita;

/// Saturating conversion of a shift distance into a table value.
///
/// Saturation only shortens shifts, which never skips a match.
#[inline]
fn distance(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Builds the bad character table shared by both algorithms.
fn skip_table<S: Symbol>(pattern: &[S]) -> SkipTable<S> {
    let len = pattern.len();
    if len <= SHORT_PATTERN_MAX {
        return None;
    }

    let mut skip = S::table(pattern.iter().copied(), distance(len));
    // Later occurrences overwrite earlier ones, leaving the rightmost.
    for (i, &symbol) in pattern[..len - 1].iter().enumerate() {
        skip.set(symbol, distance(len - i - 1));
    }
    Some(skip)
}

/// Direct scan for patterns of one or two symbols.
fn scan_short<S: Symbol>(text: &[S], start: usize, end: usize, pattern: &[S]) -> Option<usize> {
    let window = &text[start..end];
    let found = match *pattern {
        [only] => window.iter().position(|&symbol| symbol == only),
        [first, second] => window
            .windows(2)
            .position(|pair| pair[0] == first && pair[1] == second),
        _ => None,
    };
    found.map(|offset| start + offset)
}

impl StringSearch for BoyerMooreHorspool {
    type Artifact<S: Symbol> = SkipTable<S>;

    fn process<S: Symbol>(&self, pattern: &[S]) -> SkipTable<S> {
        skip_table(pattern)
    }

    fn scan<S: Symbol>(
        &self,
        text: &[S],
        start: usize,
        end: usize,
        pattern: &[S],
        skip: &SkipTable<S>,
    ) -> Option<usize> {
        let skip = match skip {
            Some(skip) if pattern.len() > SHORT_PATTERN_MAX => skip,
            _ => return scan_short(text, start, end, pattern),
        };

        let len = pattern.len();
        let mut k = start + len - 1;
        while k < end {
            let window = &text[k + 1 - len..=k];
            if window.iter().rev().eq(pattern.iter().rev()) {
                return Some(k + 1 - len);
            }
            k += skip.get(text[k]) as usize;
        }

        None
    }
}

impl StringSearch for BoyerMooreHorspoolRaita {
    type Artifact<S: Symbol> = SkipTable<S>;

    fn process<S: Symbol>(&self, pattern: &[S]) -> SkipTable<S> {
        skip_table(pattern)
    }

    fn scan<S: Symbol>(
        &self,
        text: &[S],
        start: usize,
        end: usize,
        pattern: &[S],
        skip: &SkipTable<S>,
    ) -> Option<usize> {
        let skip = match skip {
            Some(skip) if pattern.len() > SHORT_PATTERN_MAX => skip,
            _ => return scan_short(text, start, end, pattern),
        };

        let len = pattern.len();
        let first = pattern[0];
        let last = pattern[len - 1];
        let middle = &pattern[1..len - 1];

        let mut k = start + len - 1;
        while k < end {
            let window_start = k + 1 - len;
            if text[k] == last
                && text[window_start] == first
                && text[window_start + 1..k].iter().rev().eq(middle.iter().rev())
            {
                return Some(window_start);
            }
            k += skip.get(text[k]) as usize;
        }

        None
    }
}
