// Copyright (c) 2025 StringSearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the public search API.
//! Exercises the algorithms through the crate root the way a downstream user
//! would, including sharing preprocessed artifacts across threads.

use std::sync::{Arc, Barrier};
use std::thread;

use stringsearch_lib::algorithms::{
    Algorithm, Bndm, BndmCi, BndmWildcards, BoyerMooreHorspool, BoyerMooreHorspoolRaita, Match,
    Matcher, MismatchSearch, SearchError, ShiftOrMismatches, StringSearch,
};

const TEXT: &str = "She sells sea shells by the sea shore; the shells she sells are sea shells.";

#[test]
fn test_exact_algorithms_agree() {
    let text = TEXT.as_bytes();
    let expected = TEXT.find("shore");

    assert_eq!(Bndm::new().find(text, b"shore").unwrap(), expected);
    assert_eq!(BoyerMooreHorspool.find(text, b"shore").unwrap(), expected);
    assert_eq!(BoyerMooreHorspoolRaita.find(text, b"shore").unwrap(), expected);
    assert_eq!(ShiftOrMismatches.find(text, b"shore").unwrap(), expected);
}

#[test]
fn test_artifact_reuse_over_windows() {
    let text = TEXT.as_bytes();
    let pattern = b"shells";
    let searcher = BoyerMooreHorspoolRaita;
    let artifact = searcher.preprocess(pattern).unwrap();

    let mut positions = Vec::new();
    let mut start = 0;
    while let Some(pos) = searcher
        .search(text, start, text.len(), pattern, &artifact)
        .unwrap()
    {
        positions.push(pos);
        start = pos + 1;
    }

    let expected: Vec<usize> = TEXT.match_indices("shells").map(|(i, _)| i).collect();
    assert_eq!(positions, expected);
}

#[test]
fn test_case_insensitive_and_wildcards() {
    let text = TEXT.as_bytes();

    assert_eq!(BndmCi::default().find(text, b"SHE SELLS").unwrap(), Some(0));

    let wildcard = BndmWildcards::with_wildcard('?');
    assert_eq!(wildcard.find(text, b"s?ore").unwrap(), TEXT.find("shore"));
    assert_eq!(wildcard.find(text, b"s??re").unwrap(), TEXT.find("shore"));
    assert_eq!(wildcard.find(text, b"x?y").unwrap(), None);
}

#[test]
fn test_mismatch_search() {
    let text = TEXT.as_bytes();
    let searcher = ShiftOrMismatches::new();

    // "shove" differs from "shore" in one position.
    assert_eq!(searcher.find_mismatches(text, b"shove", 0).unwrap(), None);
    assert_eq!(
        searcher.find_mismatches(text, b"shove", 1).unwrap(),
        TEXT.find("shore").map(|i| Match::new(i, 1))
    );
}

#[test]
fn test_errors_are_reported() {
    let text = TEXT.as_bytes();

    assert_eq!(Bndm::new().find(text, b""), Err(SearchError::EmptyPattern));

    let artifact = BoyerMooreHorspool.preprocess(b"sea").unwrap();
    assert!(matches!(
        BoyerMooreHorspool.search(text, 10, 5, b"sea", &artifact),
        Err(SearchError::InvalidWindow { .. })
    ));
    assert!(matches!(
        BoyerMooreHorspool.search(text, 0, text.len() + 1, b"sea", &artifact),
        Err(SearchError::InvalidWindow { .. })
    ));

    assert!(matches!(
        ShiftOrMismatches.preprocess_mismatches(b"sea", usize::MAX),
        Err(SearchError::MismatchLimit { .. })
    ));
}

#[test]
fn test_matcher_over_chars() {
    let text: Vec<char> = "Grüße aus Köln, GRÜSSE aus Bonn".chars().collect();
    let pattern: Vec<char> = "köln".chars().collect();

    let matcher = Matcher::new(Algorithm::BndmCaseInsensitive, &pattern).unwrap();
    assert_eq!(matcher.find(&text), Some(Match::exact(10)));

    let matcher = Matcher::new(Algorithm::Horspool, &pattern).unwrap();
    assert_eq!(matcher.find(&text), None);
}

#[test]
fn test_matcher_find_iter() {
    let matcher = Matcher::new(Algorithm::Bndm, b"sea").unwrap();
    let positions: Vec<usize> = matcher
        .find_iter(TEXT.as_bytes())
        .map(|found| found.position)
        .collect();

    let expected: Vec<usize> = TEXT.match_indices("sea").map(|(i, _)| i).collect();
    assert_eq!(positions, expected);
}

#[test]
fn test_shared_artifact_across_threads() {
    const THREADS: usize = 8;

    let searcher = Bndm::new();
    let pattern: Arc<[u8]> = Arc::from(&b"sea shore"[..]);
    let artifact = Arc::new(searcher.preprocess(&pattern[..]).unwrap());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let pattern = Arc::clone(&pattern);
            let artifact = Arc::clone(&artifact);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                // Each thread places the pattern at a different offset.
                let mut text = vec![b'-'; 64];
                text[i * 4..i * 4 + pattern.len()].copy_from_slice(&pattern);

                barrier.wait();
                searcher
                    .search(&text, 0, text.len(), &pattern[..], &*artifact)
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(i * 4));
    }
}

#[test]
fn test_shared_matcher_across_threads() {
    let matcher = Arc::new(Matcher::new(Algorithm::ShiftOrMismatches { k: 1 }, b"shells").unwrap());

    let handles: Vec<_> = ["a sea shelly shore", "no match here", "shells"]
        .into_iter()
        .map(|text| {
            let matcher = Arc::clone(&matcher);
            thread::spawn(move || matcher.find(text.as_bytes()))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![Some(Match::new(6, 1)), None, Some(Match::exact(0))]
    );
}
