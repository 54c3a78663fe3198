//! Frequency tracker behavior.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use searchpulse_core::{SearchFrequencyTracker, UNKNOWN_TERM};

fn tracker_with(terms: &[&str]) -> SearchFrequencyTracker {
    let t = SearchFrequencyTracker::new();
    for term in terms {
        t.record(term);
    }
    t
}

fn assert_descending(result: &[(String, u64)]) {
    for pair in result.windows(2) {
        assert!(pair[0].1 >= pair[1].1, "not descending: {result:?}");
    }
}

#[test]
fn counts_match_replayed_records() {
    let terms = ["shoes", "Shoes", "shoes", " shoes", "bag", "shoes"];
    let t = tracker_with(&terms);

    let mut expected: HashMap<&str, u64> = HashMap::new();
    for term in terms {
        *expected.entry(term).or_insert(0) += 1;
    }

    for (term, n) in &expected {
        assert_eq!(t.count(term), *n, "term {term:?}");
    }
    assert_eq!(t.len(), expected.len());
    assert_eq!(t.count("never"), 0);
}

#[test]
fn empty_and_unknown_are_ordinary_terms() {
    let t = tracker_with(&["", UNKNOWN_TERM, "", "x"]);
    assert_eq!(t.count(""), 2);
    assert_eq!(t.count("unknown"), 1);

    let top = t.top_n(1);
    assert_eq!(top, vec![(String::new(), 2)]);
}

#[test]
fn top_zero_is_always_empty() {
    let t = SearchFrequencyTracker::new();
    assert!(t.top_n(0).is_empty());

    let t = tracker_with(&["a", "a", "b"]);
    assert!(t.top_n(0).is_empty());
}

#[test]
fn top_n_picks_highest_counts_in_order() {
    let t = tracker_with(&["shoes", "shoes", "bag", "hat", "bag", "bag"]);
    let top = t.top_n(2);
    assert_eq!(
        top,
        vec![("bag".to_string(), 3), ("shoes".to_string(), 2)]
    );
}

#[test]
fn no_records_yields_empty_top() {
    let t = SearchFrequencyTracker::new();
    assert!(t.is_empty());
    assert!(t.top_n(5).is_empty());
}

#[test]
fn ties_return_every_term_without_padding() {
    let t = tracker_with(&["a", "b", "c"]);
    let top = t.top_n(5);
    assert_eq!(top.len(), 3);

    let got: HashMap<String, u64> = top.into_iter().collect();
    let want: HashMap<String, u64> = [("a", 1), ("b", 1), ("c", 1)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    assert_eq!(got, want);
}

#[test]
fn large_n_returns_full_set_sorted() {
    let t = tracker_with(&["x", "y", "y", "z", "z", "z", "w", "w"]);
    let top = t.top_n(100);
    assert_descending(&top);

    let got: HashMap<String, u64> = top.into_iter().collect();
    assert_eq!(got.len(), 4);
    assert_eq!(got["x"], 1);
    assert_eq!(got["y"], 2);
    assert_eq!(got["z"], 3);
    assert_eq!(got["w"], 2);
}

#[test]
fn partial_top_is_sorted_and_bounded() {
    let t = SearchFrequencyTracker::new();
    for i in 0..50u64 {
        let term = format!("term-{i}");
        for _ in 0..(i % 7 + 1) {
            t.record(&term);
        }
    }

    let top = t.top_n(10);
    assert_eq!(top.len(), 10);
    assert_descending(&top);
    // seven terms reach the max count of 7
    assert!(top.iter().take(7).all(|(_, c)| *c == 7));
    assert!(top.iter().skip(7).all(|(_, c)| *c == 6));
}

#[test]
fn concurrent_records_are_not_lost() {
    let t = Arc::new(SearchFrequencyTracker::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let t = Arc::clone(&t);
            thread::spawn(move || {
                for _ in 0..1_000 {
                    t.record("shared");
                    t.record(if i % 2 == 0 { "even" } else { "odd" });
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(t.count("shared"), 8_000);
    assert_eq!(t.count("even"), 4_000);
    assert_eq!(t.count("odd"), 4_000);
    assert_eq!(t.top_n(1), vec![("shared".to_string(), 8_000)]);
}
