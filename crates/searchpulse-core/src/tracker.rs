//! In-memory search term frequency tracker.
//!
//! Counts every observed search term and answers ranked top-N queries over
//! the running tally. The tracker lives for the whole process and is shared
//! between request handlers, so the map sits behind a mutex: `record` and
//! `top_n` each take the lock exactly once.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Term recorded by callers when a request carries no search term.
pub const UNKNOWN_TERM: &str = "unknown";

/// A `(term, count)` pair as returned by [`SearchFrequencyTracker::top_n`].
pub type TermCount = (String, u64);

/// Running tally of search terms.
///
/// Terms are case-sensitive and stored verbatim. Every key in the map has a
/// count of at least 1; a term that was never recorded is simply absent.
#[derive(Debug, Default)]
pub struct SearchFrequencyTracker {
    counts: Mutex<HashMap<String, u64>>,
}

impl SearchFrequencyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // Counters stay consistent between statements, so a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, u64>> {
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record one occurrence of `term`.
    pub fn record(&self, term: &str) {
        let mut counts = self.lock();
        match counts.get_mut(term) {
            Some(count) => *count += 1,
            None => {
                counts.insert(term.to_owned(), 1);
            }
        }
    }

    /// The `n` most frequent terms, highest count first.
    ///
    /// Order among terms with equal counts is unspecified. Returns every
    /// recorded term when fewer than `n` exist.
    pub fn top_n(&self, n: usize) -> Vec<TermCount> {
        if n == 0 {
            return Vec::new();
        }

        let mut entries: Vec<TermCount> = {
            let counts = self.lock();
            counts.iter().map(|(t, c)| (t.clone(), *c)).collect()
        };

        if n < entries.len() {
            entries.select_nth_unstable_by(n - 1, |a, b| b.1.cmp(&a.1));
            entries.truncate(n);
        }
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Occurrences of `term` so far (0 if never recorded).
    pub fn count(&self, term: &str) -> u64 {
        self.lock().get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms recorded.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
