//! Per-file counter aggregation shared by the worker pool.
//!
//! All counter mutation happens under one region-wide lock: merging is O(1)
//! per call and runs are dominated by chunk scanning, so a coarse lock is
//! the documented trade-off. Merging is a commutative sum over disjoint
//! per-word contributions, so results arriving out of file order are safe.
//!
//! Completion is an explicit counter: every chunk handed to the pool must be
//! accounted for exactly once, either merged or discarded, and the
//! coordinator blocks in `wait_merged` until the count reaches the number of
//! chunks it sent.

use parking_lot::{Condvar, Mutex};

use crate::analyze::PartialResult;
use crate::classify::VOWEL_CLASSES;

/// Accumulated totals for one input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileCounters {
    /// File name as given on the command line
    pub file_name: String,
    /// Total number of words
    pub total_words: u64,
    /// Words containing each vowel class, order A E I O U Y
    pub vowel_words: [u64; VOWEL_CLASSES],
}

struct RegionState {
    counters: Vec<FileCounters>,
    /// Chunks accounted for (merged + discarded)
    accounted: u64,
    /// Chunks whose analysis failed and contributed nothing
    discarded: u64,
}

/// Exclusion domain for all `FileCounters` mutation.
pub struct AggregationRegion {
    state: Mutex<RegionState>,
    progressed: Condvar,
}

impl AggregationRegion {
    /// One zeroed counter entry per input file, in command-line order.
    pub fn new<S: Into<String>>(file_names: impl IntoIterator<Item = S>) -> Self {
        let counters = file_names
            .into_iter()
            .map(|name| FileCounters {
                file_name: name.into(),
                ..Default::default()
            })
            .collect();
        Self {
            state: Mutex::new(RegionState {
                counters,
                accounted: 0,
                discarded: 0,
            }),
            progressed: Condvar::new(),
        }
    }

    /// Add a partial result into its file's counters. Saturating adds: the
    /// totals only ever grow, and overflow clamps instead of wrapping.
    pub fn merge_partial(&self, result: &PartialResult) {
        let mut state = self.state.lock();
        match state.counters.get_mut(result.file_id) {
            Some(entry) => {
                entry.total_words = entry.total_words.saturating_add(result.words);
                for (total, part) in entry.vowel_words.iter_mut().zip(&result.vowel_words) {
                    *total = total.saturating_add(*part);
                }
            }
            None => {
                log::warn!("partial result for unknown file id {}", result.file_id);
            }
        }
        state.accounted += 1;
        drop(state);
        self.progressed.notify_all();
    }

    /// Account for a chunk whose analysis failed. Counts toward completion
    /// without contributing, so one bad chunk cannot hang the barrier.
    pub fn discard(&self, file_id: usize) {
        let mut state = self.state.lock();
        state.accounted += 1;
        state.discarded += 1;
        log::warn!("discarding contribution of a chunk from file id {file_id}");
        drop(state);
        self.progressed.notify_all();
    }

    /// Block until `expected` chunks have been accounted for (merged or
    /// discarded). Evaluated incrementally as results arrive, not as a
    /// fixed-size join.
    pub fn wait_merged(&self, expected: u64) {
        let mut state = self.state.lock();
        while state.accounted < expected {
            self.progressed.wait(&mut state);
        }
    }

    /// Chunks accounted for so far.
    pub fn accounted(&self) -> u64 {
        self.state.lock().accounted
    }

    /// Chunks discarded due to analysis failures.
    pub fn discarded(&self) -> u64 {
        self.state.lock().discarded
    }

    /// Stable copy of all per-file totals. Call only after the completion
    /// barrier has passed; earlier snapshots may be mid-run.
    pub fn snapshot(&self) -> Vec<FileCounters> {
        self.state.lock().counters.clone()
    }
}
