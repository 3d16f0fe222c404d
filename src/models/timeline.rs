//! Settled timeline model.
//!
//! A timeline is a conflict-free, start-sorted sequence of blocks — the
//! shape the composition engine emits. Query helpers expose coverage and
//! gaps so a consumer can render free periods without redoing interval
//! math.
//!
//! # Invariants
//! A settled timeline satisfies:
//! 1. No two blocks overlap.
//! 2. Blocks are sorted ascending by start, ties by end.
//!
//! `Timeline::new` sorts its input; conflict-freedom is the engine's
//! responsibility and can be checked with [`Timeline::is_conflict_free`].

use serde::{Deserialize, Serialize};

use crate::models::Block;

/// An uncovered span between blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Gap {
    /// Gap start (minutes, inclusive).
    pub start_min: i64,
    /// Gap end (minutes, exclusive).
    pub end_min: i64,
}

impl Gap {
    /// Duration of this gap (minutes).
    #[inline]
    pub fn duration_min(&self) -> i64 {
        self.end_min - self.start_min
    }
}

/// An ordered, conflict-free sequence of blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timeline {
    /// Blocks sorted ascending by start (ties by end).
    pub blocks: Vec<Block>,
}

impl Timeline {
    /// Creates a timeline from a block sequence, sorting it by
    /// (start, end). The sort is stable, so blocks with identical spans
    /// keep their relative order.
    pub fn new(mut blocks: Vec<Block>) -> Self {
        blocks.sort_by_key(|b| (b.start_min, b.end_min));
        Self { blocks }
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the timeline has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Finds the block covering a given time, if any.
    pub fn block_at(&self, time_min: i64) -> Option<&Block> {
        self.blocks.iter().find(|b| b.contains(time_min))
    }

    /// Whether blocks are sorted ascending by start, ties by end.
    pub fn is_sorted(&self) -> bool {
        self.blocks
            .windows(2)
            .all(|w| (w[0].start_min, w[0].end_min) <= (w[1].start_min, w[1].end_min))
    }

    /// Whether the timeline is settled: sorted and pairwise
    /// non-overlapping.
    pub fn is_conflict_free(&self) -> bool {
        self.is_sorted()
            && self
                .blocks
                .windows(2)
                .all(|w| w[0].end_min <= w[1].start_min)
    }

    /// Total covered time (minutes).
    ///
    /// Sums block durations; meaningful only for a conflict-free timeline
    /// (overlapping blocks would double-count).
    pub fn coverage_min(&self) -> i64 {
        self.blocks.iter().map(Block::duration_min).sum()
    }

    /// Earliest start and latest end across all blocks.
    ///
    /// Returns `None` for an empty timeline.
    pub fn span(&self) -> Option<(i64, i64)> {
        let start = self.blocks.iter().map(|b| b.start_min).min()?;
        let end = self.blocks.iter().map(|b| b.end_min).max()?;
        Some((start, end))
    }

    /// Uncovered spans within [range_start, range_end).
    ///
    /// Walks the sorted blocks once; assumes the timeline is settled.
    /// Returns the whole range as one gap if no block touches it.
    pub fn gaps(&self, range_start_min: i64, range_end_min: i64) -> Vec<Gap> {
        let mut gaps = Vec::new();
        if range_end_min <= range_start_min {
            return gaps;
        }

        let mut cursor = range_start_min;
        for b in &self.blocks {
            if b.end_min <= cursor {
                continue;
            }
            if b.start_min >= range_end_min {
                break;
            }
            if b.start_min > cursor {
                gaps.push(Gap {
                    start_min: cursor,
                    end_min: b.start_min.min(range_end_min),
                });
            }
            cursor = cursor.max(b.end_min);
        }

        if cursor < range_end_min {
            gaps.push(Gap {
                start_min: cursor,
                end_min: range_end_min,
            });
        }

        gaps
    }
}
