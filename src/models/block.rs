//! Schedule block model.
//!
//! A block is the sole entity the composition engine operates on: a labeled
//! time span on a single wall-clock day.

use serde::{Deserialize, Serialize};

/// A labeled time span [start, end).
///
/// Half-open interval: includes start, excludes end. Two blocks that merely
/// touch (`a.end_min == b.start_min`) do not overlap.
///
/// The label is opaque: the engine carries it through untouched and assumes
/// nothing about its content or uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    /// Opaque identifier carried through composition.
    pub label: String,
    /// Span start (minutes, inclusive).
    pub start_min: i64,
    /// Span end (minutes, exclusive).
    pub end_min: i64,
}

impl Block {
    /// Creates a new block.
    pub fn new(label: impl Into<String>, start_min: i64, end_min: i64) -> Self {
        Self {
            label: label.into(),
            start_min,
            end_min,
        }
    }

    /// Duration of this block (minutes).
    #[inline]
    pub fn duration_min(&self) -> i64 {
        self.end_min - self.start_min
    }

    /// Whether a time falls within this block.
    #[inline]
    pub fn contains(&self, time_min: i64) -> bool {
        time_min >= self.start_min && time_min < self.end_min
    }

    /// Whether two blocks overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

/// Converts an HH:MM wall-clock time to minutes from midnight.
#[inline]
pub fn minutes(hour: i64, minute: i64) -> i64 {
    hour * 60 + minute
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_basics() {
        let b = Block::new("math", minutes(8, 0), minutes(9, 0));
        assert_eq!(b.duration_min(), 60);
        assert!(b.contains(minutes(8, 0)));
        assert!(b.contains(minutes(8, 59)));
        assert!(!b.contains(minutes(9, 0))); // exclusive end
        assert!(!b.contains(minutes(7, 30)));
    }

    #[test]
    fn test_block_overlap() {
        let a = Block::new("a", 480, 540);
        let b = Block::new("b", 510, 570);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = Block::new("c", 540, 600); // touching but not overlapping
        assert!(!a.overlaps(&c));

        let d = Block::new("d", 600, 660); // disjoint
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_overlap_containment() {
        let outer = Block::new("outer", 480, 600);
        let inner = Block::new("inner", 500, 520);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_minutes_helper() {
        assert_eq!(minutes(0, 0), 0);
        assert_eq!(minutes(8, 30), 510);
        assert_eq!(minutes(23, 59), 1439);
    }

    #[test]
    fn test_block_serde_roundtrip() {
        let b = Block::new("free period", minutes(10, 15), minutes(11, 0));
        let json = serde_json::to_string(&b).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }
}
