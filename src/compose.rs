//! Timeline composition engine.
//!
//! Reconciles a baseline daily timeline with an ordered list of override
//! blocks into a single conflict-free, start-sorted sequence.
//!
//! # Algorithm
//!
//! Incremental overlay with splitting (a painter's algorithm over time):
//! 1. Start from an empty accumulator.
//! 2. Insert every `base` block in order, then every `overrides` block in
//!    order. An inserted block claims its whole span: each accumulator
//!    block it overlaps survives only as the remainder(s) outside the
//!    claimed span, so an existing block can shrink, split in two, or
//!    vanish.
//! 3. Stable-sort the accumulator by (start, end); stability preserves
//!    insertion order on full ties.
//!
//! Later insertions always win a contested span — exactly the semantics of
//! overrides as progressively more authoritative edits layered on a
//! baseline. Splitting preserves unaffected time outside the contested
//! span, so a long base period survives a short override carved out of its
//! middle.
//!
//! # Complexity
//! O(n·m): each insertion scans the current accumulator once, and a
//! two-way split bounds the final sequence at base + override count blocks.
//! Linear scan is fine at single-day scale (tens of blocks); an interval
//! tree could replace it transparently if inputs grew.

use crate::models::{Block, Timeline};
use crate::validation::{validate_inputs, ValidationError};

/// Composes a base timeline and prioritized overrides into one
/// conflict-free, start-sorted sequence.
///
/// Sequence position encodes priority: an override later in the list
/// outranks everything already accepted, including earlier overrides and
/// all of `base`. `base` itself is inserted with the same last-wins rule,
/// so a self-overlapping base resolves deterministically rather than being
/// trusted as pre-settled.
///
/// Every block of both inputs is validated up front (`start < end`); on
/// failure nothing is composed and all offending blocks are reported.
/// Empty inputs are valid and produce a correspondingly smaller output.
///
/// The function is pure: no side effects, and identical inputs always
/// yield identical output.
///
/// # Example
///
/// ```
/// use timeline_compose::compose;
/// use timeline_compose::models::{minutes, Block};
///
/// let base = vec![Block::new("math", minutes(8, 0), minutes(9, 0))];
/// let overrides = vec![Block::new("assembly", minutes(8, 30), minutes(8, 45))];
///
/// let composed = compose(&base, &overrides).unwrap();
/// assert_eq!(composed.len(), 3); // math is split around the assembly
/// ```
pub fn compose(base: &[Block], overrides: &[Block]) -> Result<Vec<Block>, Vec<ValidationError>> {
    validate_inputs(base, overrides)?;

    let mut accepted: Vec<Block> = Vec::with_capacity(base.len() + overrides.len());
    for block in base.iter().chain(overrides) {
        insert(&mut accepted, block);
    }

    // Stable sort: blocks with identical spans keep insertion order.
    accepted.sort_by_key(|b| (b.start_min, b.end_min));
    Ok(accepted)
}

/// Composes into a [`Timeline`] for gap and coverage queries.
pub fn compose_timeline(
    base: &[Block],
    overrides: &[Block],
) -> Result<Timeline, Vec<ValidationError>> {
    Ok(Timeline::new(compose(base, overrides)?))
}

/// Inserts one block into the accumulator, clipping every accepted block
/// it overlaps down to the remainder(s) outside the claimed span.
///
/// Remainders are non-empty by construction: a left remainder exists only
/// when the existing block starts strictly before the incoming one, and a
/// right remainder only when it ends strictly after.
fn insert(accepted: &mut Vec<Block>, incoming: &Block) {
    let mut next = Vec::with_capacity(accepted.len() + 2);
    for existing in accepted.drain(..) {
        if !existing.overlaps(incoming) {
            next.push(existing);
            continue;
        }
        if existing.start_min < incoming.start_min {
            next.push(Block::new(
                existing.label.clone(),
                existing.start_min,
                incoming.start_min,
            ));
        }
        if existing.end_min > incoming.end_min {
            next.push(Block::new(
                existing.label.clone(),
                incoming.end_min,
                existing.end_min,
            ));
        }
        // Fully covered: no remainder survives.
    }
    next.push(incoming.clone());
    *accepted = next;
}
