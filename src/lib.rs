//! Daily-timeline composition engine.
//!
//! Reconciles a baseline daily schedule with an ordered list of override
//! blocks into a single conflict-free, start-sorted timeline. Overrides are
//! applied in sequence order: a later entry outranks everything accepted
//! before it, claiming its span and clipping whatever it overlaps down to
//! the surviving remainders.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Block`, `Timeline`, `Gap`
//! - **`validation`**: Input integrity checks (inverted or zero-length intervals)
//! - **`compose`**: The composition engine
//!
//! # Architecture
//!
//! This crate is a pure algorithms layer: no I/O, no async, no shared
//! state. The surrounding application supplies the base timeline and the
//! override list (oldest edit first, newest last) and consumes the composed
//! result for rendering or persistence.
//!
//! # Example
//!
//! ```
//! use timeline_compose::compose;
//! use timeline_compose::models::{minutes, Block};
//!
//! let base = vec![Block::new("math", minutes(8, 0), minutes(9, 0))];
//! let overrides = vec![Block::new("assembly", minutes(8, 30), minutes(8, 45))];
//!
//! let composed = compose(&base, &overrides).unwrap();
//! let labels: Vec<&str> = composed.iter().map(|b| b.label.as_str()).collect();
//! assert_eq!(labels, ["math", "assembly", "math"]);
//! ```

pub mod compose;
pub mod models;
pub mod validation;

pub use compose::{compose, compose_timeline};
