//! Timeline domain models.
//!
//! Core data types for daily-timeline composition: the labeled time span
//! the engine operates on, and the settled sequence it emits.
//!
//! # Time Model
//! All times are minutes relative to midnight of an arbitrary shared day.
//! The consumer defines which day; the engine only compares.

mod block;
mod timeline;

pub use block::{minutes, Block};
pub use timeline::{Gap, Timeline};
