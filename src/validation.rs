//! Input validation for timeline composition.
//!
//! Checks every block of both input sequences before any insertion logic
//! runs, so a malformed override can never corrupt partial output. Detects:
//! - Inverted intervals (start after end)
//! - Zero-length intervals (start equal to end)
//!
//! Labels are opaque and never validated. Empty sequences are valid.

use std::fmt;

use crate::models::Block;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Which input sequence a block came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSource {
    /// The baseline timeline.
    Base,
    /// The prioritized override list.
    Overrides,
}

impl fmt::Display for BlockSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockSource::Base => write!(f, "base"),
            BlockSource::Overrides => write!(f, "overrides"),
        }
    }
}

/// A validation error, identifying the offending block by source sequence,
/// position, and label.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Input sequence holding the offending block.
    pub source: BlockSource,
    /// Position of the offending block within its sequence.
    pub index: usize,
    /// Label of the offending block.
    pub label: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A block's start is after its end.
    InvertedInterval,
    /// A block's start equals its end (zero duration).
    EmptyInterval,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, source: BlockSource, index: usize, block: &Block) -> Self {
        let message = match kind {
            ValidationErrorKind::InvertedInterval => format!(
                "Block '{}' at {}[{}] starts at {} after its end {}",
                block.label, source, index, block.start_min, block.end_min
            ),
            ValidationErrorKind::EmptyInterval => format!(
                "Block '{}' at {}[{}] has zero duration at {}",
                block.label, source, index, block.start_min
            ),
        };
        Self {
            kind,
            source,
            index,
            label: block.label.clone(),
            message,
        }
    }
}

/// Validates both input sequences for composition.
///
/// Every block must satisfy `start < end`. All errors are collected, not
/// just the first.
///
/// # Returns
/// `Ok(())` if every block is well-formed, `Err(errors)` otherwise.
pub fn validate_inputs(base: &[Block], overrides: &[Block]) -> ValidationResult {
    let mut errors = Vec::new();
    check_sequence(base, BlockSource::Base, &mut errors);
    check_sequence(overrides, BlockSource::Overrides, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_sequence(blocks: &[Block], source: BlockSource, errors: &mut Vec<ValidationError>) {
    for (index, block) in blocks.iter().enumerate() {
        if block.start_min > block.end_min {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedInterval,
                source,
                index,
                block,
            ));
        } else if block.start_min == block.end_min {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyInterval,
                source,
                index,
                block,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::minutes;

    #[test]
    fn test_valid_inputs() {
        let base = vec![Block::new("math", minutes(8, 0), minutes(9, 0))];
        let overrides = vec![Block::new("assembly", minutes(8, 30), minutes(8, 45))];
        assert!(validate_inputs(&base, &overrides).is_ok());
    }

    #[test]
    fn test_empty_sequences_are_valid() {
        assert!(validate_inputs(&[], &[]).is_ok());
    }

    #[test]
    fn test_inverted_interval() {
        let overrides = vec![
            Block::new("ok", minutes(8, 0), minutes(9, 0)),
            Block::new("backwards", minutes(9, 0), minutes(8, 0)),
        ];
        let errors = validate_inputs(&[], &overrides).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvertedInterval);
        assert_eq!(errors[0].source, BlockSource::Overrides);
        assert_eq!(errors[0].index, 1);
        assert_eq!(errors[0].label, "backwards");
    }

    #[test]
    fn test_zero_duration_interval() {
        let base = vec![Block::new("instant", minutes(12, 0), minutes(12, 0))];
        let errors = validate_inputs(&base, &[]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInterval);
        assert_eq!(errors[0].source, BlockSource::Base);
        assert_eq!(errors[0].index, 0);
    }

    #[test]
    fn test_all_errors_collected() {
        let base = vec![Block::new("bad base", 100, 50)];
        let overrides = vec![
            Block::new("fine", 0, 10),
            Block::new("bad override", 20, 20),
        ];
        let errors = validate_inputs(&base, &overrides).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .any(|e| e.source == BlockSource::Base && e.kind == ValidationErrorKind::InvertedInterval));
        assert!(errors
            .iter()
            .any(|e| e.source == BlockSource::Overrides && e.kind == ValidationErrorKind::EmptyInterval));
    }

    #[test]
    fn test_message_names_position_and_label() {
        let overrides = vec![Block::new("late start", 600, 540)];
        let errors = validate_inputs(&[], &overrides).unwrap_err();
        assert!(errors[0].message.contains("late start"));
        assert!(errors[0].message.contains("overrides[0]"));
    }
}
