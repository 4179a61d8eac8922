//! Input validation for timetabling problems.
//!
//! Checks structural integrity of courses and rooms before a catalog is
//! built. Detects:
//! - Duplicate and empty IDs
//! - Session durations outside the slot grid (2 or 4 hours)
//! - Negative or non-finite room distances
//! - Courses that no room can host
//!
//! A course with no compatible room is rejected here rather than being
//! left out of generated solutions, so every solution covers every course.

use crate::models::{Course, Room};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An entity has a blank ID.
    EmptyId,
    /// A course duration is not 2 or 4 hours.
    InvalidDuration,
    /// A room distance is negative, NaN, or infinite.
    InvalidDistance,
    /// No room in the catalog accepts the course's kind.
    NoCompatibleRoom,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the input data for a timetabling problem.
///
/// Checks:
/// 1. No empty or duplicate room IDs
/// 2. Room distances are finite and non-negative
/// 3. No empty or duplicate course IDs
/// 4. Course durations are 2 or 4 hours
/// 5. Every course has at least one compatible room
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(courses: &[Course], rooms: &[Room]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut room_ids = HashSet::new();
    for r in rooms {
        if r.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Room with empty ID",
            ));
        } else if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }

        if !r.distance.is_finite() || r.distance < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDistance,
                format!("Room '{}' has invalid distance {}", r.id, r.distance),
            ));
        }
    }

    let mut course_ids = HashSet::new();
    for c in courses {
        if c.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Course with empty ID",
            ));
        } else if !course_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }

        if c.duration != 2 && c.duration != 4 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!(
                    "Course '{}' has duration {}h (expected 2 or 4)",
                    c.id, c.duration
                ),
            ));
        }

        if !rooms.iter().any(|r| r.accepts(c.kind)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoCompatibleRoom,
                format!("Course '{}' ({}) has no compatible room", c.id, c.kind),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
