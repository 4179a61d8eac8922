//! Solution (individual) model.
//!
//! A solution holds one assignment per course, in catalog course order.
//! Crossover and mutation work by position, so that ordering must be
//! kept intact for the whole run.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// A course-room-slot assignment (one gene).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned course ID.
    pub course_id: String,
    /// Assigned room ID.
    pub room_id: String,
    /// Weekly slot.
    pub slot: TimeSlot,
}

impl Assignment {
    /// Creates an assignment of `course_id` to `room_id` at `slot`.
    pub fn new(course_id: impl Into<String>, room_id: impl Into<String>, slot: TimeSlot) -> Self {
        Self {
            course_id: course_id.into(),
            room_id: room_id.into(),
            slot,
        }
    }
}

/// A candidate timetable: an ordered list of assignments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution {
    genes: Vec<Assignment>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty solution with room for `n` genes.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            genes: Vec::with_capacity(n),
        }
    }

    /// Appends an assignment.
    pub fn push(&mut self, assignment: Assignment) {
        self.genes.push(assignment);
    }

    /// Assignments in course order.
    pub fn genes(&self) -> &[Assignment] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [Assignment] {
        &mut self.genes
    }

    /// Assignment at `index`.
    pub fn get(&self, index: usize) -> Option<&Assignment> {
        self.genes.get(index)
    }

    /// Iterates over the assignments in course order.
    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.genes.iter()
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the solution has no assignments.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Consumes the solution, returning its assignments.
    pub fn into_genes(self) -> Vec<Assignment> {
        self.genes
    }
}

impl From<Vec<Assignment>> for Solution {
    fn from(genes: Vec<Assignment>) -> Self {
        Self { genes }
    }
}

impl FromIterator<Assignment> for Solution {
    fn from_iter<I: IntoIterator<Item = Assignment>>(iter: I) -> Self {
        Self {
            genes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}
