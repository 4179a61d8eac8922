//! Human-readable timetable output.
//!
//! Expands a solution into flat, denormalized rows (one per assignment)
//! ready for a tabular export, and bundles them with run statistics.
//!
//! # Display defaults
//!
//! | Field | Default when absent |
//! |-------|---------------------|
//! | `course_name` | `Course <id>` |
//! | `cycle` | `N/A` |
//! | `room_name` | `Room <id>` |
//! | `location` | `Campus` |

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::NotFoundError;
use crate::fitness::count_conflicts;
use crate::ga::GaResult;
use crate::models::{CourseKind, RoomKind, Solution};

/// One assignment joined with its course and room details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedAssignment {
    pub course_id: String,
    pub course_name: String,
    pub cycle: String,
    pub course_kind: CourseKind,
    pub enrolled: u32,
    /// Session length in hours.
    pub duration: u32,
    pub room_id: String,
    pub room_name: String,
    pub room_kind: RoomKind,
    pub capacity: u32,
    pub location: String,
    /// Slot label, e.g. `Monday 07:00-09:00`.
    pub slot: String,
}

/// Formats every assignment of `solution`, in solution order.
///
/// # Errors
/// [`NotFoundError`] if a gene references an ID missing from `catalog`.
pub fn format_solution(
    catalog: &Catalog,
    solution: &Solution,
) -> Result<Vec<FormattedAssignment>, NotFoundError> {
    solution
        .iter()
        .map(|gene| {
            let course = catalog.course_by_id(&gene.course_id)?;
            let room = catalog.room_by_id(&gene.room_id)?;
            Ok(FormattedAssignment {
                course_id: course.id.clone(),
                course_name: course.display_name(),
                cycle: course.cycle.clone().unwrap_or_else(|| "N/A".to_string()),
                course_kind: course.kind,
                enrolled: course.enrolled,
                duration: course.duration,
                room_id: room.id.clone(),
                room_name: room.display_name(),
                room_kind: room.kind,
                capacity: room.capacity,
                location: room.display_location().to_string(),
                slot: gene.slot.to_string(),
            })
        })
        .collect()
}

/// Summary numbers for a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStatistics {
    /// Rows in the formatted solution.
    pub total_assignments: usize,
    /// Conflicts in the returned solution.
    pub conflicts: usize,
    /// Best fitness per generation.
    pub fitness_history: Vec<f64>,
    /// Highest value in `fitness_history`.
    ///
    /// Falls back to the returned solution's fitness when no generation
    /// completed.
    pub best_fitness: f64,
    /// Generations executed.
    pub generations: usize,
}

/// Formatted solution plus statistics, as handed to an output adapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationReport {
    pub solution: Vec<FormattedAssignment>,
    pub statistics: RunStatistics,
}

impl OptimizationReport {
    /// Builds the report for a run over `catalog`.
    pub fn build(catalog: &Catalog, result: &GaResult) -> Result<Self, NotFoundError> {
        let solution = format_solution(catalog, &result.best)?;
        let conflicts = count_conflicts(catalog, &result.best)?;
        let best_fitness = result
            .history
            .iter()
            .copied()
            .reduce(f64::max)
            .unwrap_or(result.best_fitness);

        Ok(Self {
            statistics: RunStatistics {
                total_assignments: solution.len(),
                conflicts,
                fitness_history: result.history.clone(),
                best_fitness,
                generations: result.generations,
            },
            solution,
        })
    }
}
