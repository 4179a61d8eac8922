//! Conflict counting and scalar fitness.
//!
//! # Conflicts
//!
//! | Source | Rule | Weight |
//! |--------|------|--------|
//! | Capacity (lecture) | enrolled > room capacity | +1 |
//! | Capacity (lab) | enrolled > [`LAB_CAPACITY`] | +1 |
//! | Double booking | k assignments on one (room, slot) | +(k-1) |
//!
//! # Fitness
//!
//! `max(0, 1000 - 100 * conflicts - Σ external distance * 0.1)`.
//! Higher is better; 1000 means no conflicts and no distance penalty.
//! An external room with zero distance costs nothing.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::NotFoundError;
use crate::models::{CourseKind, Solution, TimeSlot};

/// Fitness of a perfect solution.
pub const MAX_FITNESS: f64 = 1000.0;

/// Fitness lost per conflict.
pub const CONFLICT_PENALTY: f64 = 100.0;

/// Distance multiplier for external rooms.
pub const DISTANCE_WEIGHT: f64 = 0.1;

/// Seat limit for lab sessions, regardless of the room's own capacity.
pub const LAB_CAPACITY: u32 = 15;

/// Per-component score of one solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitnessBreakdown {
    /// Assignments whose course exceeds the seat limit.
    pub capacity_conflicts: usize,
    /// Repeated (room, slot) uses beyond the first.
    pub double_bookings: usize,
    /// Sum of external-room distances times [`DISTANCE_WEIGHT`].
    pub distance_penalty: f64,
}

impl FitnessBreakdown {
    /// Total hard conflicts.
    pub fn conflicts(&self) -> usize {
        self.capacity_conflicts + self.double_bookings
    }

    /// Scalar fitness, floored at zero.
    pub fn fitness(&self) -> f64 {
        let raw = MAX_FITNESS - CONFLICT_PENALTY * self.conflicts() as f64 - self.distance_penalty;
        raw.max(0.0)
    }
}

/// Scores a solution in one pass.
///
/// # Errors
/// [`NotFoundError`] if any gene names a course or room missing from
/// `catalog`.
pub fn evaluate(catalog: &Catalog, solution: &Solution) -> Result<FitnessBreakdown, NotFoundError> {
    let mut capacity_conflicts = 0;
    let mut double_bookings = 0;
    let mut distance_penalty = 0.0;
    let mut booked: HashSet<(&str, TimeSlot)> = HashSet::with_capacity(solution.len());

    for gene in solution {
        let course = catalog.course_by_id(&gene.course_id)?;
        let room = catalog.room_by_id(&gene.room_id)?;

        let limit = match course.kind {
            CourseKind::Lecture => room.capacity,
            CourseKind::Lab => LAB_CAPACITY,
        };
        if course.enrolled > limit {
            capacity_conflicts += 1;
        }

        if !booked.insert((gene.room_id.as_str(), gene.slot)) {
            double_bookings += 1;
        }

        if room.is_external() {
            distance_penalty += room.distance * DISTANCE_WEIGHT;
        }
    }

    Ok(FitnessBreakdown {
        capacity_conflicts,
        double_bookings,
        distance_penalty,
    })
}

/// Counts hard conflicts (capacity + double booking) in a solution.
pub fn count_conflicts(catalog: &Catalog, solution: &Solution) -> Result<usize, NotFoundError> {
    evaluate(catalog, solution).map(|b| b.conflicts())
}

/// Scalar fitness of a solution, in `[0, 1000]`.
pub fn fitness(catalog: &Catalog, solution: &Solution) -> Result<f64, NotFoundError> {
    evaluate(catalog, solution).map(|b| b.fitness())
}

/// Re-checks a solution without running the search.
///
/// Returns the number of conflicts, as reported by [`count_conflicts`].
pub fn validate(catalog: &Catalog, solution: &Solution) -> Result<usize, NotFoundError> {
    count_conflicts(catalog, solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::random_solution;
    use crate::models::{Assignment, Course, Room, Weekday};
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn slot(day: Weekday, start: u8, end: u8) -> TimeSlot {
        TimeSlot::new(day, start, end)
    }

    /// Two lectures (30, 50 students), one hall (45), one external (60, distance 10).
    fn lecture_catalog() -> Catalog {
        Catalog::new(
            vec![
                Course::lecture("C30").with_enrolled(30),
                Course::lecture("C50").with_enrolled(50),
            ],
            vec![
                Room::lecture("HALL").with_capacity(45),
                Room::external("EXT", 10.0).with_capacity(60),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lecture_over_capacity() {
        let cat = lecture_catalog();
        let sol: Solution = vec![
            Assignment::new("C30", "EXT", slot(Weekday::Monday, 7, 9)),
            Assignment::new("C50", "HALL", slot(Weekday::Monday, 7, 9)),
        ]
        .into();

        let b = evaluate(&cat, &sol).unwrap();
        assert!(b.capacity_conflicts >= 1);
        assert_eq!(b.double_bookings, 0);
    }

    #[test]
    fn test_external_room_distance_penalty() {
        let cat = lecture_catalog();
        let sol: Solution = vec![
            Assignment::new("C30", "HALL", slot(Weekday::Monday, 7, 9)),
            Assignment::new("C50", "EXT", slot(Weekday::Monday, 7, 9)),
        ]
        .into();

        let b = evaluate(&cat, &sol).unwrap();
        assert_eq!(b.conflicts(), 0);
        assert!((b.distance_penalty - 1.0).abs() < 1e-10);
        assert!((b.fitness() - 999.0).abs() < 1e-10);
    }

    #[test]
    fn test_lab_cap_ignores_room_capacity() {
        let cat = Catalog::new(
            vec![Course::lab("L20").with_enrolled(20)],
            vec![
                Room::lab("LAB").with_capacity(15),
                Room::external("EXT", 1.0).with_capacity(100),
            ],
        )
        .unwrap();
        assert_eq!(cat.rooms_compatible_with(&cat.courses()[0]).len(), 1);

        let sol: Solution = vec![Assignment::new("L20", "LAB", slot(Weekday::Friday, 9, 11))].into();
        assert_eq!(count_conflicts(&cat, &sol).unwrap(), 1);

        // A roomy lab still trips the fixed cap.
        let cat = Catalog::new(
            vec![Course::lab("L20").with_enrolled(20)],
            vec![Room::lab("BIGLAB").with_capacity(40)],
        )
        .unwrap();
        let sol: Solution = vec![Assignment::new("L20", "BIGLAB", slot(Weekday::Friday, 9, 11))].into();
        assert_eq!(count_conflicts(&cat, &sol).unwrap(), 1);
    }

    #[test]
    fn test_double_booking_counts_once_per_extra_use() {
        let cat = Catalog::new(
            vec![
                Course::lecture("A").with_enrolled(10),
                Course::lecture("B").with_enrolled(10),
                Course::lecture("C").with_enrolled(10),
            ],
            vec![Room::lecture("HALL").with_capacity(45)],
        )
        .unwrap();
        let s = slot(Weekday::Tuesday, 14, 16);

        let pair: Solution = vec![
            Assignment::new("A", "HALL", s),
            Assignment::new("B", "HALL", s),
            Assignment::new("C", "HALL", slot(Weekday::Tuesday, 16, 18)),
        ]
        .into();
        assert_eq!(count_conflicts(&cat, &pair).unwrap(), 1);

        let triple: Solution = vec![
            Assignment::new("A", "HALL", s),
            Assignment::new("B", "HALL", s),
            Assignment::new("C", "HALL", s),
        ]
        .into();
        assert_eq!(count_conflicts(&cat, &triple).unwrap(), 2);
    }

    #[test]
    fn test_overlapping_windows_do_not_conflict() {
        let cat = Catalog::new(
            vec![Course::lecture("A"), Course::lecture("B")],
            vec![Room::lecture("HALL").with_capacity(45)],
        )
        .unwrap();
        let sol: Solution = vec![
            Assignment::new("A", "HALL", slot(Weekday::Monday, 18, 20)),
            Assignment::new("B", "HALL", slot(Weekday::Monday, 19, 21)),
        ]
        .into();
        assert_eq!(count_conflicts(&cat, &sol).unwrap(), 0);
    }

    #[test]
    fn test_fitness_floor_at_zero() {
        let cat = Catalog::new(
            (0..12)
                .map(|i| Course::lecture(format!("C{i}")).with_enrolled(100))
                .collect(),
            vec![Room::lecture("HALL").with_capacity(10)],
        )
        .unwrap();
        let s = slot(Weekday::Monday, 7, 9);
        let sol: Solution = cat
            .courses()
            .iter()
            .map(|c| Assignment::new(c.id.clone(), "HALL", s))
            .collect();

        let b = evaluate(&cat, &sol).unwrap();
        assert_eq!(b.conflicts(), 12 + 11);
        assert_eq!(b.fitness(), 0.0);
    }

    #[test]
    fn test_fitness_range_and_perfect_score() {
        let cat = Catalog::new(
            vec![
                Course::lecture("A").with_enrolled(30),
                Course::lecture("B").with_enrolled(70),
                Course::lab("L").with_enrolled(12),
            ],
            vec![
                Room::lecture("HALL").with_capacity(45),
                Room::lab("LAB").with_capacity(15),
                Room::external("EXT", 4.0).with_capacity(80),
            ],
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(3);

        for _ in 0..200 {
            let sol = random_solution(&cat, &mut rng);
            let b = evaluate(&cat, &sol).unwrap();
            let f = b.fitness();
            assert!((0.0..=MAX_FITNESS).contains(&f));

            let uses_external = sol.iter().any(|g| g.room_id == "EXT");
            assert_eq!(f == MAX_FITNESS, b.conflicts() == 0 && !uses_external);
        }
    }

    #[test]
    fn test_zero_distance_external_room_is_free() {
        let cat = Catalog::new(
            vec![Course::lecture("A").with_enrolled(30)],
            vec![Room::external("EXT", 0.0).with_capacity(40)],
        )
        .unwrap();
        let sol: Solution =
            vec![Assignment::new("A", "EXT", slot(Weekday::Monday, 7, 9))].into();
        let b = evaluate(&cat, &sol).unwrap();
        assert_eq!(b.distance_penalty, 0.0);
        assert_eq!(b.fitness(), MAX_FITNESS);
    }

    #[test]
    fn test_conflicts_order_independent() {
        let cat = Catalog::new(
            (0..8)
                .map(|i| Course::lecture(format!("C{i}")).with_enrolled(20 + 5 * i))
                .collect(),
            vec![
                Room::lecture("HALL").with_capacity(40),
                Room::external("EXT", 2.0).with_capacity(30),
            ],
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(11);

        for _ in 0..50 {
            let sol = random_solution(&cat, &mut rng);
            let expected = evaluate(&cat, &sol).unwrap();

            let mut genes = sol.into_genes();
            genes.shuffle(&mut rng);
            let shuffled: Solution = genes.into();
            let got = evaluate(&cat, &shuffled).unwrap();

            assert_eq!(got.conflicts(), expected.conflicts());
            assert!((got.distance_penalty - expected.distance_penalty).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unknown_ids() {
        let cat = lecture_catalog();
        let bad_room: Solution = vec![Assignment::new("C30", "NOPE", slot(Weekday::Monday, 7, 9))].into();
        assert_eq!(
            validate(&cat, &bad_room).unwrap_err(),
            NotFoundError::Room("NOPE".into())
        );

        let bad_course: Solution = vec![Assignment::new("X", "HALL", slot(Weekday::Monday, 7, 9))].into();
        assert_eq!(
            fitness(&cat, &bad_course).unwrap_err(),
            NotFoundError::Course("X".into())
        );
    }

    #[test]
    fn test_empty_solution_is_perfect() {
        let cat = lecture_catalog();
        assert_eq!(fitness(&cat, &Solution::new()).unwrap(), MAX_FITNESS);
    }
}
