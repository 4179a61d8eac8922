//! Random gene and individual construction.
//!
//! All draws come from the caller's RNG so runs are reproducible
//! from a seed.

use rand::Rng;

use crate::catalog::Catalog;
use crate::models::{windows_for, Assignment, Solution, TimeSlot, Weekday};

/// Draws a slot for a session of `duration` hours.
///
/// Picks a weekday uniformly, then a window uniformly from the two-hour
/// grid when `duration == 2`, otherwise one of the two four-hour windows.
pub fn random_slot<R: Rng>(duration: u32, rng: &mut R) -> TimeSlot {
    let day = Weekday::ALL[rng.random_range(0..Weekday::ALL.len())];
    let windows = windows_for(duration);
    let (start, end) = windows[rng.random_range(0..windows.len())];
    TimeSlot::new(day, start, end)
}

/// Draws a compatible room and a slot for the course at `position`.
///
/// Returns `None` if the course has no compatible room.
pub fn random_assignment<R: Rng>(
    catalog: &Catalog,
    position: usize,
    rng: &mut R,
) -> Option<Assignment> {
    let course = catalog.courses().get(position)?;
    let n = catalog.compatible_count(position);
    if n == 0 {
        return None;
    }
    let room = catalog.compatible_room(position, rng.random_range(0..n))?;
    let slot = random_slot(course.duration, rng);
    Some(Assignment::new(course.id.clone(), room.id.clone(), slot))
}

/// Builds a random individual: one gene per course, in catalog order.
///
/// Courses without a compatible room get no gene. A validated
/// [`Catalog`] never contains such courses.
pub fn random_solution<R: Rng>(catalog: &Catalog, rng: &mut R) -> Solution {
    let mut solution = Solution::with_capacity(catalog.course_count());
    for position in 0..catalog.course_count() {
        if let Some(gene) = random_assignment(catalog, position, rng) {
            solution.push(gene);
        }
    }
    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Room, FOUR_HOUR_WINDOWS, TWO_HOUR_WINDOWS};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![
                Course::lecture("C1").with_enrolled(30),
                Course::lab("C2").with_enrolled(12).with_duration(4),
                Course::lecture("C3").with_enrolled(50),
            ],
            vec![
                Room::lecture("A101").with_capacity(45),
                Room::lab("LAB01").with_capacity(15),
                Room::external("EXT01", 10.0).with_capacity(60),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_random_slot_two_hour() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let s = random_slot(2, &mut rng);
            assert!(TWO_HOUR_WINDOWS.contains(&(s.start_hour, s.end_hour)));
        }
    }

    #[test]
    fn test_random_slot_four_hour() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let s = random_slot(4, &mut rng);
            assert!(FOUR_HOUR_WINDOWS.contains(&(s.start_hour, s.end_hour)));
            seen.insert((s.start_hour, s.end_hour));
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_random_slot_covers_all_days() {
        let mut rng = SmallRng::seed_from_u64(7);
        let days: HashSet<Weekday> = (0..500).map(|_| random_slot(2, &mut rng).day).collect();
        assert_eq!(days.len(), 5);
    }

    #[test]
    fn test_random_solution_follows_course_order() {
        let cat = sample_catalog();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let sol = random_solution(&cat, &mut rng);
            assert_eq!(sol.len(), cat.course_count());
            for (gene, course) in sol.iter().zip(cat.courses()) {
                assert_eq!(gene.course_id, course.id);
                let room = cat.room_by_id(&gene.room_id).unwrap();
                assert!(room.accepts(course.kind));
                assert_eq!(gene.slot.duration_hours(), course.duration);
            }
        }
    }

    #[test]
    fn test_lab_course_only_gets_lab_room() {
        let cat = sample_catalog();
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..50 {
            let gene = random_assignment(&cat, 1, &mut rng).unwrap();
            assert_eq!(gene.room_id, "LAB01");
        }
    }

    #[test]
    fn test_random_assignment_out_of_range() {
        let cat = sample_catalog();
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(random_assignment(&cat, 10, &mut rng).is_none());
    }

    #[test]
    fn test_same_seed_same_solution() {
        let cat = sample_catalog();
        let a = random_solution(&cat, &mut SmallRng::seed_from_u64(9));
        let b = random_solution(&cat, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
