//! Course and room catalog.
//!
//! A [`Catalog`] is the read-only problem instance for one optimization
//! run. It is validated on construction and indexes courses and rooms
//! by ID, plus the list of compatible rooms per course, so lookups in
//! the search loop are constant-time.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{LoadError, NotFoundError};
use crate::models::{Course, Room};
use crate::validation::validate_catalog;

/// One parsed tabular row: column name → cell value.
pub type Record = serde_json::Map<String, Value>;

/// Immutable courses and rooms for one run.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    rooms: Vec<Room>,
    course_index: HashMap<String, usize>,
    room_index: HashMap<String, usize>,
    /// Compatible room indices per course, in room order.
    compatible: Vec<Vec<usize>>,
}

impl Catalog {
    /// Builds a catalog from domain values.
    ///
    /// # Errors
    /// [`LoadError::Invalid`] with every problem found by
    /// [`validate_catalog`].
    pub fn new(courses: Vec<Course>, rooms: Vec<Room>) -> Result<Self, LoadError> {
        validate_catalog(&courses, &rooms).map_err(LoadError::Invalid)?;

        let course_index = courses
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();
        let room_index = rooms
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        let compatible = courses
            .iter()
            .map(|c| {
                rooms
                    .iter()
                    .enumerate()
                    .filter(|(_, r)| r.accepts(c.kind))
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect();

        for room in rooms.iter().filter(|r| r.is_external() && r.distance == 0.0) {
            warn!(room = %room.id, "external room has zero distance and adds no penalty");
        }
        debug!(courses = courses.len(), rooms = rooms.len(), "catalog built");

        Ok(Self {
            courses,
            rooms,
            course_index,
            room_index,
            compatible,
        })
    }

    /// Courses in load order. Solutions follow this order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Rooms in load order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the catalog has no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Looks up a course by ID.
    pub fn course_by_id(&self, id: &str) -> Result<&Course, NotFoundError> {
        self.course_index
            .get(id)
            .map(|&i| &self.courses[i])
            .ok_or_else(|| NotFoundError::Course(id.to_string()))
    }

    /// Looks up a room by ID.
    pub fn room_by_id(&self, id: &str) -> Result<&Room, NotFoundError> {
        self.room_index
            .get(id)
            .map(|&i| &self.rooms[i])
            .ok_or_else(|| NotFoundError::Room(id.to_string()))
    }

    /// Position of a course in [`courses`](Self::courses).
    pub fn course_position(&self, id: &str) -> Result<usize, NotFoundError> {
        self.course_index
            .get(id)
            .copied()
            .ok_or_else(|| NotFoundError::Course(id.to_string()))
    }

    /// Rooms that can host `course`, in catalog order.
    ///
    /// Works for any course value, including ones not in this catalog.
    pub fn rooms_compatible_with(&self, course: &Course) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.accepts(course.kind)).collect()
    }

    /// Precomputed compatible rooms for the course at `position`.
    ///
    /// Empty for out-of-range positions.
    pub fn compatible_rooms_at(&self, position: usize) -> impl Iterator<Item = &Room> + '_ {
        self.compatible
            .get(position)
            .into_iter()
            .flatten()
            .map(move |&i| &self.rooms[i])
    }

    /// Number of compatible rooms for the course at `position`.
    pub(crate) fn compatible_count(&self, position: usize) -> usize {
        self.compatible.get(position).map_or(0, Vec::len)
    }

    /// The `nth` compatible room of the course at `position`.
    pub(crate) fn compatible_room(&self, position: usize, nth: usize) -> Option<&Room> {
        self.compatible
            .get(position)
            .and_then(|v| v.get(nth))
            .map(|&i| &self.rooms[i])
    }
}

/// Builds a catalog from parsed tabular records.
///
/// Each record is deserialized into a [`Course`] or [`Room`]; see those
/// types for accepted column names and value spellings. The resulting
/// catalog is validated as in [`Catalog::new`].
///
/// # Errors
/// - [`LoadError::Course`] / [`LoadError::Room`] for the first record
///   with a missing or unparsable required field.
/// - [`LoadError::Invalid`] when the records parse but do not form a
///   valid catalog (duplicate IDs, unhostable courses, etc.).
pub fn load_catalog<C, R>(course_records: C, room_records: R) -> Result<Catalog, LoadError>
where
    C: IntoIterator<Item = Record>,
    R: IntoIterator<Item = Record>,
{
    let courses = course_records
        .into_iter()
        .enumerate()
        .map(|(index, rec)| {
            serde_json::from_value(Value::Object(rec))
                .map_err(|source| LoadError::Course { index, source })
        })
        .collect::<Result<Vec<Course>, _>>()?;

    let rooms = room_records
        .into_iter()
        .enumerate()
        .map(|(index, rec)| {
            serde_json::from_value(Value::Object(rec))
                .map_err(|source| LoadError::Room { index, source })
        })
        .collect::<Result<Vec<Room>, _>>()?;

    Catalog::new(courses, rooms)
}
