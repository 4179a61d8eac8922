//! Room model.
//!
//! Rooms host courses. Campus rooms are either lecture halls or labs;
//! external rooms are rented space away from campus that can take
//! lectures at the cost of a distance penalty.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::de;
use super::CourseKind;

/// A room that courses can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    /// Human-readable name.
    #[serde(default, alias = "nombre", deserialize_with = "de::opt_string")]
    pub name: Option<String>,
    /// Room classification.
    #[serde(alias = "tipo", alias = "type")]
    pub kind: RoomKind,
    /// Seats available.
    #[serde(alias = "capacidad", deserialize_with = "de::count")]
    pub capacity: u32,
    /// Building or site label.
    #[serde(default, alias = "ubicacion", deserialize_with = "de::opt_string")]
    pub location: Option<String>,
    /// Distance from campus; only penalized for external rooms.
    #[serde(default, alias = "distancia", deserialize_with = "de::opt_f64")]
    pub distance: f64,
}

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    /// On-campus lecture hall.
    #[serde(alias = "teoria", alias = "theory")]
    Lecture,
    /// On-campus laboratory.
    #[serde(alias = "laboratorio", alias = "laboratory")]
    Lab,
    /// Off-campus room (lectures only, distance-penalized).
    #[serde(alias = "externa")]
    External,
}

impl RoomKind {
    /// Whether a room of this kind can host a course of `course` kind.
    ///
    /// Lectures go to lecture halls or external rooms; labs only to labs.
    pub fn accepts(self, course: CourseKind) -> bool {
        match course {
            CourseKind::Lecture => matches!(self, RoomKind::Lecture | RoomKind::External),
            CourseKind::Lab => self == RoomKind::Lab,
        }
    }

    /// Lowercase label used in exported records.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomKind::Lecture => "lecture",
            RoomKind::Lab => "lab",
            RoomKind::External => "external",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Room {
    /// Creates a room with zero capacity.
    pub fn new(id: impl Into<String>, kind: RoomKind) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind,
            capacity: 0,
            location: None,
            distance: 0.0,
        }
    }

    /// Creates a lecture hall.
    pub fn lecture(id: impl Into<String>) -> Self {
        Self::new(id, RoomKind::Lecture)
    }

    /// Creates a lab.
    pub fn lab(id: impl Into<String>) -> Self {
        Self::new(id, RoomKind::Lab)
    }

    /// Creates an external room at the given distance.
    pub fn external(id: impl Into<String>, distance: f64) -> Self {
        Self::new(id, RoomKind::External).with_distance(distance)
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the location label.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the distance.
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Whether this is an off-campus room.
    pub fn is_external(&self) -> bool {
        self.kind == RoomKind::External
    }

    /// Whether this room can host `kind` courses.
    pub fn accepts(&self, kind: CourseKind) -> bool {
        self.kind.accepts(kind)
    }

    /// Name for display, falling back to `"Room <id>"`.
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| format!("Room {}", self.id))
    }

    /// Location for display, falling back to `"Campus"`.
    pub fn display_location(&self) -> &str {
        self.location.as_deref().unwrap_or("Campus")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_room_builder() {
        let r = Room::external("EXT01", 5.0)
            .with_name("External Room 1")
            .with_capacity(50)
            .with_location("Downtown Pool");

        assert_eq!(r.id, "EXT01");
        assert_eq!(r.kind, RoomKind::External);
        assert_eq!(r.capacity, 50);
        assert!((r.distance - 5.0).abs() < 1e-10);
        assert!(r.is_external());
        assert_eq!(r.display_location(), "Downtown Pool");
    }

    #[test]
    fn test_display_defaults() {
        let r = Room::lecture("A101");
        assert_eq!(r.display_name(), "Room A101");
        assert_eq!(r.display_location(), "Campus");
    }

    #[test]
    fn test_compatibility_rules() {
        assert!(RoomKind::Lecture.accepts(CourseKind::Lecture));
        assert!(RoomKind::External.accepts(CourseKind::Lecture));
        assert!(!RoomKind::Lab.accepts(CourseKind::Lecture));

        assert!(RoomKind::Lab.accepts(CourseKind::Lab));
        assert!(!RoomKind::Lecture.accepts(CourseKind::Lab));
        assert!(!RoomKind::External.accepts(CourseKind::Lab));
    }

    #[test]
    fn test_deserialize_spreadsheet_record() {
        let r: Room = serde_json::from_value(json!({
            "id": "EXT01",
            "nombre": "Aula Externa 1",
            "tipo": "externa",
            "capacidad": 50,
            "ubicacion": "Pool de Aulas",
            "distancia": 5
        }))
        .unwrap();
        assert_eq!(r.kind, RoomKind::External);
        assert_eq!(r.capacity, 50);
        assert!((r.distance - 5.0).abs() < 1e-10);
        assert_eq!(r.display_name(), "Aula Externa 1");
    }

    #[test]
    fn test_deserialize_missing_distance_defaults_to_zero() {
        let r: Room = serde_json::from_value(json!({
            "id": "LAB01", "kind": "lab", "capacity": 15
        }))
        .unwrap();
        assert_eq!(r.distance, 0.0);
        assert!(r.location.is_none());
    }

    #[test]
    fn test_deserialize_rejects_unknown_kind() {
        let r: Result<Room, _> = serde_json::from_value(json!({
            "id": "X", "kind": "gym", "capacity": 15
        }));
        assert!(r.is_err());
    }
}
