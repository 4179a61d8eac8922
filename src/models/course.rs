//! Course model.
//!
//! A course is the unit being placed: it needs exactly one room and one
//! weekly time slot. Its kind decides which rooms can host it and its
//! duration decides which slot windows are eligible.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::de;

/// A course to be assigned a room and a time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    /// Human-readable name.
    #[serde(default, alias = "nombre", deserialize_with = "de::opt_string")]
    pub name: Option<String>,
    /// Curriculum cycle (semester) label.
    #[serde(default, alias = "ciclo", deserialize_with = "de::opt_string")]
    pub cycle: Option<String>,
    /// Lecture or lab.
    #[serde(alias = "tipo", alias = "type")]
    pub kind: CourseKind,
    /// Number of enrolled students.
    #[serde(alias = "estudiantes", alias = "students", deserialize_with = "de::count")]
    pub enrolled: u32,
    /// Session length in hours (2 or 4).
    #[serde(alias = "duracion", deserialize_with = "de::count")]
    pub duration: u32,
}

/// Course classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseKind {
    /// Theory session; fits lecture halls and external rooms.
    #[serde(alias = "teoria", alias = "theory")]
    Lecture,
    /// Laboratory session; fits lab rooms only.
    #[serde(alias = "laboratorio", alias = "laboratory")]
    Lab,
}

impl CourseKind {
    /// Lowercase label used in exported records.
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseKind::Lecture => "lecture",
            CourseKind::Lab => "lab",
        }
    }
}

impl fmt::Display for CourseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Course {
    /// Creates a two-hour course with no students.
    pub fn new(id: impl Into<String>, kind: CourseKind) -> Self {
        Self {
            id: id.into(),
            name: None,
            cycle: None,
            kind,
            enrolled: 0,
            duration: 2,
        }
    }

    /// Creates a lecture course.
    pub fn lecture(id: impl Into<String>) -> Self {
        Self::new(id, CourseKind::Lecture)
    }

    /// Creates a lab course.
    pub fn lab(id: impl Into<String>) -> Self {
        Self::new(id, CourseKind::Lab)
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the cycle label.
    pub fn with_cycle(mut self, cycle: impl Into<String>) -> Self {
        self.cycle = Some(cycle.into());
        self
    }

    /// Sets the enrollment.
    pub fn with_enrolled(mut self, enrolled: u32) -> Self {
        self.enrolled = enrolled;
        self
    }

    /// Sets the session duration in hours.
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Name for display, falling back to `"Course <id>"`.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Course {}", self.id))
    }

    /// Whether this is a lab course.
    pub fn is_lab(&self) -> bool {
        self.kind == CourseKind::Lab
    }
}
