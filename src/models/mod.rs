//! Timetabling domain models.
//!
//! Provides the data types for course-to-room timetabling problems and
//! their candidate solutions.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | Conference | Clinic |
//! |-------------|------------|------------|--------|
//! | Course | Course section | Talk | Appointment block |
//! | Room | Classroom/Lab | Hall | Exam room |
//! | TimeSlot | Weekly period | Session slot | Shift window |
//! | Solution | Timetable | Programme | Roster |

pub(crate) mod de;

mod course;
mod room;
mod solution;
mod time_slot;

pub use course::{Course, CourseKind};
pub use room::{Room, RoomKind};
pub use solution::{Assignment, Solution};
pub use time_slot::{windows_for, TimeSlot, Weekday, FOUR_HOUR_WINDOWS, TWO_HOUR_WINDOWS};
