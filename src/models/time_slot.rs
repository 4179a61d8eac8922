//! Weekly time slots.
//!
//! Slots are plain values drawn from a fixed grid: five weekdays crossed
//! with a set of start/end windows that depends on session length.
//! Two assignments collide only when they share a room and an identical
//! slot; partially overlapping windows (18-20 and 19-21) do not count.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All teaching days, Monday first.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// English day name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Start/end hours for two-hour sessions.
pub const TWO_HOUR_WINDOWS: [(u8, u8); 7] = [
    (7, 9),
    (9, 11),
    (11, 13),
    (14, 16),
    (16, 18),
    (18, 20),
    (19, 21),
];

/// Start/end hours for four-hour sessions.
pub const FOUR_HOUR_WINDOWS: [(u8, u8); 2] = [(7, 11), (14, 18)];

/// Eligible windows for a session of `duration` hours.
///
/// Anything other than 2 is treated as a four-hour session.
pub fn windows_for(duration: u32) -> &'static [(u8, u8)] {
    if duration == 2 {
        &TWO_HOUR_WINDOWS
    } else {
        &FOUR_HOUR_WINDOWS
    }
}

/// A (day, start hour, end hour) slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: Weekday,
    pub start_hour: u8,
    pub end_hour: u8,
}

impl TimeSlot {
    /// Creates a slot on `day` from `start_hour` to `end_hour`.
    pub fn new(day: Weekday, start_hour: u8, end_hour: u8) -> Self {
        Self {
            day,
            start_hour,
            end_hour,
        }
    }

    /// Session length in hours.
    #[inline]
    pub fn duration_hours(&self) -> u32 {
        u32::from(self.end_hour.saturating_sub(self.start_hour))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:00-{:02}:00",
            self.day, self.start_hour, self.end_hour
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let s = TimeSlot::new(Weekday::Monday, 7, 9);
        assert_eq!(s.to_string(), "Monday 07:00-09:00");
        let s = TimeSlot::new(Weekday::Friday, 14, 18);
        assert_eq!(s.to_string(), "Friday 14:00-18:00");
    }

    #[test]
    fn test_windows_for_duration() {
        assert_eq!(windows_for(2).len(), 7);
        assert_eq!(windows_for(4), &FOUR_HOUR_WINDOWS[..]);
        assert!(windows_for(2).iter().all(|(s, e)| e - s == 2));
        assert!(windows_for(4).iter().all(|(s, e)| e - s == 4));
    }

    #[test]
    fn test_duration_hours() {
        assert_eq!(TimeSlot::new(Weekday::Tuesday, 7, 11).duration_hours(), 4);
        assert_eq!(TimeSlot::new(Weekday::Tuesday, 19, 21).duration_hours(), 2);
    }

    #[test]
    fn test_overlapping_windows_are_distinct_slots() {
        let a = TimeSlot::new(Weekday::Wednesday, 18, 20);
        let b = TimeSlot::new(Weekday::Wednesday, 19, 21);
        assert_ne!(a, b);
    }
}
