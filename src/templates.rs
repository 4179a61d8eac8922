//! Sample input records.
//!
//! Adapters can hand these out as fill-in templates. They use the
//! canonical column names and load into a valid catalog as-is.

use serde_json::{json, Value};

use crate::catalog::Record;

/// Course columns, in template order.
pub const COURSE_COLUMNS: [&str; 6] = ["id", "name", "cycle", "kind", "enrolled", "duration"];

/// Room columns, in template order.
pub const ROOM_COLUMNS: [&str; 6] = ["id", "name", "kind", "capacity", "location", "distance"];

/// Four sample courses: two lectures and their labs.
pub fn course_template() -> Vec<Record> {
    rows(json!([
        {"id": 1, "name": "Algorithms I", "cycle": 3, "kind": "lecture", "enrolled": 40, "duration": 2},
        {"id": 2, "name": "Databases", "cycle": 4, "kind": "lecture", "enrolled": 35, "duration": 2},
        {"id": 3, "name": "Algorithms I Lab", "cycle": 3, "kind": "lab", "enrolled": 15, "duration": 2},
        {"id": 4, "name": "Databases Lab", "cycle": 4, "kind": "lab", "enrolled": 15, "duration": 2},
    ]))
}

/// Five sample rooms: two halls, two labs, one external room.
pub fn room_template() -> Vec<Record> {
    rows(json!([
        {"id": "A101", "name": "Room 101", "kind": "lecture", "capacity": 45, "location": "Campus", "distance": 0},
        {"id": "A102", "name": "Room 102", "kind": "lecture", "capacity": 45, "location": "Campus", "distance": 0},
        {"id": "LAB01", "name": "Lab 1", "kind": "lab", "capacity": 15, "location": "Campus", "distance": 0},
        {"id": "LAB02", "name": "Lab 2", "kind": "lab", "capacity": 15, "location": "Campus", "distance": 0},
        {"id": "EXT01", "name": "External Room 1", "kind": "external", "capacity": 50, "location": "Room Pool", "distance": 5},
    ]))
}

fn rows(table: Value) -> Vec<Record> {
    match table {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::Object(m) => Some(m),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
