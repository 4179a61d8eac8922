//! Course timetabling for the U-Engine ecosystem.
//!
//! Assigns every course a room and a weekly time slot, minimizing hard
//! conflicts (over-capacity rooms, double-booked rooms) and a soft
//! penalty for off-campus rooms, using a generational genetic algorithm.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Room`, `TimeSlot`, `Assignment`, `Solution`
//! - **`catalog`**: Validated, indexed problem instance and record loading
//! - **`validation`**: Input integrity checks (duplicate IDs, durations, unhostable courses)
//! - **`fitness`**: Conflict counting and scalar fitness
//! - **`ga`**: Encoder, operators, configuration, and the generational runner
//! - **`report`**: Denormalized output rows and run statistics
//! - **`templates`**: Sample input records
//!
//! # Example
//!
//! ```
//! use u_timetable::{load_catalog, run_with_config, validate, format_solution, templates};
//! use u_timetable::ga::GaConfig;
//!
//! let catalog = load_catalog(templates::course_template(), templates::room_template()).unwrap();
//! let config = GaConfig::default().with_max_generations(20).with_seed(42);
//! let result = run_with_config(&catalog, &config).unwrap();
//!
//! assert_eq!(result.history.len(), 20);
//! let conflicts = validate(&catalog, &result.best).unwrap();
//! let rows = format_solution(&catalog, &result.best).unwrap();
//! assert_eq!(rows.len(), catalog.course_count());
//! # let _ = conflicts;
//! ```
//!
//! # Architecture
//!
//! The crate is a pure in-memory core. Spreadsheet parsing, HTTP, and
//! file export live in adapters that pass parsed records in and take
//! [`report::FormattedAssignment`] rows out.

pub mod catalog;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod models;
pub mod report;
pub mod templates;
pub mod validation;

pub use catalog::{load_catalog, Catalog, Record};
pub use error::{LoadError, NotFoundError, RunError};
pub use fitness::{count_conflicts, evaluate, fitness, validate, FitnessBreakdown};
pub use ga::{run, run_with_config, FitnessHistory, GaConfig, GaResult};
pub use report::{format_solution, FormattedAssignment, OptimizationReport};
