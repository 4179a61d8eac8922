//! GA-based timetable optimization.
//!
//! # Encoding
//!
//! An individual is a [`Solution`](crate::models::Solution): one
//! (course, room, slot) gene per course, in catalog course order.
//! Position `i` always belongs to course `i`, so crossover can cut and
//! splice by position without repair.
//!
//! # Submodules
//!
//! - [`encoder`]: Random slots, genes, and individuals
//! - [`operators`]: Tournament selection, single-point crossover, reassignment mutation
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

mod config;
pub mod encoder;
pub mod operators;
mod runner;

pub use config::GaConfig;
pub use encoder::{random_assignment, random_slot, random_solution};
pub use runner::{run, run_with_config, FitnessHistory, GaResult, GaRunner};
