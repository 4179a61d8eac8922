//! Selection, crossover, and mutation for timetable individuals.
//!
//! The free functions are the operators themselves; [`GeneticOperators`]
//! binds them to the rates of a [`GaConfig`] for use in the runner.
//!
//! # Usage
//!
//! ```
//! use u_timetable::ga::{GaConfig, operators::GeneticOperators};
//!
//! let ops = GeneticOperators::from_config(&GaConfig::default());
//! assert_eq!(ops.tournament_size, 3);
//! assert!((ops.crossover_rate - 0.8).abs() < 1e-12);
//! ```

use rand::seq::index;
use rand::Rng;

use super::config::GaConfig;
use super::encoder::random_assignment;
use crate::catalog::Catalog;
use crate::error::NotFoundError;
use crate::models::Solution;

/// Tournament selection.
///
/// Samples `size` distinct indices (fewer if the population is smaller)
/// and returns the one with the highest fitness. Ties go to whichever
/// tied index was sampled first. Returns 0 for an empty population.
pub fn tournament_select<R: Rng>(fitness: &[f64], size: usize, rng: &mut R) -> usize {
    let amount = size.max(1).min(fitness.len());
    let mut winner: Option<usize> = None;
    for i in index::sample(rng, fitness.len(), amount).iter() {
        match winner {
            Some(w) if fitness[i] <= fitness[w] => {}
            _ => winner = Some(i),
        }
    }
    winner.unwrap_or(0)
}

/// Single-point crossover.
///
/// With probability `rate`, picks a cut in `[1, len - 1]` and swaps the
/// tails: child 1 = head of `p1` + tail of `p2`, child 2 = head of `p2` +
/// tail of `p1`. Otherwise, or when the parents are too short to cut,
/// returns copies of the parents. `rate` is clamped to `[0, 1]`.
pub fn single_point_crossover<R: Rng>(
    p1: &Solution,
    p2: &Solution,
    rate: f64,
    rng: &mut R,
) -> (Solution, Solution) {
    let len = p1.len().min(p2.len());
    if !rng.random_bool(probability(rate)) || len < 2 {
        return (p1.clone(), p2.clone());
    }

    let cut = rng.random_range(1..len);
    let (h1, t1) = p1.genes().split_at(cut);
    let (h2, t2) = p2.genes().split_at(cut);

    let c1 = h1.iter().chain(t2).cloned().collect();
    let c2 = h2.iter().chain(t1).cloned().collect();
    (c1, c2)
}

/// Reassignment mutation.
///
/// With probability `rate`, picks one gene uniformly and replaces its
/// room and slot with a fresh compatible room and a random slot for the
/// same course. Returns whether a gene was replaced. The fresh draw may
/// coincide with the old gene. `rate` is clamped to `[0, 1]`.
///
/// # Errors
/// [`NotFoundError`] if the chosen gene's course is not in `catalog`.
pub fn reassign_mutation<R: Rng>(
    solution: &mut Solution,
    catalog: &Catalog,
    rate: f64,
    rng: &mut R,
) -> Result<bool, NotFoundError> {
    if !rng.random_bool(probability(rate)) || solution.is_empty() {
        return Ok(false);
    }

    let idx = rng.random_range(0..solution.len());
    let position = catalog.course_position(&solution.genes()[idx].course_id)?;
    match random_assignment(catalog, position, rng) {
        Some(gene) => {
            solution.genes_mut()[idx] = gene;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Rate as a valid probability; NaN reads as 0.
fn probability(rate: f64) -> f64 {
    if rate.is_nan() {
        0.0
    } else {
        rate.clamp(0.0, 1.0)
    }
}

/// Operator rates for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneticOperators {
    /// Probability of crossing a parent pair.
    pub crossover_rate: f64,
    /// Probability of mutating a child.
    pub mutation_rate: f64,
    /// Individuals per tournament.
    pub tournament_size: usize,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self::from_config(&GaConfig::default())
    }
}

impl GeneticOperators {
    /// Takes the operator rates from a config.
    pub fn from_config(config: &GaConfig) -> Self {
        Self {
            crossover_rate: config.crossover_rate,
            mutation_rate: config.mutation_rate,
            tournament_size: config.tournament_size,
        }
    }

    /// Picks a parent index by tournament.
    pub fn select<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> usize {
        tournament_select(fitness, self.tournament_size, rng)
    }

    /// Crosses two parents using the configured rate.
    pub fn crossover<R: Rng>(
        &self,
        p1: &Solution,
        p2: &Solution,
        rng: &mut R,
    ) -> (Solution, Solution) {
        single_point_crossover(p1, p2, self.crossover_rate, rng)
    }

    /// Mutates a child using the configured rate.
    pub fn mutate<R: Rng>(
        &self,
        solution: &mut Solution,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<bool, NotFoundError> {
        reassign_mutation(solution, catalog, self.mutation_rate, rng)
    }
}
