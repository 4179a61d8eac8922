//! Generational GA loop.
//!
//! Each generation scores every individual, records the best score,
//! then replaces the whole population with children produced by
//! tournament selection, single-point crossover, and reassignment
//! mutation. There is no elitism.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::config::GaConfig;
use super::encoder::random_solution;
use super::operators::GeneticOperators;
use crate::catalog::Catalog;
use crate::error::{NotFoundError, RunError};
use crate::fitness::fitness;
use crate::models::Solution;

/// Best fitness per generation.
pub type FitnessHistory = Vec<f64>;

/// Outcome of a GA run.
#[derive(Debug, Clone, Serialize)]
pub struct GaResult {
    /// Highest-fitness individual of the final population.
    pub best: Solution,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Best fitness of each completed generation, before reproduction.
    pub history: FitnessHistory,
    /// Generations executed (`history.len()`).
    pub generations: usize,
    /// Whether the run stopped early on a cancellation request.
    pub cancelled: bool,
}

/// Runs the timetabling GA.
pub struct GaRunner;

impl GaRunner {
    /// Runs to completion, seeding from `config.seed` (or the OS).
    pub fn run(catalog: &Catalog, config: &GaConfig) -> Result<GaResult, RunError> {
        Self::run_cancellable(catalog, config, &AtomicBool::new(false))
    }

    /// Runs until completion or until `cancel` is set.
    ///
    /// The flag is checked before each generation. A cancelled run returns
    /// the best individual of the population it stopped on, along with the
    /// history recorded so far.
    pub fn run_cancellable(
        catalog: &Catalog,
        config: &GaConfig,
        cancel: &AtomicBool,
    ) -> Result<GaResult, RunError> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::evolve(catalog, config, &mut rng, cancel)
    }

    /// Runs with a caller-supplied RNG; `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        catalog: &Catalog,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, RunError> {
        Self::evolve(catalog, config, rng, &AtomicBool::new(false))
    }

    fn evolve<R: Rng>(
        catalog: &Catalog,
        config: &GaConfig,
        rng: &mut R,
        cancel: &AtomicBool,
    ) -> Result<GaResult, RunError> {
        if catalog.is_empty() {
            return Err(RunError::EmptyCatalog);
        }
        config.validate().map_err(RunError::InvalidConfig)?;

        let ops = GeneticOperators::from_config(config);
        info!(
            courses = catalog.course_count(),
            rooms = catalog.room_count(),
            population = config.population_size,
            generations = config.max_generations,
            "starting GA run"
        );

        let mut population: Vec<Solution> = (0..config.population_size)
            .map(|_| random_solution(catalog, rng))
            .collect();
        let mut history = Vec::with_capacity(config.max_generations);
        let mut cancelled = false;

        for generation in 0..config.max_generations {
            if cancel.load(Ordering::Relaxed) {
                warn!(generation, "GA run cancelled");
                cancelled = true;
                break;
            }

            let scores = evaluate_population(catalog, &population, config.parallel)?;
            let (_, best) = best_of(&scores);
            history.push(best);
            debug!(generation, best_fitness = best, "generation evaluated");

            let mut next = Vec::with_capacity(population.len());
            for _ in 0..config.population_size / 2 {
                let a = ops.select(&scores, rng);
                let b = ops.select(&scores, rng);
                let (mut c1, mut c2) = ops.crossover(&population[a], &population[b], rng);
                ops.mutate(&mut c1, catalog, rng)?;
                ops.mutate(&mut c2, catalog, rng)?;
                next.push(c1);
                next.push(c2);
            }
            population = next;
        }

        let scores = evaluate_population(catalog, &population, config.parallel)?;
        let (idx, best_fitness) = best_of(&scores);
        let best = population.swap_remove(idx);

        info!(
            generations = history.len(),
            best_fitness,
            cancelled,
            "GA run finished"
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations: history.len(),
            history,
            cancelled,
        })
    }
}

/// Runs the GA with default parameters.
///
/// Returns the best solution and the per-generation best fitness.
///
/// # Errors
/// [`RunError::EmptyCatalog`] if the catalog has no courses.
pub fn run(catalog: &Catalog) -> Result<(Solution, FitnessHistory), RunError> {
    run_with_config(catalog, &GaConfig::default()).map(|r| (r.best, r.history))
}

/// Runs the GA with the given parameters.
pub fn run_with_config(catalog: &Catalog, config: &GaConfig) -> Result<GaResult, RunError> {
    GaRunner::run(catalog, config)
}

fn evaluate_population(
    catalog: &Catalog,
    population: &[Solution],
    parallel: bool,
) -> Result<Vec<f64>, NotFoundError> {
    if parallel {
        population.par_iter().map(|s| fitness(catalog, s)).collect()
    } else {
        population.iter().map(|s| fitness(catalog, s)).collect()
    }
}

/// Index and value of the highest score; the first one wins ties.
fn best_of(scores: &[f64]) -> (usize, f64) {
    scores
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, f)| {
            if f > best.1 {
                (i, f)
            } else {
                best
            }
        })
}
