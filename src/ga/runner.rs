//! GA evolutionary loop execution.
//!
//! [`GaEngine`] owns the population and steps it one generation at a time:
//! select elite pair → crossover → mutate both children → repeat until the
//! pool is drained, then swap in the new generation.
//!
//! [`GaRunner`] drives an engine for a fixed number of generations and
//! collects a [`GaResult`].

use super::chromosome::Chromosome;
use super::config::GaConfig;
use super::operators::{crossover, mutate};
use super::population::initialize;
use super::selection::{index_of_best, select_two_elite};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::random::{create_rng, RandomSource};
use rand::rngs::StdRng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best chromosome of the final population.
    pub best: Chromosome,

    /// The final population.
    pub population: Vec<Chromosome>,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness after initialization and after each generation.
    pub fitness_history: Vec<u64>,
}

/// Generational GA state over one catalog.
///
/// The engine exclusively owns its population and random source. Between
/// calls to [`evolve`](Self::evolve) every chromosome in the population is
/// feasible.
pub struct GaEngine<R = StdRng> {
    catalog: Catalog,
    config: GaConfig,
    population: Vec<Chromosome>,
    generation: usize,
    rng: R,
}

impl GaEngine<StdRng> {
    /// Validates `config`, seeds the RNG from `config.seed` and builds the
    /// initial population.
    pub fn new(catalog: Catalog, config: GaConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::with_rng(catalog, config, rng)
    }
}

impl<R: RandomSource> GaEngine<R> {
    /// Like [`new`](GaEngine::new) but with a caller-supplied random source.
    /// `config.seed` is ignored.
    pub fn with_rng(catalog: Catalog, config: GaConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        if config.population_size % 2 == 1 {
            log::warn!(
                "odd population_size {}: last individual is dropped each generation",
                config.population_size
            );
        }

        let population = initialize(
            &catalog,
            config.population_size,
            config.max_init_attempts,
            &mut rng,
        )?;

        Ok(Self {
            catalog,
            config,
            population,
            generation: 0,
            rng,
        })
    }

    /// Runs one generation and replaces the population.
    ///
    /// Performs `population_size / 2` rounds of elite-pair selection from
    /// the current population, crossover and independent mutation of both
    /// children. The new generation holds `2 * (population_size / 2)`
    /// chromosomes.
    ///
    /// # Panics
    /// Panics if the current population runs out of pairs mid-generation,
    /// which cannot happen for a population built by this engine.
    pub fn evolve(&mut self) {
        let pairs = self.config.population_size / 2;
        let mut pool = std::mem::take(&mut self.population);
        let mut next_gen = Vec::with_capacity(pairs * 2);

        for _ in 0..pairs {
            let (p1, p2) = select_two_elite(&mut pool);
            let (mut c1, mut c2) = crossover(&p1, &p2, &self.catalog);
            mutate(&mut c1, self.config.mutation_rate, &self.catalog, &mut self.rng);
            mutate(&mut c2, self.config.mutation_rate, &self.catalog, &mut self.rng);
            next_gen.push(c1);
            next_gen.push(c2);
        }

        self.population = next_gen;
        self.generation += 1;

        let best = self.best();
        log::debug!(
            "generation {}: best fitness {} (weight {})",
            self.generation,
            best.fitness(),
            best.weight()
        );
    }

    /// The highest-fitness chromosome in the current population.
    ///
    /// Ties go to the earliest in population order, which is not a
    /// meaningful ordering.
    pub fn best(&self) -> &Chromosome {
        &self.population[index_of_best(&self.population)]
    }

    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Number of completed [`evolve`](Self::evolve) calls.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}

/// Executes the GA for a fixed number of generations.
///
/// # Usage
///
/// ```
/// use knapsack_ga::{Catalog, ga::{GaConfig, GaRunner}};
///
/// let catalog = Catalog::from_pairs(&[(10, 5), (40, 4), (30, 6), (50, 3)], 10).unwrap();
/// let config = GaConfig::default().with_population_size(8).with_seed(42);
/// let result = GaRunner::run(&catalog, &config).unwrap();
/// assert!(result.best.weight() <= 10);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs `config.generations` generations.
    pub fn run(catalog: &Catalog, config: &GaConfig) -> Result<GaResult> {
        let engine = GaEngine::new(catalog.clone(), config.clone())?;
        Ok(Self::drive(engine))
    }

    /// Runs with a caller-supplied random source.
    pub fn run_with_rng<R: RandomSource>(
        catalog: &Catalog,
        config: &GaConfig,
        rng: R,
    ) -> Result<GaResult> {
        let engine = GaEngine::with_rng(catalog.clone(), config.clone(), rng)?;
        Ok(Self::drive(engine))
    }

    fn drive<R: RandomSource>(mut engine: GaEngine<R>) -> GaResult {
        let generations = engine.config().generations;
        log::info!(
            "starting GA: {} items, capacity {}, population {}, {} generations",
            engine.catalog().len(),
            engine.catalog().capacity(),
            engine.config().population_size,
            generations
        );

        let mut fitness_history = Vec::with_capacity(generations + 1);
        fitness_history.push(engine.best().fitness());

        for _ in 0..generations {
            engine.evolve();
            fitness_history.push(engine.best().fitness());
        }

        let best = engine.best().clone();
        log::info!(
            "finished after {} generations: best fitness {} (weight {})",
            engine.generation(),
            best.fitness(),
            best.weight()
        );

        GaResult {
            best,
            generations: engine.generation(),
            population: engine.population,
            fitness_history,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
