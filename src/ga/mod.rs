//! Elitist genetic algorithm for the 0/1 knapsack problem.
//!
//! Chromosomes are bit vectors over catalog items. Every operator keeps
//! chromosomes within capacity: initialization rejects infeasible draws,
//! crossover falls back to a parent, and mutation reverts offending flips.
//!
//! # Key Types
//!
//! - [`Chromosome`]: a candidate selection with cached fitness and weight
//! - [`GaConfig`]: algorithm parameters (population size, mutation rate, seed)
//! - [`GaEngine`]: owns the population and steps it one generation at a time
//! - [`GaRunner`]: runs a fixed number of generations into a [`GaResult`]
//!
//! # Submodules
//!
//! - [`operators`]: midpoint crossover and bit-flip mutation with repair
//! - [`selection`]: elite pair selection that drains the working pool
//! - [`population`]: rejection-sampled initial population
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
mod config;
pub mod operators;
pub mod population;
mod runner;
pub mod selection;

pub use chromosome::{Chromosome, ChromosomeDisplay};
pub use config::GaConfig;
pub use runner::{GaEngine, GaResult, GaRunner};
