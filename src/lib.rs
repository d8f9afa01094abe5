//! Genetic-algorithm optimizer for the 0/1 knapsack problem.
//!
//! Given a [`Catalog`] of `(value, weight)` items and a capacity, evolves a
//! population of item selections toward maximal total value without ever
//! exceeding capacity.
//!
//! - [`catalog`]: the problem instance and its text loader
//! - [`ga`]: chromosome representation, operators and the evolve loop
//! - [`random`]: the random source abstraction used by the operators
//!
//! # Example
//!
//! ```
//! use knapsack_ga::{Catalog, ga::{GaConfig, GaEngine}};
//!
//! let catalog: Catalog = "4 10\n10 5\n40 4\n30 6\n50 3\n".parse().unwrap();
//! let config = GaConfig::default().with_population_size(4).with_seed(7);
//! let mut engine = GaEngine::new(catalog, config).unwrap();
//! for _ in 0..10 {
//!     engine.evolve();
//! }
//! assert!(engine.best().weight() <= 10);
//! ```

pub mod catalog;
pub mod error;
pub mod ga;
pub mod random;

pub use catalog::{Catalog, Item};
pub use error::{KnapsackError, Result};
