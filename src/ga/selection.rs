//! Elitist parent selection.
//!
//! Each call pulls the two fittest chromosomes out of a working pool.
//! Called repeatedly over one generation, this drains the pool best-pair
//! first: parents are drawn without replacement until it is exhausted.

use super::chromosome::Chromosome;

/// Removes and returns the two highest-fitness chromosomes in `pool`.
///
/// The first returned chromosome has fitness ≥ the second. Removal uses
/// `swap_remove`, so the remaining pool order is not preserved.
///
/// Ties on the maximum are resolved by scan order over the current pool,
/// which after earlier removals is itself arbitrary; callers must not rely
/// on which of several equally fit chromosomes is chosen.
///
/// # Panics
/// Panics if `pool` holds fewer than two chromosomes.
pub fn select_two_elite(pool: &mut Vec<Chromosome>) -> (Chromosome, Chromosome) {
    assert!(
        pool.len() >= 2,
        "cannot select two parents from a pool of {}",
        pool.len()
    );

    let first = pool.swap_remove(index_of_best(pool));
    let second = pool.swap_remove(index_of_best(pool));
    (first, second)
}

/// Index of the first chromosome with maximal fitness.
///
/// # Panics
/// Panics if `population` is empty.
pub(crate) fn index_of_best(population: &[Chromosome]) -> usize {
    assert!(!population.is_empty(), "population must not be empty");
    let mut best = 0;
    for (i, c) in population.iter().enumerate().skip(1) {
        if c.fitness() > population[best].fitness() {
            best = i;
        }
    }
    best
}
