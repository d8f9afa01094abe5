//! Feasibility-guarded genetic operators for bit-vector chromosomes.
//!
//! # Crossover
//!
//! - [`crossover`]: single-point at the gene midpoint
//! - [`crossover_at`]: single-point at a caller-chosen split
//!
//! An over-capacity child is replaced by its corresponding parent, so
//! crossover never yields an infeasible chromosome.
//!
//! # Mutation
//!
//! - [`mutate`]: flips `floor(rate * n)` distinct genes, reverting any flip
//!   that breaks capacity

use super::chromosome::Chromosome;
use crate::catalog::Catalog;
use crate::random::RandomSource;

// ============================================================================
// Crossover
// ============================================================================

/// Midpoint single-point crossover.
///
/// With split `s = floor(n / 2)`:
/// `child1 = parent1[..s] ++ parent2[s..]` and
/// `child2 = parent2[..s] ++ parent1[s..]`.
///
/// # Panics
/// Panics if either parent's gene length differs from the catalog size.
pub fn crossover(
    parent1: &Chromosome,
    parent2: &Chromosome,
    catalog: &Catalog,
) -> (Chromosome, Chromosome) {
    crossover_at(parent1, parent2, catalog.len() / 2, catalog)
}

/// Single-point crossover at `split`, with parent fallback.
///
/// Each child is evaluated fresh. A child whose weight exceeds capacity is
/// discarded and replaced by a clone of its first-half parent
/// (`child1 → parent1`, `child2 → parent2`).
///
/// # Panics
/// Panics if `split > n` or the parents' gene lengths differ from the
/// catalog size.
pub fn crossover_at(
    parent1: &Chromosome,
    parent2: &Chromosome,
    split: usize,
    catalog: &Catalog,
) -> (Chromosome, Chromosome) {
    let n = catalog.len();
    assert_eq!(parent1.genes().len(), n, "parent1 gene length mismatch");
    assert_eq!(parent2.genes().len(), n, "parent2 gene length mismatch");
    assert!(split <= n, "split {split} beyond gene length {n}");

    let child1 = build_child(parent1, parent2, split, catalog);
    let child2 = build_child(parent2, parent1, split, catalog);
    (child1, child2)
}

/// Build one child: head from `head`, tail from `tail`; fall back to `head`.
fn build_child(head: &Chromosome, tail: &Chromosome, split: usize, catalog: &Catalog) -> Chromosome {
    let genes = [&head.genes()[..split], &tail.genes()[split..]].concat();
    let child = Chromosome::evaluated(genes, catalog);
    if child.is_feasible(catalog) {
        child
    } else {
        log::trace!(
            "crossover child over capacity ({} > {}), keeping parent",
            child.weight(),
            catalog.capacity()
        );
        head.clone()
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Bit-flip mutation with per-flip repair.
///
/// Samples `floor(mutation_rate * n)` distinct positions without
/// replacement. Positions are visited in sample order; each is flipped and,
/// if the result exceeds capacity, flipped back before the next position is
/// tried. Later flips therefore see the repaired state. A feasible input
/// stays feasible.
///
/// Returns the number of positions attempted, reverted flips included.
///
/// # Panics
/// Panics if the chromosome's gene length differs from the catalog size.
pub fn mutate<R: RandomSource + ?Sized>(
    chromosome: &mut Chromosome,
    mutation_rate: f64,
    catalog: &Catalog,
    rng: &mut R,
) -> usize {
    let n = chromosome.genes().len();
    assert_eq!(n, catalog.len(), "chromosome gene length mismatch");

    let count = flip_count(mutation_rate, n);
    if count == 0 {
        return 0;
    }

    let positions = rng.sample_indices(n, count);
    for &i in &positions {
        chromosome.flip(i, catalog);
        if !chromosome.is_feasible(catalog) {
            chromosome.flip(i, catalog);
            log::trace!("reverted flip at gene {i}");
        }
    }
    positions.len()
}

/// `floor(rate * n)`, capped at `n`.
fn flip_count(rate: f64, n: usize) -> usize {
    ((rate * n as f64).floor() as usize).min(n)
}

// ============================================================================
// Tests
// ============================================================================
