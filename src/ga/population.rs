//! Initial population by rejection sampling.

use super::chromosome::Chromosome;
use crate::catalog::Catalog;
use crate::error::{KnapsackError, Result};
use crate::random::RandomSource;

/// Builds `size` feasible chromosomes.
///
/// Each draw sets every gene with an independent fair coin; infeasible
/// draws are discarded. With `max_attempts = None` sampling continues until
/// the population is full. The all-zero selection is always feasible, so
/// this terminates with probability one, though not within a fixed bound.
///
/// # Errors
/// [`KnapsackError::InfeasibleInitialization`] if `max_attempts` draws are
/// used up first.
pub fn initialize<R: RandomSource + ?Sized>(
    catalog: &Catalog,
    size: usize,
    max_attempts: Option<u64>,
    rng: &mut R,
) -> Result<Vec<Chromosome>> {
    let n = catalog.len();
    let mut population = Vec::with_capacity(size);
    let mut attempts = 0u64;

    while population.len() < size {
        if max_attempts.is_some_and(|max| attempts >= max) {
            return Err(KnapsackError::InfeasibleInitialization {
                attempts,
                accepted: population.len(),
                required: size,
            });
        }
        attempts += 1;

        let genes: Vec<bool> = (0..n).map(|_| rng.next_bit()).collect();
        let candidate = Chromosome::evaluated(genes, catalog);
        if candidate.is_feasible(catalog) {
            population.push(candidate);
        } else {
            log::trace!(
                "rejected initial draw with weight {} > capacity {}",
                candidate.weight(),
                catalog.capacity()
            );
        }
    }

    log::debug!("initialized {size} chromosomes in {attempts} draws");
    Ok(population)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{create_rng, ScriptedSource};

    fn catalog() -> Catalog {
        Catalog::from_pairs(&[(10, 5), (40, 4), (30, 6), (50, 3)], 10).unwrap()
    }

    #[test]
    fn test_all_members_feasible_and_sized() {
        let cat = catalog();
        let mut rng = create_rng(42);
        let pop = initialize(&cat, 50, None, &mut rng).unwrap();
        assert_eq!(pop.len(), 50);
        for c in &pop {
            assert_eq!(c.genes().len(), cat.len());
            assert!(c.weight() <= cat.capacity());
        }
    }

    #[test]
    fn test_gene_length_follows_catalog() {
        let pairs: Vec<(u64, u64)> = (0..25).map(|i| (i, 1)).collect();
        let cat = Catalog::from_pairs(&pairs, 100).unwrap();
        let mut rng = create_rng(3);
        let pop = initialize(&cat, 4, None, &mut rng).unwrap();
        assert!(pop.iter().all(|c| c.genes().len() == 25));
    }

    #[test]
    fn test_zero_capacity_yields_all_zero() {
        let cat = Catalog::from_pairs(&[(1, 1), (2, 1), (3, 1)], 0).unwrap();
        let mut rng = create_rng(9);
        let pop = initialize(&cat, 6, None, &mut rng).unwrap();
        assert!(pop.iter().all(|c| c.genes().iter().all(|&g| !g)));
    }

    #[test]
    fn test_rejects_infeasible_draws() {
        // Pattern: first draw selects everything (weight 18), second nothing.
        let cat = catalog();
        let mut rng = ScriptedSource::from_bits("1111 0000");
        let pop = initialize(&cat, 2, None, &mut rng).unwrap();
        assert_eq!(pop.len(), 2);
        assert!(pop.iter().all(|c| c.weight() == 0));
        assert_eq!(rng.bits_drawn, 16);
    }

    #[test]
    fn test_attempt_bound_exhausted() {
        let cat = catalog();
        let mut rng = ScriptedSource::from_bits("1");
        let err = initialize(&cat, 3, Some(5), &mut rng).unwrap_err();
        match err {
            KnapsackError::InfeasibleInitialization {
                attempts,
                accepted,
                required,
            } => {
                assert_eq!(attempts, 5);
                assert_eq!(accepted, 0);
                assert_eq!(required, 3);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
