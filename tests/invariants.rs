//! Property tests for the feasibility and evaluation invariants.

use knapsack_ga::ga::operators::{crossover, crossover_at, mutate};
use knapsack_ga::ga::{Chromosome, GaConfig, GaEngine};
use knapsack_ga::random::create_rng;
use knapsack_ga::Catalog;
use proptest::prelude::*;

/// Catalogs whose capacity admits at least half of the total weight, so
/// rejection sampling stays fast.
fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    (
        prop::collection::vec((0u64..100, 0u64..50), 1..16),
        0.5f64..=1.0,
    )
        .prop_map(|(pairs, frac)| {
            let total: u64 = pairs.iter().map(|&(_, w)| w).sum();
            Catalog::from_pairs(&pairs, (total as f64 * frac) as u64).unwrap()
        })
}

fn expected_eval(c: &Chromosome, catalog: &Catalog) -> (u64, u64) {
    c.genes()
        .iter()
        .zip(catalog.items())
        .filter(|(g, _)| **g)
        .fold((0, 0), |(f, w), (_, it)| (f + it.value, w + it.weight))
}

fn check(c: &Chromosome, catalog: &Catalog) -> Result<(), TestCaseError> {
    prop_assert_eq!(c.genes().len(), catalog.len());
    prop_assert_eq!((c.fitness(), c.weight()), expected_eval(c, catalog));
    prop_assert!(c.weight() <= catalog.capacity());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn engine_keeps_population_feasible_and_consistent(
        catalog in catalog_strategy(),
        population_size in 2usize..16,
        mutation_rate in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let config = GaConfig::default()
            .with_population_size(population_size)
            .with_mutation_rate(mutation_rate)
            .with_seed(seed);
        let mut engine = GaEngine::new(catalog.clone(), config).unwrap();

        prop_assert_eq!(engine.population().len(), population_size);
        for c in engine.population() {
            check(c, &catalog)?;
        }

        for _ in 0..5 {
            engine.evolve();
            prop_assert_eq!(engine.population().len(), 2 * (population_size / 2));
            for c in engine.population() {
                check(c, &catalog)?;
            }
            let best = engine.best().fitness();
            prop_assert!(engine.population().iter().all(|c| c.fitness() <= best));
        }
    }

    #[test]
    fn crossover_children_are_recombinations_or_parents(
        catalog in catalog_strategy(),
        seed in any::<u64>(),
        split_frac in 0.0f64..=1.0,
    ) {
        let config = GaConfig::default().with_population_size(2).with_seed(seed);
        let engine = GaEngine::new(catalog.clone(), config).unwrap();
        let (p1, p2) = (&engine.population()[0], &engine.population()[1]);

        let split = (catalog.len() as f64 * split_frac) as usize;
        let (c1, c2) = crossover_at(p1, p2, split, &catalog);
        check(&c1, &catalog)?;
        check(&c2, &catalog)?;

        let recombined1 = [&p1.genes()[..split], &p2.genes()[split..]].concat();
        let recombined2 = [&p2.genes()[..split], &p1.genes()[split..]].concat();
        prop_assert!(c1.genes() == recombined1.as_slice() || &c1 == p1);
        prop_assert!(c2.genes() == recombined2.as_slice() || &c2 == p2);

        let (m1, m2) = crossover(p1, p2, &catalog);
        check(&m1, &catalog)?;
        check(&m2, &catalog)?;
    }

    #[test]
    fn mutation_stays_feasible_and_attempts_floor_count(
        catalog in catalog_strategy(),
        mutation_rate in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut rng = create_rng(seed);
        let mut c = Chromosome::new(vec![false; catalog.len()], &catalog).unwrap();
        let attempted = mutate(&mut c, mutation_rate, &catalog, &mut rng);

        let expected = ((mutation_rate * catalog.len() as f64).floor() as usize).min(catalog.len());
        prop_assert_eq!(attempted, expected);
        check(&c, &catalog)?;
    }
}
