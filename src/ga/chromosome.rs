//! Bit-vector chromosome with cached evaluation.
//!
//! Gene `i` selects catalog item `i`. Fitness (total value) and weight are
//! cached on the chromosome; `genes` is private so every code path that
//! changes a gene goes through [`Chromosome::flip`], which recomputes both
//! before returning.

use crate::catalog::Catalog;
use crate::error::{KnapsackError, Result};
use std::fmt;

/// A candidate item selection.
///
/// Equality compares genes and the cached values, so a chromosome is
/// value-equal to any clone of itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chromosome {
    genes: Vec<bool>,
    fitness: u64,
    weight: u64,
}

impl Chromosome {
    /// Builds a chromosome and evaluates it against `catalog`.
    ///
    /// Feasibility is not checked here; that is the caller's concern.
    ///
    /// # Errors
    /// [`KnapsackError::InvalidConfiguration`] if the gene length differs
    /// from the catalog size.
    pub fn new(genes: Vec<bool>, catalog: &Catalog) -> Result<Self> {
        if genes.len() != catalog.len() {
            return Err(KnapsackError::InvalidConfiguration(format!(
                "gene length {} does not match catalog size {}",
                genes.len(),
                catalog.len()
            )));
        }
        Ok(Self::evaluated(genes, catalog))
    }

    /// Crate-internal constructor for callers that already guarantee the
    /// gene length.
    pub(crate) fn evaluated(genes: Vec<bool>, catalog: &Catalog) -> Self {
        debug_assert_eq!(genes.len(), catalog.len());
        let mut c = Self {
            genes,
            fitness: 0,
            weight: 0,
        };
        c.recompute(catalog);
        c
    }

    /// Recalculates fitness and weight from the current genes.
    ///
    /// Cannot overflow: [`Catalog`] construction rejects item sets whose
    /// total value or weight exceeds `u64::MAX`.
    pub fn recompute(&mut self, catalog: &Catalog) {
        let (fitness, weight) = self
            .genes
            .iter()
            .zip(catalog.items())
            .filter(|(selected, _)| **selected)
            .fold((0u64, 0u64), |(f, w), (_, item)| {
                (f + item.value, w + item.weight)
            });
        self.fitness = fitness;
        self.weight = weight;
    }

    /// Flips gene `index` and recomputes fitness and weight.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn flip(&mut self, index: usize, catalog: &Catalog) {
        self.genes[index] = !self.genes[index];
        self.recompute(catalog);
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Total value of the selected items.
    pub fn fitness(&self) -> u64 {
        self.fitness
    }

    /// Total weight of the selected items.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn is_feasible(&self, catalog: &Catalog) -> bool {
        self.weight <= catalog.capacity()
    }

    /// Indices of the selected items, ascending.
    pub fn selected_items(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &g)| g.then_some(i))
    }

    /// Returns a [`Display`](fmt::Display) adapter listing the selected items.
    pub fn display<'a>(&'a self, catalog: &'a Catalog) -> ChromosomeDisplay<'a> {
        ChromosomeDisplay {
            chromosome: self,
            catalog,
        }
    }
}

/// Human-readable listing of a chromosome's items, one per line.
pub struct ChromosomeDisplay<'a> {
    chromosome: &'a Chromosome,
    catalog: &'a Catalog,
}

impl fmt::Display for ChromosomeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in self.chromosome.selected_items() {
            let item = self.catalog.item(i);
            writeln!(f, "Item worth {} and weight {}", item.value, item.weight)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_pairs(&[(10, 5), (40, 4), (30, 6), (50, 3)], 10).unwrap()
    }

    #[test]
    fn test_new_computes_fitness_and_weight() {
        let c = Chromosome::new(vec![true, false, true, true], &catalog()).unwrap();
        assert_eq!(c.fitness(), 90);
        assert_eq!(c.weight(), 14);
        assert!(!c.is_feasible(&catalog()));
    }

    #[test]
    fn test_all_zero_is_empty_and_feasible() {
        let c = Chromosome::new(vec![false; 4], &catalog()).unwrap();
        assert_eq!(c.fitness(), 0);
        assert_eq!(c.weight(), 0);
        assert!(c.is_feasible(&catalog()));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = Chromosome::new(vec![true; 3], &catalog()).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_flip_recomputes() {
        let cat = catalog();
        let mut c = Chromosome::new(vec![false, true, false, false], &cat).unwrap();
        c.flip(3, &cat);
        assert_eq!((c.fitness(), c.weight()), (90, 7));
        c.flip(1, &cat);
        assert_eq!((c.fitness(), c.weight()), (50, 3));
        assert_eq!(c.genes(), &[false, false, false, true]);
    }

    #[test]
    fn test_full_selection_at_u64_limit() {
        let cat = Catalog::from_pairs(&[(u64::MAX - 1, u64::MAX - 2), (1, 2)], 10).unwrap();
        let c = Chromosome::new(vec![true, true], &cat).unwrap();
        assert_eq!(c.fitness(), u64::MAX);
        assert_eq!(c.weight(), u64::MAX);
        assert!(!c.is_feasible(&cat));
    }

    #[test]
    fn test_selected_items() {
        let c = Chromosome::new(vec![true, false, false, true], &catalog()).unwrap();
        assert_eq!(c.selected_items().collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn test_display_lists_selected_items() {
        let cat = catalog();
        let c = Chromosome::new(vec![false, true, false, true], &cat).unwrap();
        assert_eq!(
            c.display(&cat).to_string(),
            "Item worth 40 and weight 4\nItem worth 50 and weight 3\n"
        );
    }
}
