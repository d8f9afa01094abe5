//! Item catalog and its text loader.
//!
//! A [`Catalog`] is the immutable problem instance: an ordered list of
//! [`Item`]s plus the knapsack capacity. Items are identified by their
//! index, which is also the gene position in every chromosome.
//!
//! # Text format
//!
//! ```text
//! item_count capacity
//! value weight      <- repeated item_count times
//! ```
//!
//! Lines after the declared items are ignored.

use crate::error::{KnapsackError, Result};
use std::path::Path;
use std::str::FromStr;

/// A single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Value contributed to fitness when the item is selected.
    pub value: u64,
    /// Weight counted against capacity when the item is selected.
    pub weight: u64,
}

impl Item {
    pub fn new(value: u64, weight: u64) -> Self {
        Self { value, weight }
    }
}

/// Immutable knapsack instance.
///
/// # Examples
///
/// ```
/// use knapsack_ga::Catalog;
///
/// let catalog: Catalog = "2 10\n60 5\n40 6\n".parse().unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.capacity(), 10);
/// assert_eq!(catalog.item(1).value, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Catalog {
    items: Vec<Item>,
    capacity: u64,
}

impl Catalog {
    /// Creates a catalog from items and a capacity bound.
    ///
    /// # Errors
    /// [`KnapsackError::InvalidConfiguration`] if the total value or total
    /// weight of all items does not fit in `u64`.
    pub fn new(items: Vec<Item>, capacity: u64) -> Result<Self> {
        let mut totals = Totals::default();
        for (i, item) in items.iter().enumerate() {
            totals.add(item).ok_or_else(|| {
                KnapsackError::InvalidConfiguration(format!(
                    "item {i} overflows the catalog's total value or weight"
                ))
            })?;
        }
        Ok(Self { items, capacity })
    }

    /// Builds a catalog from `(value, weight)` pairs.
    pub fn from_pairs(pairs: &[(u64, u64)], capacity: u64) -> Result<Self> {
        let items = pairs.iter().map(|&(v, w)| Item::new(v, w)).collect();
        Self::new(items, capacity)
    }

    /// Reads and parses a catalog file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the item at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn item(&self, index: usize) -> &Item {
        &self.items[index]
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of items, which is also the gene length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromStr for Catalog {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.lines().enumerate().map(|(i, text)| (i + 1, text));

        let (header_line, header) = lines
            .next()
            .ok_or_else(|| KnapsackError::malformed(1, "missing header line"))?;
        let (count, capacity) = parse_pair(header_line, header)?;
        let count = usize::try_from(count).map_err(|_| {
            KnapsackError::malformed(header_line, format!("item count {count} is too large"))
        })?;

        let mut items = Vec::with_capacity(count.min(1 << 16));
        let mut totals = Totals::default();
        for _ in 0..count {
            let (line_no, text) = lines.next().ok_or_else(|| {
                KnapsackError::malformed(
                    header_line + items.len() + 1,
                    format!("expected {count} item lines, found {}", items.len()),
                )
            })?;
            let (value, weight) = parse_pair(line_no, text)?;
            let item = Item::new(value, weight);
            totals.add(&item).ok_or_else(|| {
                KnapsackError::malformed(line_no, "total value or weight overflows u64")
            })?;
            items.push(item);
        }

        Ok(Catalog { items, capacity })
    }
}

/// Running sums over every item.
///
/// A catalog is only built when both totals fit in `u64`. Any selection
/// sums a subset of the items, so chromosome evaluation cannot overflow.
#[derive(Default)]
struct Totals {
    value: u64,
    weight: u64,
}

impl Totals {
    fn add(&mut self, item: &Item) -> Option<()> {
        self.value = self.value.checked_add(item.value)?;
        self.weight = self.weight.checked_add(item.weight)?;
        Some(())
    }
}

/// Parses a line holding exactly two non-negative integers.
fn parse_pair(line: usize, text: &str) -> Result<(u64, u64)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(KnapsackError::malformed(
            line,
            format!("expected 2 integers, found {} tokens", tokens.len()),
        ));
    }
    let parse = |tok: &str| {
        tok.parse::<u64>().map_err(|e| {
            KnapsackError::malformed(line, format!("invalid integer {tok:?}: {e}"))
        })
    };
    Ok((parse(tokens[0])?, parse(tokens[1])?))
}
