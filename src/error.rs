//! Error type shared by the catalog loader and the GA engine.

use thiserror::Error;

/// Errors surfaced by catalog loading and engine construction.
///
/// None of these are retried internally; they propagate to the caller and
/// abort the run before any population state is touched.
#[derive(Error, Debug)]
pub enum KnapsackError {
    /// The catalog text does not parse into the expected integer grid.
    #[error("malformed catalog at line {line}: {reason}")]
    MalformedCatalog { line: usize, reason: String },

    /// A configuration parameter or gene vector is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Rejection sampling ran out of attempts before filling the population.
    #[error(
        "could not build initial population: {accepted}/{required} feasible \
         chromosomes after {attempts} draws"
    )]
    InfeasibleInitialization {
        attempts: u64,
        accepted: usize,
        required: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KnapsackError>;

impl KnapsackError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        KnapsackError::MalformedCatalog {
            line,
            reason: reason.into(),
        }
    }
}
