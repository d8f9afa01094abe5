//! Command-line driver: load a catalog, evolve, print the final population.

use clap::Parser;
use knapsack_ga::ga::{GaConfig, GaResult, GaRunner};
use knapsack_ga::Catalog;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Solve 0/1 knapsack with an elitist genetic algorithm")]
struct Args {
    /// Catalog file: `item_count capacity`, then one `value weight` per line.
    catalog: PathBuf,

    #[arg(short, long, default_value_t = 10)]
    population_size: usize,

    /// Fraction of genes flipped per mutation, in [0, 1].
    #[arg(short, long, default_value_t = 0.2)]
    mutation_rate: f64,

    #[arg(short, long, default_value_t = 50)]
    generations: usize,

    /// Seed for a reproducible run.
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    /// Raw values; out-of-range ones are rejected by validation, not clamped.
    fn config(&self) -> GaConfig {
        GaConfig {
            population_size: self.population_size,
            generations: self.generations,
            mutation_rate: self.mutation_rate,
            seed: self.seed,
            ..GaConfig::default()
        }
    }
}

/// Writes `fitness weight` per chromosome, a blank line, then the best
/// chromosome's items, fitness and weight.
fn write_report<W: Write>(out: &mut W, result: &GaResult, catalog: &Catalog) -> io::Result<()> {
    for c in &result.population {
        writeln!(out, "{} {}", c.fitness(), c.weight())?;
    }
    writeln!(out)?;

    writeln!(out, "Best solution found:")?;
    write!(out, "{}", result.best.display(catalog))?;
    writeln!(out, "Fitness of best solution: {}", result.best.fitness())?;
    writeln!(out, "Weight of best solution: {}", result.best.weight())?;
    Ok(())
}

fn run<W: Write>(args: &Args, out: &mut W) -> knapsack_ga::Result<()> {
    let catalog = Catalog::from_path(&args.catalog)?;
    let result = GaRunner::run(&catalog, &args.config())?;
    write_report(out, &result, &catalog)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
