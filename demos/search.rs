//! Runs a few searches and prints the best expression of each.
//!
//! ```text
//! cargo run --example search -- --target 42 --runs 3
//! RUST_LOG=debug cargo run --example search -- --length 7 --target 360
//! ```

use arith_evolve::evolve::{EvolveConfig, EvolveRunner};
use clap::Parser;

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Evolve postfix arithmetic expressions that evaluate to a target")]
struct Cli {
    /// Number of expressions per generation
    #[arg(short, long, default_value_t = 10)]
    population: usize,

    /// Symbols per expression (odd)
    #[arg(short, long, default_value_t = 5)]
    length: usize,

    /// Per-symbol mutation probability
    #[arg(short, long, default_value_t = 0.10)]
    mutation: f64,

    /// Number to search for
    #[arg(short, long, default_value_t = 42, allow_negative_numbers = true)]
    target: i64,

    /// Generation cap per run
    #[arg(long, default_value_t = 5000)]
    max_generations: usize,

    /// Number of independent runs
    #[arg(short, long, default_value_t = 3)]
    runs: u64,

    /// Base seed; run `i` uses `seed + i`
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<(), arith_evolve::Error> {
    env_logger::init();
    let cli = Cli::parse();

    let base = EvolveConfig::default()
        .with_population_size(cli.population)
        .with_expression_length(cli.length)
        .with_mutation_rate(cli.mutation)
        .with_target(cli.target)
        .with_max_generations(cli.max_generations);
    base.validate()?;

    for run in 0..cli.runs {
        let config = match cli.seed {
            Some(seed) => base.clone().with_seed(seed.wrapping_add(run)),
            None => base.clone(),
        };
        let result = EvolveRunner::run(&config)?;
        println!(
            "* {} after {} generations *",
            result.found, result.generations
        );
        println!("{} = {}", result.best, result.value);
    }
    Ok(())
}
