use std::{path::PathBuf, time::Instant};

use anyhow::{Context, bail};
use classics::{
    demo::Structure,
    fs::load_npy_i64,
    searching::SearchAlgorithm,
    sorting::SortAlgorithm,
    sql::Snippet,
    statistics::SortStats,
};
use clap::{ArgAction, Parser, Subcommand};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use tqdm::tqdm;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Classic data structures, algorithms and design patterns
#[derive(Parser, Debug)]
#[command(name = "classics", version)]
#[command(about = "Classic data structures, algorithms and design patterns", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG applies otherwise
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort an array loaded from a .npy file or generated at random
    Sort {
        #[arg(short, long, value_enum)]
        algorithm: SortAlgorithm,

        /// One-dimensional int64 .npy file
        #[arg(short, long, conflicts_with = "random", required_unless_present = "random")]
        input: Option<PathBuf>,

        /// Sort this many random values instead of reading a file
        #[arg(short, long)]
        random: Option<usize>,

        /// Seed for --random; a fresh seed is drawn when absent
        #[arg(long)]
        seed: Option<u64>,

        /// Print a JSON report instead of the sorted values
        #[arg(long)]
        json: bool,
    },

    /// Time every sort over random arrays and check their output
    Bench {
        #[arg(long, default_value_t = 1000)]
        size: usize,

        #[arg(long, default_value_t = 5)]
        trials: usize,

        #[arg(long)]
        seed: Option<u64>,

        /// Sorts to run, comma-separated (default: all)
        #[arg(long, value_enum, value_delimiter = ',')]
        algorithms: Vec<SortAlgorithm>,

        #[arg(long)]
        json: bool,
    },

    /// Look a value up in a list of integers
    Search {
        #[arg(short, long, value_enum)]
        algorithm: SearchAlgorithm,

        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Walk through one structure of the catalog
    Demo {
        #[arg(value_enum)]
        structure: Structure,
    },

    /// Print the SQL scripts (all of them if no snippet is named)
    Sql {
        #[arg(value_enum)]
        snippet: Option<Snippet>,
    },
}

#[derive(Serialize)]
struct SortReport<'a> {
    algorithm: SortAlgorithm,
    len: usize,
    elapsed_nanos: u128,
    values: &'a [i64],
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = if verbosity == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn random_values(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(-1_000_000..1_000_000)).collect()
}

fn run_sort(
    algorithm: SortAlgorithm,
    input: Option<PathBuf>,
    random: Option<usize>,
    seed: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let mut values = match (input, random) {
        (Some(path), _) => load_npy_i64(&path)?,
        (None, Some(len)) => random_values(&mut rng_from(seed), len),
        (None, None) => bail!("either --input or --random is required"),
    };
    info!(%algorithm, len = values.len(), "sorting");

    let start = Instant::now();
    algorithm
        .sort(&mut values)
        .with_context(|| format!("{algorithm} sort failed"))?;
    let elapsed = start.elapsed();
    debug!(elapsed_nanos = elapsed.as_nanos(), "sorted");

    if json {
        let report = SortReport {
            algorithm,
            len: values.len(),
            elapsed_nanos: elapsed.as_nanos(),
            values: &values,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let line: Vec<String> = values.iter().map(i64::to_string).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}

fn run_bench(
    size: usize,
    trials: usize,
    seed: Option<u64>,
    algorithms: Vec<SortAlgorithm>,
    json: bool,
) -> anyhow::Result<()> {
    let algorithms = if algorithms.is_empty() {
        SortAlgorithm::all().to_vec()
    } else {
        algorithms
    };
    let mut rng = rng_from(seed);
    let inputs: Vec<Vec<i64>> = (0..trials).map(|_| random_values(&mut rng, size)).collect();

    let mut report = Vec::with_capacity(algorithms.len());
    for algorithm in algorithms {
        let mut stats = SortStats::new(algorithm);
        for input in tqdm(inputs.iter()).desc(Some(algorithm.name())) {
            let mut values = input.clone();
            let start = Instant::now();
            algorithm.sort(&mut values)?;
            stats.record(values.len(), start.elapsed());

            if !values.is_sorted() {
                bail!("{algorithm} sort produced unsorted output");
            }
        }
        report.push(stats);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{:<10} {:>6} {:>14}", "algorithm", "runs", "mean (µs)");
        for stats in &report {
            let mean_micros = stats.mean_nanos().unwrap_or(0.0) / 1000.0;
            println!(
                "{:<10} {:>6} {:>14.2}",
                stats.get_algorithm().name(),
                stats.get_runs(),
                mean_micros
            );
        }
    }
    Ok(())
}

fn run_search(algorithm: SearchAlgorithm, target: i64, values: &[i64]) {
    if algorithm.requires_sorted() && !values.is_sorted() {
        warn!(%algorithm, "input is not sorted ascending, the search may miss the target");
    }
    match algorithm.search(values, target) {
        Some(index) => println!("{target} found at index {index}"),
        None => println!("{target} not found"),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Command::Sort {
            algorithm,
            input,
            random,
            seed,
            json,
        } => run_sort(algorithm, input, random, seed, json)?,
        Command::Bench {
            size,
            trials,
            seed,
            algorithms,
            json,
        } => run_bench(size, trials, seed, algorithms, json)?,
        Command::Search {
            algorithm,
            target,
            values,
        } => run_search(algorithm, target, &values),
        Command::Demo { structure } => {
            for line in structure.walkthrough()? {
                println!("{line}");
            }
        }
        Command::Sql { snippet } => {
            let snippets = match snippet {
                Some(snippet) => vec![snippet],
                None => Snippet::all().to_vec(),
            };
            for snippet in snippets {
                println!("-- {}.sql", snippet.name());
                println!("{}", snippet.sql());
            }
        }
    }
    Ok(())
}
