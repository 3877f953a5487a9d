use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordfreq_rs::{
    CounterConfig, JobFile, LONGEST_WORD, ReadAhead, SortOrder, WordCounter, default_workers,
};


const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_GIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    " ",
    env!("BUILD_TARGET"),
    ", ",
    env!("BUILD_PROFILE"),
    ")"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortKey {
    /// Lexicographic by word
    Name,
    /// Ascending by occurrence count
    Count,
}

impl From<SortKey> for SortOrder {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => SortOrder::ByName,
            SortKey::Count => SortOrder::ByCount,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about = "Count word frequencies of FILE in parallel and write a sorted report.",
    long_about = r#"Count word frequencies of FILE in parallel and write a sorted report.
The file is split into one byte range per worker; ranges are moved onto word boundaries so every word is counted exactly once.
A word is a maximal run of ASCII letters, digits and apostrophes, compared case-sensitively."#
)]
struct WordFreqArgs {
    /// Source text file
    #[arg(
        value_name = "FILE",
        value_hint = clap::ValueHint::FilePath,
        required_unless_present = "config"
    )]
    source: Option<PathBuf>,

    /// Report destination
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = "wordfreq.txt")]
    output: PathBuf,

    /// Number of parallel workers [default: available CPUs]
    #[arg(short = 'j', long = "jobs", value_name = "N")]
    jobs: Option<usize>,

    /// Report ordering
    #[arg(short = 's', long = "sort", value_enum, default_value_t = SortKey::Name)]
    sort: SortKey,

    /// Never read more than BYTES past a chunk while aligning (words longer than that
    /// across a chunk boundary are split)
    #[arg(
        long = "fixed-read-ahead",
        value_name = "BYTES",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    fixed_read_ahead: Option<u64>,

    /// Print the elapsed-time breakdown after each run
    #[arg(long = "timings", action = ArgAction::SetTrue)]
    timings: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Job file: source path, name-ordered output, count-ordered output and worker
    /// count, one per line. Writes both reports.
    #[arg(
        long = "config",
        value_name = "FILE",
        conflicts_with_all = ["source", "output", "jobs", "sort"]
    )]
    config: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("wordfreq-rs: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = WordFreqArgs::parse();
    init_tracing(args.verbose);

    let read_ahead = match args.fixed_read_ahead {
        Some(margin) => ReadAhead::Fixed(
            usize::try_from(margin).context("read-ahead margin does not fit in memory")?,
        ),
        None => ReadAhead::Growable {
            initial: LONGEST_WORD,
        },
    };

    let configs: Vec<CounterConfig> = match (&args.config, &args.source) {
        (Some(job_path), _) => JobFile::load(job_path)
            .with_context(|| format!("failed to load job file '{}'", job_path.display()))?
            .configs()
            .into_iter()
            .map(|config| config.with_read_ahead(read_ahead))
            .collect(),
        (None, Some(source)) => vec![
            CounterConfig::new(source, &args.output)
                .with_workers(args.jobs.unwrap_or_else(default_workers))
                .with_order(args.sort.into())
                .with_read_ahead(read_ahead),
        ],
        (None, None) => anyhow::bail!("no source file given"),
    };

    for config in configs {
        count_one(config, args.timings)?;
    }
    Ok(())
}

fn count_one(config: CounterConfig, show_timings: bool) -> Result<()> {
    let source = config.source_path.clone();
    let order = config.order;

    let mut counter = WordCounter::new(config)
        .with_context(|| format!("cannot count '{}'", source.display()))?;
    counter
        .run()
        .with_context(|| format!("counting '{}' failed", source.display()))?;

    info!(?order, output = %counter.output_path().display(), "done");
    if show_timings {
        if let Some(timings) = counter.timings() {
            println!("{}", timings);
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
