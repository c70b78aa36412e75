use std::io::{self, BufWriter};

use clap::Parser;
use eyre::{Result, WrapErr};
use rand::{rngs::StdRng, SeedableRng};
use rvfuzz_generator::{Generator, RegisterSet, Sequencer};
use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

mod cli;

use cli::Cli;

/// Logs go to stderr so stdout carries nothing but the corpus.
fn setup_tracing_with_log_level(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    setup_tracing_with_log_level(Level::WARN);

    let registers = RegisterSet::load(&args.registers).wrap_err("cannot start generation")?;

    let mut rng = match args.seed {
        Some(seed) => {
            tracing::trace!("Using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut sequencer = Sequencer::new(args.rounds);
    if args.no_shuffle {
        sequencer = sequencer.without_shuffle();
    }
    let corpus = sequencer.run(&Generator::new(&registers), &mut rng);

    match corpus.write_to(BufWriter::new(io::stdout().lock())) {
        // The consumer stopped reading; nothing left to do.
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.wrap_err("failed to write corpus to stdout"),
    }
}
