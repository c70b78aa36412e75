//! Command-line arguments.

use std::{num::NonZeroUsize, path::PathBuf};

use clap::Parser;
use rvfuzz_generator::parse_rounds;

const LONG_ABOUT: &str = "Generates random RISC-V assembly for fuzzing assemblers and emulators.

Every round emits each supported instruction once with random registers, immediates and
labels. All lines of all rounds are shuffled together and written to stdout, one per line.
Label declarations are not kept next to the branches that use them.";

#[derive(Parser, Debug)]
#[command(
    name = "rvfuzz",
    version,
    about = "Random RISC-V assembly generator for fuzzing",
    long_about = LONG_ABOUT,
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Number of generation rounds (at least 1).
    #[arg(value_name = "ROUNDS", default_value = "1", value_parser = parse_rounds)]
    pub rounds: NonZeroUsize,
    /// Register list, one name per line.
    #[arg(
        short = 'r',
        long = "registers",
        value_name = "PATH",
        default_value = "registers.txt"
    )]
    pub registers: PathBuf,
    /// Fixed seed for a reproducible corpus.
    #[arg(short = 's', long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,
    /// Emit lines in generation order instead of shuffling them.
    #[arg(long = "no-shuffle")]
    pub no_shuffle: bool,
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, CommandFactory};
    use test_case::test_case;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["rvfuzz"]).unwrap();
        assert_eq!(cli.rounds.get(), 1);
        assert_eq!(cli.registers, PathBuf::from("registers.txt"));
        assert_eq!(cli.seed, None);
        assert!(!cli.no_shuffle);
    }

    #[test]
    fn all_options() {
        let cli = Cli::try_parse_from([
            "rvfuzz",
            "12",
            "--registers",
            "regs/abi.txt",
            "--seed",
            "99",
            "--no-shuffle",
        ])
        .unwrap();
        assert_eq!(cli.rounds.get(), 12);
        assert_eq!(cli.registers, PathBuf::from("regs/abi.txt"));
        assert_eq!(cli.seed, Some(99));
        assert!(cli.no_shuffle);
    }

    #[test_case("0" ; "zero")]
    #[test_case("-3" ; "negative")]
    #[test_case("three" ; "word")]
    fn invalid_rounds(rounds: &str) {
        let err = Cli::try_parse_from(["rvfuzz", rounds]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn extra_positional_rejected() {
        assert!(Cli::try_parse_from(["rvfuzz", "1", "2"]).is_err());
    }
}
