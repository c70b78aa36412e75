use std::{
    io::{self, Write},
    num::NonZeroUsize,
};

use rand::{seq::SliceRandom, Rng};

use crate::{error::ConfigError, EmittedLine, Generator};


/// Lines reserved up front when collecting a corpus, at most.
const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// Parses a round count. Anything that is not an integer of at least 1 is
/// rejected, as is a count whose corpus length would not fit in a `usize`.
pub fn parse_rounds(text: &str) -> Result<NonZeroUsize, ConfigError> {
    let value: i128 = text.trim().parse().map_err(|_| ConfigError::NotANumber {
        value: text.to_string(),
    })?;
    if value < 1 {
        return Err(ConfigError::NonPositive { value });
    }
    let max_rounds = usize::MAX / rvfuzz_catalog::lines_per_round();
    usize::try_from(value)
        .ok()
        .filter(|&rounds| rounds <= max_rounds)
        .and_then(NonZeroUsize::new)
        .ok_or(ConfigError::TooLarge { value })
}

fn initial_capacity(rounds: NonZeroUsize, lines_per_round: usize) -> usize {
    rounds
        .get()
        .checked_mul(lines_per_round)
        .map_or(MAX_INITIAL_CAPACITY, |lines| lines.min(MAX_INITIAL_CAPACITY))
}

/// All lines produced by one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    lines: Vec<EmittedLine>,
}

impl Corpus {
    pub fn lines(&self) -> &[EmittedLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Applies a uniform random permutation to the whole corpus.
    ///
    /// Declarations and the instructions referencing them are not kept
    /// together afterwards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.lines.shuffle(rng);
    }

    /// Writes every line followed by a newline, in current order.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

/// Drives the [`Generator`] for a number of rounds and shuffles the result.
#[derive(Clone, Copy, Debug)]
pub struct Sequencer {
    rounds: NonZeroUsize,
    shuffle: bool,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(NonZeroUsize::MIN)
    }
}

impl Sequencer {
    pub fn new(rounds: NonZeroUsize) -> Self {
        Self {
            rounds,
            shuffle: true,
        }
    }

    /// Keep the generation order instead of shuffling.
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    pub fn rounds(&self) -> NonZeroUsize {
        self.rounds
    }

    /// Runs every round without shuffling.
    pub fn collect<R: Rng + ?Sized>(&self, generator: &Generator<'_>, rng: &mut R) -> Corpus {
        let capacity = initial_capacity(self.rounds, generator.lines_per_round());
        let mut lines = Vec::with_capacity(capacity);
        for round in 0..self.rounds.get() {
            tracing::trace!("round {round}");
            generator.round(rng, &mut lines);
        }
        Corpus { lines }
    }

    /// Runs every round and, unless disabled, shuffles the corpus.
    pub fn run<R: Rng + ?Sized>(&self, generator: &Generator<'_>, rng: &mut R) -> Corpus {
        let mut corpus = self.collect(generator, rng);
        if self.shuffle {
            corpus.shuffle(rng);
        }
        tracing::info!(
            "Built corpus of {} lines over {} rounds",
            corpus.len(),
            self.rounds
        );
        corpus
    }
}
