//! Randomized RISC-V assembly text for fuzzing assemblers and emulators.
//!
//! A [`Generator`] walks the static shape catalog and renders each mnemonic
//! with random registers, immediates and labels. A [`Sequencer`] repeats that
//! for a number of rounds and shuffles the resulting [`Corpus`].

pub mod error;
mod generator;
mod immediate;
mod label;
mod line;
mod registers;
mod sequencer;
#[cfg(test)]
mod test_utils;

pub use error::{ConfigError, ParseImmediateError, RegisterSetError};
pub use generator::Generator;
pub use immediate::{Immediate, Radix};
pub use label::{Label, LABEL_ALPHABET, MAX_LABEL_LEN, MIN_LABEL_LEN};
pub use line::EmittedLine;
pub use registers::RegisterSet;
pub use sequencer::{parse_rounds, Corpus, Sequencer};
