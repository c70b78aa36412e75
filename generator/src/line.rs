use derive_more::Display;

use crate::Label;

/// One line of generated output.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum EmittedLine {
    /// `<label>:`
    #[display("{_0}:")]
    Declaration(Label),
    /// A fully formatted instruction with its operands.
    #[display("{_0}")]
    Instruction(String),
}

impl EmittedLine {
    pub fn is_declaration(&self) -> bool {
        matches!(self, EmittedLine::Declaration(_))
    }

    /// The mnemonic of an instruction line.
    pub fn mnemonic(&self) -> Option<&str> {
        match self {
            EmittedLine::Declaration(_) => None,
            EmittedLine::Instruction(text) => text.split_whitespace().next(),
        }
    }

    /// Comma-separated operands of an instruction line, trimmed.
    pub fn operands(&self) -> Vec<&str> {
        match self {
            EmittedLine::Declaration(_) => Vec::new(),
            EmittedLine::Instruction(text) => match text.split_once(' ') {
                Some((_, rest)) => rest.split(',').map(str::trim).collect(),
                None => Vec::new(),
            },
        }
    }
}
