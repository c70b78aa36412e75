mod instructions;
mod shapes;

pub use instructions::Mnemonic;
pub use shapes::{family_of, lines_per_round, ShapeFamily, ShapeKind, CATALOG};
