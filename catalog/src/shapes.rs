use strum::{Display, EnumCount, EnumIter};
use strum_macros::EnumDiscriminants;

use crate::Mnemonic;

/// An operand-shape family: a group of mnemonics sharing one operand grammar
/// and one randomization rule.
///
/// Each variant carries its members as data, so coverage changes are edits to
/// [`CATALOG`] only.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(name(ShapeKind))]
#[strum_discriminants(derive(Hash, EnumCount, EnumIter, Display))]
pub enum ShapeFamily {
    /// `<m> <rd>, <r1>, <imm>`
    AluImm(&'static [Mnemonic]),
    /// `<m> <rd>, <r1>, <r2>`
    AluReg(&'static [Mnemonic]),
    /// `<label>:` followed by `<m> <r1>, <r2>, <label>`
    BranchReg(&'static [Mnemonic]),
    /// `<label>:` followed by `<m> <r1>, <label>`
    BranchZero(&'static [Mnemonic]),
    /// `<m> <r1>, <r2>`
    RegMove(&'static [Mnemonic]),
    /// `<m> <r1>, <imm>(<r2>)`
    LoadStore(&'static [Mnemonic]),
    /// `<m> <r1>, <imm>`
    RegImm(&'static [Mnemonic]),
    /// `<label>:` followed by `<m> <label>`
    Call(&'static [Mnemonic]),
    /// `<label>:` followed by `<m> <rd>, <label>`, then a second declaration
    /// followed by `<m> <label>` with the link register left implicit.
    Jal(&'static [Mnemonic]),
    /// `<m> <rd>, <imm>(<r1>)`, then `<m> <rd>`.
    Jalr(&'static [Mnemonic]),
    /// `<label>:` followed by `<m> <label>`
    Jump(&'static [Mnemonic]),
    /// `<m> <r>`
    JumpReg(&'static [Mnemonic]),
    /// `<m>`
    Return(&'static [Mnemonic]),
}

use Mnemonic::*;

/// The full instruction-shape catalog, one entry per family.
pub const CATALOG: &[ShapeFamily] = &[
    ShapeFamily::AluImm(&[ADDI, SLTI, SLTIU, XORI, ORI, ANDI, SLLI, SRLI, SRAI]),
    ShapeFamily::AluReg(&[ADD, SUB, SLL, SLT, SLTU, XOR, SRL, SRA, OR, AND]),
    ShapeFamily::BranchReg(&[BEQ, BNE, BLT, BGE, BLTU, BGEU, BGT, BLE, BGTU, BLEU]),
    ShapeFamily::BranchZero(&[BEQZ, BNEZ, BLTZ, BGEZ, BGTZ, BLEZ]),
    ShapeFamily::RegMove(&[MV, NEG, NOT]),
    ShapeFamily::LoadStore(&[LW, LH, LB, SW, SH, SB]),
    ShapeFamily::RegImm(&[LUI, LI]),
    ShapeFamily::Call(&[CALL]),
    ShapeFamily::Jal(&[JAL]),
    ShapeFamily::Jalr(&[JALR]),
    ShapeFamily::Jump(&[J]),
    ShapeFamily::JumpReg(&[JR]),
    ShapeFamily::Return(&[RET]),
];

impl ShapeFamily {
    pub fn kind(&self) -> ShapeKind {
        self.into()
    }

    pub fn mnemonics(&self) -> &'static [Mnemonic] {
        match *self {
            ShapeFamily::AluImm(m)
            | ShapeFamily::AluReg(m)
            | ShapeFamily::BranchReg(m)
            | ShapeFamily::BranchZero(m)
            | ShapeFamily::RegMove(m)
            | ShapeFamily::LoadStore(m)
            | ShapeFamily::RegImm(m)
            | ShapeFamily::Call(m)
            | ShapeFamily::Jal(m)
            | ShapeFamily::Jalr(m)
            | ShapeFamily::Jump(m)
            | ShapeFamily::JumpReg(m)
            | ShapeFamily::Return(m) => m,
        }
    }

    /// Whether instructions of this family reference a freshly declared label.
    pub fn declares_label(&self) -> bool {
        matches!(
            self,
            ShapeFamily::BranchReg(_)
                | ShapeFamily::BranchZero(_)
                | ShapeFamily::Call(_)
                | ShapeFamily::Jal(_)
                | ShapeFamily::Jump(_)
        )
    }

    /// Number of lines one member mnemonic contributes to a round.
    pub fn lines_per_mnemonic(&self) -> usize {
        match self {
            ShapeFamily::BranchReg(_)
            | ShapeFamily::BranchZero(_)
            | ShapeFamily::Call(_)
            | ShapeFamily::Jump(_)
            | ShapeFamily::Jalr(_) => 2,
            ShapeFamily::Jal(_) => 4,
            _ => 1,
        }
    }

    pub fn lines_per_round(&self) -> usize {
        self.mnemonics().len() * self.lines_per_mnemonic()
    }
}

/// Looks up the family a mnemonic belongs to.
pub fn family_of(mnemonic: Mnemonic) -> Option<&'static ShapeFamily> {
    CATALOG
        .iter()
        .find(|family| family.mnemonics().contains(&mnemonic))
}

/// Total number of lines a single generation round emits.
pub fn lines_per_round() -> usize {
    CATALOG.iter().map(ShapeFamily::lines_per_round).sum()
}
