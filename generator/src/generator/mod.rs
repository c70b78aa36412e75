use rand::Rng;
use rvfuzz_catalog::{Mnemonic, ShapeFamily, CATALOG};

use crate::{EmittedLine, Immediate, Label, RegisterSet};


/// Turns the shape catalog into randomized instruction text.
///
/// Every call to [`Generator::round`] emits each mnemonic of each family once
/// (twice for the `jal`/`jalr` register-implied variants), in catalog order.
/// Label declarations are pushed directly before the instruction that uses
/// them.
#[derive(Clone, Copy, Debug)]
pub struct Generator<'a> {
    registers: &'a RegisterSet,
    catalog: &'a [ShapeFamily],
}

impl<'a> Generator<'a> {
    pub fn new(registers: &'a RegisterSet) -> Self {
        Self::with_catalog(registers, CATALOG)
    }

    pub fn with_catalog(registers: &'a RegisterSet, catalog: &'a [ShapeFamily]) -> Self {
        Self {
            registers,
            catalog,
        }
    }

    pub fn lines_per_round(&self) -> usize {
        self.catalog.iter().map(ShapeFamily::lines_per_round).sum()
    }

    /// Appends one round of lines, one family after another.
    pub fn round<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut Vec<EmittedLine>) {
        for family in self.catalog {
            let before = out.len();
            self.family(family, rng, out);
            tracing::debug!("{} emitted {} lines", family.kind(), out.len() - before);
        }
    }

    /// Appends the lines for every mnemonic of a single family.
    pub fn family<R: Rng + ?Sized>(
        &self,
        family: &ShapeFamily,
        rng: &mut R,
        out: &mut Vec<EmittedLine>,
    ) {
        for &mnemonic in family.mnemonics() {
            self.instruction(family, mnemonic, rng, out);
        }
    }

    fn instruction<R: Rng + ?Sized>(
        &self,
        family: &ShapeFamily,
        m: Mnemonic,
        rng: &mut R,
        out: &mut Vec<EmittedLine>,
    ) {
        match family {
            ShapeFamily::AluImm(_) => {
                let (rd, r1) = (self.reg(rng), self.reg(rng));
                let imm = Immediate::random(rng);
                out.push(instr(format!("{m} {rd}, {r1}, {imm}")));
            }
            ShapeFamily::AluReg(_) => {
                let (rd, r1, r2) = (self.reg(rng), self.reg(rng), self.reg(rng));
                out.push(instr(format!("{m} {rd}, {r1}, {r2}")));
            }
            ShapeFamily::BranchReg(_) => {
                let (r1, r2) = (self.reg(rng), self.reg(rng));
                let label = declare(rng, out);
                out.push(instr(format!("{m} {r1}, {r2}, {label}")));
            }
            ShapeFamily::BranchZero(_) => {
                let r1 = self.reg(rng);
                let label = declare(rng, out);
                out.push(instr(format!("{m} {r1}, {label}")));
            }
            ShapeFamily::RegMove(_) => {
                let (r1, r2) = (self.reg(rng), self.reg(rng));
                out.push(instr(format!("{m} {r1}, {r2}")));
            }
            ShapeFamily::LoadStore(_) => {
                let (r1, r2) = (self.reg(rng), self.reg(rng));
                let offset = Immediate::random(rng);
                out.push(instr(format!("{m} {r1}, {offset}({r2})")));
            }
            ShapeFamily::RegImm(_) => {
                let r1 = self.reg(rng);
                let imm = Immediate::random(rng);
                out.push(instr(format!("{m} {r1}, {imm}")));
            }
            ShapeFamily::Call(_) | ShapeFamily::Jump(_) => {
                let label = declare(rng, out);
                out.push(instr(format!("{m} {label}")));
            }
            ShapeFamily::Jal(_) => {
                let rd = self.reg(rng);
                let label = declare(rng, out);
                out.push(instr(format!("{m} {rd}, {label}")));
                // Link register left to the assembler's default.
                let label = declare(rng, out);
                out.push(instr(format!("{m} {label}")));
            }
            ShapeFamily::Jalr(_) => {
                let (rd, r1) = (self.reg(rng), self.reg(rng));
                let offset = Immediate::random(rng);
                out.push(instr(format!("{m} {rd}, {offset}({r1})")));
                let rd = self.reg(rng);
                out.push(instr(format!("{m} {rd}")));
            }
            ShapeFamily::JumpReg(_) => {
                let rs = self.reg(rng);
                out.push(instr(format!("{m} {rs}")));
            }
            ShapeFamily::Return(_) => out.push(instr(m.to_string())),
        }
    }

    fn reg<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a str {
        self.registers.choose(rng)
    }
}

fn instr(text: String) -> EmittedLine {
    EmittedLine::Instruction(text)
}

/// Pushes a fresh label declaration and hands the label back for the
/// instruction that follows it.
fn declare<R: Rng + ?Sized>(rng: &mut R, out: &mut Vec<EmittedLine>) -> Label {
    let label = Label::random(rng);
    out.push(EmittedLine::Declaration(label.clone()));
    label
}
