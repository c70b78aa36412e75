use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Every mnemonic the generator knows how to emit.
///
/// Variants are grouped the way [`crate::CATALOG`] groups them into shape
/// families. The textual form is the lowercase variant name.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumCount,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Mnemonic {
    // register, register, immediate
    ADDI,
    SLTI,
    SLTIU,
    XORI,
    ORI,
    ANDI,
    SLLI,
    SRLI,
    SRAI,

    // register, register, register
    ADD,
    SUB,
    SLL,
    SLT,
    SLTU,
    XOR,
    SRL,
    SRA,
    OR,
    AND,

    // register, register, label
    BEQ,
    BNE,
    BLT,
    BGE,
    BLTU,
    BGEU,
    BGT,
    BLE,
    BGTU,
    BLEU,

    // register, label
    BEQZ,
    BNEZ,
    BLTZ,
    BGEZ,
    BGTZ,
    BLEZ,

    // register, register
    MV,
    NEG,
    NOT,

    // register, offset(register)
    LW,
    LH,
    LB,
    SW,
    SH,
    SB,

    // register, immediate
    LUI,
    LI,

    CALL,
    JAL,
    JALR,
    J,
    JR,
    RET,
}

impl Mnemonic {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
