use num_enum::IntoPrimitive;
use strum::{Display, EnumIter, EnumString};

/// Mnemonics of the SAP8 instruction set.
///
/// The discriminant is the opcode byte emitted into machine code.
/// Opcode 10 is reserved and has no mnemonic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, EnumString, EnumIter, Display,
)]
#[repr(u8)]
pub enum Mnemonic {
    NOP = 0,
    LDA = 1,
    LDI = 2,
    STA = 3,
    ADD = 4,
    ADI = 5,
    SUB = 6,
    SUI = 7,
    JMP = 8,
    HLT = 9,
    DCM = 11,
    DCI = 12,
    DOC = 13,
    DOI = 14,
}

impl Mnemonic {
    /// Number of operand bytes following the opcode byte.
    pub fn operand_bytes(self) -> u8 {
        use Mnemonic::*;
        match self {
            NOP | HLT => 0,
            LDA | STA | ADI | SUI => 1,
            LDI | ADD | SUB | JMP | DCM | DCI | DOC | DOI => 2,
        }
    }

    /// Encoded size of the whole instruction in bytes.
    pub fn size(self) -> u16 {
        1 + self.operand_bytes() as u16
    }
}
