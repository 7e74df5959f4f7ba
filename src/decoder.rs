use serde::{Deserialize, Serialize};

/// Raw fields of a 32-bit instruction word. Every field is extracted
/// regardless of format; which ones are meaningful depends on `opcode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields {
    pub opcode: u8, // 31..26
    pub rs: u8,     // 25..21
    pub rt: u8,     // 20..16
    pub rd: u8,     // 15..11
    pub shamt: u8,  // 10..6
    pub funct: u8,  // 5..0
    pub imm_raw: u16, // 15..0, overlaps rd/shamt/funct
}

impl Fields {
    pub fn extract(word: u32) -> Self {
        Self {
            opcode: (word >> 26) as u8,
            rs: ((word >> 21) & 0x1F) as u8,
            rt: ((word >> 16) & 0x1F) as u8,
            rd: ((word >> 11) & 0x1F) as u8,
            shamt: ((word >> 6) & 0x1F) as u8,
            funct: (word & 0x3F) as u8,
            imm_raw: (word & 0xFFFF) as u16,
        }
    }

    /// Reassemble the word from the R-format view of the fields.
    pub fn to_word(&self) -> u32 {
        ((self.opcode as u32 & 0x3F) << 26)
            | ((self.rs as u32 & 0x1F) << 21)
            | ((self.rt as u32 & 0x1F) << 16)
            | ((self.rd as u32 & 0x1F) << 11)
            | ((self.shamt as u32 & 0x1F) << 6)
            | (self.funct as u32 & 0x3F)
    }

    pub fn imm(&self) -> i32 {
        sign_extend16(self.imm_raw)
    }
}

/// Two's-complement widening of a 16-bit immediate.
pub fn sign_extend16(raw: u16) -> i32 {
    if raw & 0x8000 != 0 {
        raw as i32 - 0x10000
    } else {
        raw as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    // R-format (opcode 0, selected by funct)
    Add,
    Addu,
    And,
    Nor,
    Or,
    Slt,
    Sltu,
    Sll,
    Srl,
    Sub,
    Subu,
    // I-format (selected by opcode)
    Addi,
    Addiu,
    Andi,
    Beq,
    Bne,
    Lbu,
    Lhu,
    Ll,
    Lui,
    Lw,
    Ori,
    Slti,
    Sltiu,
    Sb,
    Sc,
    Sh,
    Sw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    pub op: Op,
    pub rs: u8,
    pub rt: u8,
    pub rd: u8,
    pub shamt: u8,
    pub imm: i32, // sign-extended; zero-meaning for R-format
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown funct {funct:#04x} in {word:#010x}")]
    UnknownFunct { word: u32, funct: u8 },
    #[error("unknown opcode {opcode:#04x} in {word:#010x}")]
    UnknownOpcode { word: u32, opcode: u8 },
}

impl DecodeError {
    pub fn word(&self) -> u32 {
        match *self {
            DecodeError::UnknownFunct { word, .. } | DecodeError::UnknownOpcode { word, .. } => word,
        }
    }
}

pub trait Decoder {
    fn decode(&self, raw32: u32) -> Result<Decoded, DecodeError>;
}
