use crate::decoder::{DecodeError, Decoded, Decoder, Fields, Op};

pub const OPCODE_SPECIAL: u8 = 0b000000;
pub const OPCODE_BEQ: u8 = 0b000100;
pub const OPCODE_BNE: u8 = 0b000101;

/// Decoder for the MIPS32 integer subset: register-register ops under
/// SPECIAL (opcode 0) and immediate/branch/memory ops on the primary opcode.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mips32Decoder;

impl Mips32Decoder {
    pub fn new() -> Self {
        Self
    }
}

/// SPECIAL table, keyed by funct.
fn special(funct: u8) -> Option<Op> {
    Some(match funct {
        0b000000 => Op::Sll,
        0b000010 => Op::Srl,
        0b100000 => Op::Add,
        0b100001 => Op::Addu,
        0b100010 => Op::Sub,
        0b100011 => Op::Subu,
        0b100100 => Op::And,
        0b100101 => Op::Or,
        0b100111 => Op::Nor,
        0b101010 => Op::Slt,
        0b101011 => Op::Sltu,
        _ => return None,
    })
}

/// Primary table, keyed by opcode. Shares bit patterns with `special`
/// (0x24 is `and` there, `lbu` here); the two are never consulted together.
fn primary(opcode: u8) -> Option<Op> {
    Some(match opcode {
        OPCODE_BEQ => Op::Beq,
        OPCODE_BNE => Op::Bne,
        0b001000 => Op::Addi,
        0b001001 => Op::Addiu,
        0b001010 => Op::Slti,
        0b001011 => Op::Sltiu,
        0b001100 => Op::Andi,
        0b001101 => Op::Ori,
        0b001111 => Op::Lui,
        0b100011 => Op::Lw,
        0b100100 => Op::Lbu,
        0b100101 => Op::Lhu,
        0b101000 => Op::Sb,
        0b101001 => Op::Sh,
        0b101011 => Op::Sw,
        0b110000 => Op::Ll,
        0b111000 => Op::Sc,
        _ => return None,
    })
}

impl Decoder for Mips32Decoder {
    fn decode(&self, raw32: u32) -> Result<Decoded, DecodeError> {
        let f = Fields::extract(raw32);
        if f.opcode == OPCODE_SPECIAL {
            let op = special(f.funct).ok_or(DecodeError::UnknownFunct { word: raw32, funct: f.funct })?;
            return Ok(Decoded { op, rs: f.rs, rt: f.rt, rd: f.rd, shamt: f.shamt, imm: 0 });
        }
        let op = primary(f.opcode).ok_or(DecodeError::UnknownOpcode { word: raw32, opcode: f.opcode })?;
        Ok(Decoded { op, rs: f.rs, rt: f.rt, rd: 0, shamt: 0, imm: f.imm() })
    }
}
