pub mod decoder;
pub mod disasm;
pub mod instructions;
pub mod registers;

pub mod isa {
    pub mod mips32; // MIPS32 integer subset (R/I formats)
}

pub use decoder::{sign_extend16, DecodeError, Decoded, Decoder, Fields, Op};
pub use disasm::{disassemble_word, fmt_decoded, fmt_invalid, label};
pub use isa::mips32::Mips32Decoder;
