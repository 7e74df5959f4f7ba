use crate::decoder::{Decoded, Decoder};
use crate::instructions::Format;
use crate::registers::reg_name;

/// Render a decoded instruction located at byte address `addr`.
pub fn fmt_decoded(d: &Decoded, addr: u32) -> String {
    let mn = d.op.mnemonic();
    match d.op.format() {
        Format::Reg => format!("{} {}, {}, {}", mn, reg_name(d.rd), reg_name(d.rs), reg_name(d.rt)),
        Format::Shift => format!("{} {}, {}, {}", mn, reg_name(d.rd), reg_name(d.rt), d.shamt),
        Format::Branch => format!(
            "{} {}, {}, {}",
            mn,
            reg_name(d.rs),
            reg_name(d.rt),
            label(branch_target(addr, d.imm))
        ),
        Format::Mem => format!("{} {}, {}({})", mn, reg_name(d.rt), d.imm, reg_name(d.rs)),
        Format::Upper => format!("{} {}, {}", mn, reg_name(d.rt), d.imm),
        Format::RegImm => format!("{} {}, {}, {}", mn, reg_name(d.rt), reg_name(d.rs), d.imm),
    }
}

/// Branch destination as printed in an operand: relative to the delay
/// slot, truncated to 16 bits.
pub fn branch_target(addr: u32, imm: i32) -> u32 {
    addr.wrapping_add(4).wrapping_add((imm << 2) as u32) & 0xFFFF
}

/// `Addr_xxxx`. Not masked, so addresses past 0xFFFF print wider than
/// any `branch_target` can.
pub fn label(addr: u32) -> String {
    format!("Addr_{addr:04x}")
}

pub fn fmt_invalid(word: u32, addr: u32) -> String {
    format!("Cannot disassemble {word:08x} at address {addr:04x}")
}

/// Exactly one line of text for `word`, whether or not it decodes.
pub fn disassemble_word<D: Decoder>(dec: &D, word: u32, addr: u32) -> String {
    match dec.decode(word) {
        Ok(d) => fmt_decoded(&d, addr),
        Err(e) => fmt_invalid(e.word(), addr),
    }
}
