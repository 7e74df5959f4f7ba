use mips_rs::decoder::Decoder;
use mips_rs::disasm::{disassemble_word, fmt_decoded};
use mips_rs::isa::mips32::Mips32Decoder;

fn enc_r(rs: u32, rt: u32, rd: u32, shamt: u32, funct: u32) -> u32 {
    ((rs & 0x1F) << 21) | ((rt & 0x1F) << 16) | ((rd & 0x1F) << 11) | ((shamt & 0x1F) << 6) | (funct & 0x3F)
}

fn enc_i(opcode: u32, rs: u32, rt: u32, imm: i16) -> u32 {
    ((opcode & 0x3F) << 26) | ((rs & 0x1F) << 21) | ((rt & 0x1F) << 16) | (imm as u16 as u32)
}

fn line(word: u32, addr: u32) -> String {
    disassemble_word(&Mips32Decoder::new(), word, addr)
}

#[test]
fn disasm_add() {
    assert_eq!(enc_r(4, 5, 3, 0, 0b100000), 0x0085_1820);
    let dec = Mips32Decoder::new();
    let d = dec.decode(0x0085_1820).unwrap();
    assert_eq!(fmt_decoded(&d, 0), "add $v1, $a0, $a1");
}

#[test]
fn disasm_register_ops() {
    assert_eq!(line(enc_r(8, 9, 10, 0, 0b100001), 0), "addu $t2, $t0, $t1");
    assert_eq!(line(enc_r(16, 17, 18, 0, 0b100100), 0), "and $s2, $s0, $s1");
    assert_eq!(line(enc_r(16, 17, 18, 0, 0b100101), 0), "or $s2, $s0, $s1");
    assert_eq!(line(enc_r(0, 0, 0, 0, 0b100111), 0), "nor $zero, $zero, $zero");
    assert_eq!(line(enc_r(29, 31, 30, 0, 0b101010), 0), "slt $fp, $sp, $ra");
    assert_eq!(line(enc_r(1, 2, 3, 0, 0b101011), 0), "sltu $v1, $at, $v0");
    assert_eq!(line(enc_r(24, 25, 26, 0, 0b100010), 0), "sub $k0, $t8, $t9");
    assert_eq!(line(enc_r(24, 25, 27, 0, 0b100011), 0), "subu $k1, $t8, $t9");
}

#[test]
fn disasm_shifts_use_shamt() {
    assert_eq!(line(enc_r(0, 3, 2, 4, 0b000000), 0), "sll $v0, $v1, 4");
    assert_eq!(line(enc_r(0, 9, 8, 31, 0b000010), 0), "srl $t0, $t1, 31");
    // rs is ignored by the shift form
    assert_eq!(line(enc_r(7, 3, 2, 4, 0b000000), 0), "sll $v0, $v1, 4");
    assert_eq!(line(0, 0), "sll $zero, $zero, 0");
}

#[test]
fn disasm_immediates_are_signed_decimal() {
    assert_eq!(line(enc_i(0b001000, 8, 8, -4), 0), "addi $t0, $t0, -4");
    assert_eq!(line(enc_i(0b001001, 29, 29, 32767), 0), "addiu $sp, $sp, 32767");
    assert_eq!(line(enc_i(0b001100, 4, 2, -1), 0), "andi $v0, $a0, -1");
    assert_eq!(line(enc_i(0b001101, 0, 9, 0x10), 0), "ori $t1, $zero, 16");
    assert_eq!(line(enc_i(0b001010, 5, 6, -32768), 0), "slti $a2, $a1, -32768");
    assert_eq!(line(enc_i(0b001011, 5, 6, 7), 0), "sltiu $a2, $a1, 7");
    assert_eq!(line(enc_i(0b001111, 0, 1, 0x1001), 0), "lui $at, 4097");
    assert_eq!(line(enc_i(0b001111, 0, 1, -2), 0), "lui $at, -2");
}

#[test]
fn disasm_memory_ops() {
    assert_eq!(line(enc_i(0b100011, 29, 31, 20), 0), "lw $ra, 20($sp)");
    assert_eq!(line(enc_i(0b101011, 29, 31, -8), 0), "sw $ra, -8($sp)");
    assert_eq!(line(enc_i(0b100100, 4, 2, 0), 0), "lbu $v0, 0($a0)");
    assert_eq!(line(enc_i(0b100101, 4, 2, 2), 0), "lhu $v0, 2($a0)");
    assert_eq!(line(enc_i(0b110000, 4, 8, 0), 0), "ll $t0, 0($a0)");
    assert_eq!(line(enc_i(0b101000, 4, 8, 1), 0), "sb $t0, 1($a0)");
    assert_eq!(line(enc_i(0b111000, 4, 8, 0), 0), "sc $t0, 0($a0)");
    assert_eq!(line(enc_i(0b101001, 4, 8, 6), 0), "sh $t0, 6($a0)");
}

#[test]
fn disasm_unknown_words() {
    let bad_op = 0xFC00_0000 | enc_r(1, 2, 3, 0, 0);
    assert_eq!(line(bad_op, 0x0004), format!("Cannot disassemble {bad_op:08x} at address 0004"));
    assert_eq!(line(bad_op, 0x0004), "Cannot disassemble fc221800 at address 0004");
    // opcode 0 with an unlisted funct (jr)
    assert_eq!(line(enc_r(31, 0, 0, 0, 0b001000), 0x10), "Cannot disassemble 03e00008 at address 0010");
    // j is not in the primary table
    assert_eq!(line(0x0800_0000, 0x1_0000), "Cannot disassemble 08000000 at address 10000");
}
