use crate::decoder::Op;

/// Operand layout used when rendering an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `rd, rs, rt`
    Reg,
    /// `rd, rt, shamt`
    Shift,
    /// `rs, rt, Addr_xxxx`
    Branch,
    /// `rt, imm(rs)`
    Mem,
    /// `rt, imm`
    Upper,
    /// `rt, rs, imm`
    RegImm,
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub op: Op,
    pub mnemonic: &'static str,
    pub format: Format,
}

const fn desc(op: Op, mnemonic: &'static str, format: Format) -> InstrDesc {
    InstrDesc { op, mnemonic, format }
}

/// One entry per `Op`, in declaration order.
pub const TABLE: &[InstrDesc] = &[
    desc(Op::Add, "add", Format::Reg),
    desc(Op::Addu, "addu", Format::Reg),
    desc(Op::And, "and", Format::Reg),
    desc(Op::Nor, "nor", Format::Reg),
    desc(Op::Or, "or", Format::Reg),
    desc(Op::Slt, "slt", Format::Reg),
    desc(Op::Sltu, "sltu", Format::Reg),
    desc(Op::Sll, "sll", Format::Shift),
    desc(Op::Srl, "srl", Format::Shift),
    desc(Op::Sub, "sub", Format::Reg),
    desc(Op::Subu, "subu", Format::Reg),
    desc(Op::Addi, "addi", Format::RegImm),
    desc(Op::Addiu, "addiu", Format::RegImm),
    desc(Op::Andi, "andi", Format::RegImm),
    desc(Op::Beq, "beq", Format::Branch),
    desc(Op::Bne, "bne", Format::Branch),
    desc(Op::Lbu, "lbu", Format::Mem),
    desc(Op::Lhu, "lhu", Format::Mem),
    desc(Op::Ll, "ll", Format::Mem),
    desc(Op::Lui, "lui", Format::Upper),
    desc(Op::Lw, "lw", Format::Mem),
    desc(Op::Ori, "ori", Format::RegImm),
    desc(Op::Slti, "slti", Format::RegImm),
    desc(Op::Sltiu, "sltiu", Format::RegImm),
    desc(Op::Sb, "sb", Format::Mem),
    desc(Op::Sc, "sc", Format::Mem),
    desc(Op::Sh, "sh", Format::Mem),
    desc(Op::Sw, "sw", Format::Mem),
];

impl Op {
    pub fn desc(self) -> &'static InstrDesc {
        &TABLE[self as usize]
    }

    pub fn mnemonic(self) -> &'static str {
        self.desc().mnemonic
    }

    pub fn format(self) -> Format {
        self.desc().format
    }
}
