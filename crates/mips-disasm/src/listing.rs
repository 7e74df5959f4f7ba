use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use mips_rs::decoder::Decoder;
use mips_rs::disasm::{fmt_decoded, fmt_invalid, label};
use mips_rs::isa::mips32::Mips32Decoder;

use crate::analyze::{scan_branches, BranchTargets};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Label { addr: u32 },
    Insn { addr: u32, word: u32, text: String },
    Invalid { addr: u32, word: u32 },
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Label { addr } => write!(f, "{}:", label(*addr)),
            Line::Insn { text, .. } => f.write_str(text),
            Line::Invalid { addr, word } => f.write_str(&fmt_invalid(*word, *addr)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, Serialize)]
struct LineOut {
    addr: u32,
    word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    text: String,
    valid: bool,
}

#[derive(Debug, Clone, Serialize)]
struct ReportOut {
    labels: Vec<String>,
    lines: Vec<LineOut>,
}

impl Listing {
    pub fn write_text<W: Write>(&self, mut w: W) -> io::Result<()> {
        for l in &self.lines {
            writeln!(w, "{l}")?;
        }
        Ok(())
    }

    pub fn to_text(&self) -> String {
        self.lines.iter().map(|l| format!("{l}\n")).collect()
    }

    pub fn invalid_count(&self) -> usize {
        self.lines.iter().filter(|l| matches!(l, Line::Invalid { .. })).count()
    }

    pub fn label_count(&self) -> usize {
        self.lines.iter().filter(|l| matches!(l, Line::Label { .. })).count()
    }

    /// JSON report: one record per word, labels folded into the record
    /// they precede.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut labels = Vec::new();
        let mut lines = Vec::new();
        let mut pending: Option<String> = None;
        for l in &self.lines {
            match l {
                Line::Label { addr } => {
                    let name = label(*addr);
                    labels.push(name.clone());
                    pending = Some(name);
                }
                Line::Insn { addr, word, text } => lines.push(LineOut {
                    addr: *addr,
                    word: format!("{word:08x}"),
                    label: pending.take(),
                    text: text.clone(),
                    valid: true,
                }),
                Line::Invalid { addr, word } => lines.push(LineOut {
                    addr: *addr,
                    word: format!("{word:08x}"),
                    label: pending.take(),
                    text: l.to_string(),
                    valid: false,
                }),
            }
        }
        serde_json::to_string_pretty(&ReportOut { labels, lines })
    }
}

/// Second pass: one line per word, preceded by its label when some branch
/// targets it.
pub fn build_listing(words: &[u32], targets: &BranchTargets) -> Listing {
    let dec = Mips32Decoder::new();
    let mut lines = Vec::with_capacity(words.len() + targets.len());
    for (i, &word) in words.iter().enumerate() {
        let addr = (i as u32).wrapping_mul(4);
        if targets.contains(addr) {
            lines.push(Line::Label { addr });
        }
        match dec.decode(word) {
            Ok(d) => lines.push(Line::Insn { addr, word, text: fmt_decoded(&d, addr) }),
            Err(e) => {
                tracing::warn!(addr, word, error = %e, "undecodable instruction");
                lines.push(Line::Invalid { addr, word });
            }
        }
    }
    Listing { lines }
}

/// Scan for branch targets, then decode.
pub fn disassemble(words: &[u32]) -> Listing {
    let targets = scan_branches(words);
    build_listing(words, &targets)
}
