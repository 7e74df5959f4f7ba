use std::collections::BTreeSet;

use mips_rs::decoder::Fields;
use mips_rs::isa::mips32::{OPCODE_BEQ, OPCODE_BNE};

/// Byte addresses referenced by any `beq`/`bne` in a program.
///
/// Targets are kept even when they fall outside the program (including
/// before address 0); they simply never match a word when labels are
/// placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchTargets(BTreeSet<i64>);

impl BranchTargets {
    pub fn contains(&self, addr: u32) -> bool {
        self.0.contains(&(addr as i64))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ascending.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }
}

/// Target of the branch at word index `index` with word offset `imm`,
/// relative to the following instruction.
pub fn target_of(index: usize, imm: i32) -> i64 {
    (index as i64 + 1 + imm as i64) * 4
}

/// First pass: collect every conditional-branch destination. Words that
/// are not branches, decodable or not, are skipped.
pub fn scan_branches(words: &[u32]) -> BranchTargets {
    let mut targets = BTreeSet::new();
    for (i, &w) in words.iter().enumerate() {
        let f = Fields::extract(w);
        if f.opcode != OPCODE_BEQ && f.opcode != OPCODE_BNE {
            continue;
        }
        let tgt = target_of(i, f.imm());
        tracing::trace!(index = i, target = tgt, "branch");
        targets.insert(tgt);
    }
    tracing::debug!(targets = targets.len(), words = words.len(), "branch scan complete");
    BranchTargets(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beq(off: i16) -> u32 {
        ((OPCODE_BEQ as u32) << 26) | (off as u16 as u32)
    }

    fn bne(off: i16) -> u32 {
        ((OPCODE_BNE as u32) << 26) | (1 << 21) | (off as u16 as u32)
    }

    #[test]
    fn forward_target_from_index_two() {
        let words = [0, 0, beq(3), 0, 0, 0, 0];
        let t = scan_branches(&words);
        assert_eq!(t.iter().collect::<Vec<_>>(), vec![24]);
        assert!(t.contains(24));
        assert!(!t.contains(8));
    }

    #[test]
    fn duplicates_collapse() {
        // both land on address 8
        let words = [beq(1), bne(0), 0];
        let t = scan_branches(&words);
        assert_eq!(t.len(), 1);
        assert!(t.contains(8));
    }

    #[test]
    fn out_of_range_targets_are_kept() {
        let words = [beq(-5), bne(100)];
        let t = scan_branches(&words);
        assert_eq!(t.iter().collect::<Vec<_>>(), vec![-16, 408]);
        assert!(!t.contains(0));
        assert!(!t.contains(4));
    }

    #[test]
    fn non_branches_and_garbage_contribute_nothing() {
        let words = [0x0085_1820, 0xFFFF_FFFF, 0x0800_0003, 0x8FBF_0014];
        assert!(scan_branches(&words).is_empty());
        assert!(scan_branches(&[]).is_empty());
    }
}
