#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

/// `Op` represents a single column of a pairwise alignment.
#[repr(u8)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// A gap in the first sequence, the second sequence symbol is unpaired (v)
    GapFirst,
    /// A gap in the second sequence, the first sequence symbol is unpaired (^)
    GapSecond,
    /// Identical symbols (=)
    Match,
    /// Different symbols (X)
    Mismatch,
}

impl Op {
    /// Classifies an alignment column. Returns `None` for a column made of two gaps.
    pub fn of_column(s1: u8, s2: u8) -> Option<Op> {
        match (s1, s2) {
            (super::GAP, super::GAP) => None,
            (super::GAP, _) => Some(Op::GapFirst),
            (_, super::GAP) => Some(Op::GapSecond),
            (a, b) if a == b => Some(Op::Match),
            _ => Some(Op::Mismatch),
        }
    }

    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }
}
