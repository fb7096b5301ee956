use std::fmt::{Display, Formatter};
use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use alignkit_core_rs::Error;

use crate::scoring::symbols::Scorer;
use crate::scoring::Score;

use super::op::Op;
use super::step::Step;
use super::{ungap, GAP};

/// A pairwise alignment: two equal-length gapped rows, their score, and the ranges of the
/// input sequences covered by the rows.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Alignment<S: Score> {
    score: S,
    aligned1: Vec<u8>,
    aligned2: Vec<u8>,
    seq1: Range<usize>,
    seq2: Range<usize>,
}

impl<S: Score> Alignment<S> {
    pub fn new(
        score: S,
        aligned1: Vec<u8>,
        aligned2: Vec<u8>,
        seq1: Range<usize>,
        seq2: Range<usize>,
    ) -> Result<Self> {
        ensure!(
            aligned1.len() == aligned2.len(),
            Error::invalid_parameter(
                "alignment",
                format!(
                    "rows must have equal length, got {} and {}",
                    aligned1.len(),
                    aligned2.len()
                )
            )
        );
        for (row, range) in [(&aligned1, &seq1), (&aligned2, &seq2)] {
            let symbols = row.iter().filter(|x| **x != GAP).count();
            ensure!(
                range.end >= range.start && symbols == range.len(),
                Error::invalid_parameter(
                    "alignment",
                    format!("row covers {symbols} symbols, but the range is {range:?}")
                )
            );
        }
        Ok(Self {
            score,
            aligned1,
            aligned2,
            seq1,
            seq2,
        })
    }

    /// Builds the alignment from rows collected backwards during a traceback.
    /// `start` is the cell where the traceback stopped.
    pub(crate) fn from_traceback(
        score: S,
        mut aligned1: Vec<u8>,
        mut aligned2: Vec<u8>,
        start: (usize, usize),
    ) -> Self {
        aligned1.reverse();
        aligned2.reverse();

        let len1 = aligned1.iter().filter(|x| **x != GAP).count();
        let len2 = aligned2.iter().filter(|x| **x != GAP).count();
        Self {
            score,
            aligned1,
            aligned2,
            seq1: start.0..start.0 + len1,
            seq2: start.1..start.1 + len2,
        }
    }

    /// An alignment without columns, e.g. the local alignment of unrelated sequences.
    pub fn empty(score: S) -> Self {
        Self {
            score,
            aligned1: Vec::new(),
            aligned2: Vec::new(),
            seq1: 0..0,
            seq2: 0..0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.aligned1.is_empty()
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned1.len()
    }

    /// The aligned part of the first sequence without gaps.
    pub fn ungapped1(&self) -> Vec<u8> {
        ungap(&self.aligned1)
    }

    /// The aligned part of the second sequence without gaps.
    pub fn ungapped2(&self) -> Vec<u8> {
        ungap(&self.aligned2)
    }

    /// Column operations, left to right.
    pub fn ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.aligned1
            .iter()
            .zip(self.aligned2.iter())
            .filter_map(|(a, b)| Op::of_column(*a, *b))
    }

    pub fn steps(&self) -> Vec<Step<u32>> {
        Step::encode(self.ops())
    }

    /// Returns the RLE representation of the alignment, e.g. `4=1v2=`.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps().iter())
    }

    /// Number of identical columns.
    pub fn identity(&self) -> usize {
        self.ops().filter(|x| *x == Op::Match).count()
    }

    /// Recomputes the score column by column with the given scorer and gap penalty.
    pub fn rescore(&self, scorer: &impl Scorer<Score = S>, gap: S) -> Result<S> {
        let mut score = S::zero();
        for (&a, &b) in self.aligned1.iter().zip(self.aligned2.iter()) {
            score = if a == GAP || b == GAP {
                score - gap
            } else {
                score + scorer.score(a, b)?
            };
        }
        Ok(score)
    }

    /// Three lines: the first row, a match track (`|` match, `.` mismatch, ` ` gap) and the
    /// second row.
    pub fn prettify(&self) -> [String; 3] {
        let track = self
            .ops()
            .map(|op| match op {
                Op::Match => '|',
                Op::Mismatch => '.',
                Op::GapFirst | Op::GapSecond => ' ',
            })
            .collect();
        [
            String::from_utf8_lossy(&self.aligned1).into_owned(),
            track,
            String::from_utf8_lossy(&self.aligned2).into_owned(),
        ]
    }
}

impl<S: Score> Display for Alignment<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sequence 1 aligned: {}\nSequence 2 aligned: {}\nAlignment score: {}",
            String::from_utf8_lossy(&self.aligned1),
            String::from_utf8_lossy(&self.aligned2),
            self.score
        )
    }
}
