use derive_more::Constructor;
use eyre::Result;
use num::NumCast;

use alignkit_core_rs::Error;
use alignkit_io_rs::matrix::Table;

use super::Score;

/// Scores a pair of aligned symbols.
pub trait Scorer {
    type Score: Score;

    fn score(&self, s1: u8, s2: u8) -> Result<Self::Score>;
}

impl<T: Scorer + ?Sized> Scorer for &T {
    type Score = T::Score;

    #[inline(always)]
    fn score(&self, s1: u8, s2: u8) -> Result<Self::Score> {
        (**self).score(s1, s2)
    }
}

/// Fixed match/mismatch scores.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Constructor)]
pub struct Equality<S: Score> {
    pub equal: S,
    pub different: S,
}

impl<S: Score> Scorer for Equality<S> {
    type Score = S;

    #[inline(always)]
    fn score(&self, s1: u8, s2: u8) -> Result<Self::Score> {
        Ok(if s1 == s2 { self.equal } else { self.different })
    }
}

/// Substitution matrix lookup. A pair without an entry fails with [`Error::LookupMiss`]
/// when it is scored, not when the matrix is built.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Matrix<S: Score> {
    // 256 x 256 dense lookup, indexed by `s1 * 256 + s2`
    scores: Vec<Option<S>>,
}

impl<S: Score> Matrix<S> {
    pub fn new(table: &Table) -> Result<Self> {
        let mut scores = vec![None; 256 * 256];
        for &row in table.rows() {
            for &column in table.columns() {
                let Some(value) = table.get(row, column) else {
                    continue;
                };
                let value = <S as NumCast>::from(value).ok_or_else(|| {
                    Error::invalid_parameter(
                        "substitution matrix",
                        format!(
                            "score {value} for ({:?}, {:?}) doesn't fit the score type",
                            row as char, column as char
                        ),
                    )
                })?;
                scores[Self::index(row, column)] = Some(value);
            }
        }
        Ok(Self { scores })
    }

    #[inline(always)]
    fn index(s1: u8, s2: u8) -> usize {
        (s1 as usize) << 8 | s2 as usize
    }
}

impl<S: Score> Scorer for Matrix<S> {
    type Score = S;

    #[inline(always)]
    fn score(&self, s1: u8, s2: u8) -> Result<Self::Score> {
        self.scores[Self::index(s1, s2)].ok_or_else(|| Error::lookup_miss(s1, s2).into())
    }
}
