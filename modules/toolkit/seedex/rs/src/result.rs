use std::cmp::Reverse;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, Display};

/// Exact word match between the query and the target.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Display, Constructor, Getters,
)]
#[display("Hit(query={query}, target={target})")]
pub struct Hit {
    query: usize,
    target: usize,
}

/// Ungapped extension of a [`Hit`].
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(
    Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Display, Constructor, Getters, Dissolve,
)]
#[display(
    "ExtendedHit(query_start={query_start}, target_start={target_start}, \
     extended_length={extended_length}, match_count={match_count})"
)]
pub struct ExtendedHit {
    query_start: usize,
    target_start: usize,
    extended_length: usize,
    match_count: usize,
}

impl ExtendedHit {
    pub fn mismatch_count(&self) -> usize {
        self.extended_length - self.match_count
    }

    /// Extended segment of the query.
    pub fn query_range(&self) -> std::ops::Range<usize> {
        self.query_start..self.query_start + self.extended_length
    }

    /// Extended segment of the target.
    pub fn target_range(&self) -> std::ops::Range<usize> {
        self.target_start..self.target_start + self.extended_length
    }
}

/// Result of the best-hit search: either the top-ranked hit or nothing.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Outcome {
    Found(ExtendedHit),
    #[default]
    Empty,
}

impl Outcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    pub fn hit(&self) -> Option<&ExtendedHit> {
        match self {
            Outcome::Found(hit) => Some(hit),
            Outcome::Empty => None,
        }
    }

    pub fn into_hit(self) -> Option<ExtendedHit> {
        match self {
            Outcome::Found(hit) => Some(hit),
            Outcome::Empty => None,
        }
    }
}

impl From<Option<ExtendedHit>> for Outcome {
    fn from(value: Option<ExtendedHit>) -> Self {
        value.map_or(Outcome::Empty, Outcome::Found)
    }
}

/// Best hits first: more matches, then shorter extensions. Equal hits keep their order.
pub fn rank(hits: &mut [ExtendedHit]) {
    hits.sort_by_key(|x| (Reverse(x.match_count), x.extended_length));
}
