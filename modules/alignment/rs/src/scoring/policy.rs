use std::str::FromStr;

use derive_more::{Display, From};
use eyre::{Report, Result};
use num::NumCast;

use alignkit_core_rs::Error;
use alignkit_io_rs::matrix::{Registry, Table};

use super::symbols::{Equality, Matrix, Scorer};
use super::Score;

/// Symbol scoring policy selected once per molecule type: fixed match/mismatch scores for
/// nucleotides or a substitution matrix for proteins.
#[derive(Clone, PartialEq, Eq, Debug, From)]
pub enum Policy<S: Score> {
    Dna(Equality<S>),
    Protein(Matrix<S>),
}

impl<S: Score> Policy<S> {
    pub fn dna(equal: S, different: S) -> Self {
        Policy::Dna(Equality::new(equal, different))
    }

    pub fn protein(table: &Table) -> Result<Self> {
        Ok(Policy::Protein(Matrix::new(table)?))
    }

    /// Builds the scoring policy. Named matrices are loaded from the registry.
    pub fn resolve(spec: &Spec, registry: &Registry) -> Result<Self> {
        match spec {
            Spec::Fixed { equal, different } => {
                let cast = |value: i32| {
                    <S as NumCast>::from(value).ok_or_else(|| {
                        Error::invalid_parameter(
                            "scoring",
                            format!("{value} doesn't fit the score type"),
                        )
                    })
                };
                Ok(Policy::dna(cast(*equal)?, cast(*different)?))
            }
            Spec::Named(name) => Policy::protein(&registry.resolve(name)?),
        }
    }
}

impl<S: Score> Scorer for Policy<S> {
    type Score = S;

    #[inline(always)]
    fn score(&self, s1: u8, s2: u8) -> Result<Self::Score> {
        match self {
            Policy::Dna(x) => x.score(s1, s2),
            Policy::Protein(x) => x.score(s1, s2),
        }
    }
}

/// Textual description of a scoring policy: either a `match,mismatch` pair (e.g. `"2,-1"` or
/// `"[2, -1]"`) or the name of a substitution matrix (e.g. `"blosum62"`).
#[derive(Clone, PartialEq, Eq, Debug, Hash, Display)]
pub enum Spec {
    #[display("{equal},{different}")]
    Fixed { equal: i32, different: i32 },
    #[display("{_0}")]
    Named(String),
}

impl FromStr for Spec {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::invalid_parameter("scoring", "empty scoring string").into());
        }

        let is_name = s.starts_with(|c: char| c.is_ascii_alphabetic())
            && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if is_name {
            return Ok(Spec::Named(s.to_owned()));
        }

        let pair = s
            .strip_prefix('[')
            .and_then(|x| x.strip_suffix(']'))
            .or_else(|| s.strip_prefix('(').and_then(|x| x.strip_suffix(')')))
            .unwrap_or(s);
        let members: Vec<&str> = pair.split(',').map(str::trim).collect();
        if members.len() != 2 {
            return Err(Error::invalid_parameter(
                "scoring",
                format!("expected a [match, mismatch] pair or a matrix name, got {s:?}"),
            )
            .into());
        }

        let parse = |member: &str| {
            member.parse::<i32>().map_err(|_| {
                Error::invalid_input_type(format!(
                    "scoring pair member {member:?} is not an integer"
                ))
            })
        };
        Ok(Spec::Fixed {
            equal: parse(members[0])?,
            different: parse(members[1])?,
        })
    }
}
