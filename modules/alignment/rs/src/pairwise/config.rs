#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::Dissolve;
use derive_more::{Constructor, Display};

use alignkit_core_rs::alphabet::Alphabet;
use alignkit_core_rs::Interrupt;

use crate::scoring::Score;

#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default, Display)]
pub enum Mode {
    /// Needleman-Wunsch: end-to-end alignment of both sequences
    #[default]
    #[display("global")]
    Global,
    /// Smith-Waterman: the best scoring pair of substrings
    #[display("local")]
    Local,
}

#[derive(Clone, Eq, PartialEq, Debug, Constructor, Dissolve)]
pub struct Config<S: Score> {
    pub mode: Mode,
    /// Non-negative cost of a single gap symbol
    pub gap: S,
    /// If set, both sequences are validated against the alphabet before alignment
    pub alphabet: Option<Alphabet>,
    /// Upper bound on the number of alignments reported by the exhaustive traceback
    pub max_paths: usize,
    pub interrupt: Option<Interrupt>,
}

impl<S: Score> Default for Config<S> {
    fn default() -> Self {
        Self {
            mode: Mode::Global,
            gap: (S::one() + S::one()).pow(2),
            alphabet: None,
            max_paths: 1024,
            interrupt: None,
        }
    }
}

impl<S: Score> Config<S> {
    pub fn global(gap: S) -> Self {
        Self {
            mode: Mode::Global,
            gap,
            ..Default::default()
        }
    }

    pub fn local(gap: S) -> Self {
        Self {
            mode: Mode::Local,
            gap,
            ..Default::default()
        }
    }
}
