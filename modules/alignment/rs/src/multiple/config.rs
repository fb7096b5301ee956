use derive_getters::Dissolve;
use derive_more::Constructor;

use alignkit_core_rs::alphabet::Alphabet;
use alignkit_core_rs::Interrupt;

use crate::scoring::symbols::Equality;
use crate::scoring::Score;

#[derive(Clone, Eq, PartialEq, Debug, Constructor, Dissolve)]
pub struct Config<S: Score> {
    /// Match/mismatch scores of the pairwise alignments
    pub scoring: Equality<S>,
    /// Non-negative cost of a single gap symbol
    pub gap: S,
    /// Every input sequence is validated against the alphabet
    pub alphabet: Alphabet,
    pub interrupt: Option<Interrupt>,
}

impl<S: Score> Default for Config<S> {
    fn default() -> Self {
        let two = S::one() + S::one();
        Self {
            scoring: Equality::new(two, S::zero()),
            gap: two * two,
            alphabet: Alphabet::Dna,
            interrupt: None,
        }
    }
}
