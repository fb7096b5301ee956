use derive_getters::Dissolve;
use eyre::{ensure, Result};

use alignkit_core_rs::Error;

use super::Score;

/// Linear gap cost: every gap symbol costs the same non-negative `penalty`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Dissolve)]
pub struct Linear<S: Score> {
    penalty: S,
}

impl<S: Score> Linear<S> {
    pub fn new(penalty: S) -> Result<Self> {
        ensure!(
            !penalty.is_negative(),
            Error::invalid_parameter("gap", format!("must be non-negative, got {penalty}"))
        );
        Ok(Self { penalty })
    }

    #[inline(always)]
    pub fn penalty(&self) -> S {
        self.penalty
    }

    /// Score after appending a single gap symbol.
    #[inline(always)]
    pub fn extend(&self, score: S) -> S {
        score - self.penalty
    }
}
