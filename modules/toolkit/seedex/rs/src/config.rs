use derive_getters::Dissolve;
use derive_more::Constructor;

use alignkit_core_rs::Interrupt;

#[derive(Clone, Eq, PartialEq, Debug, Constructor, Dissolve)]
pub struct Config {
    /// Length of the exact seed words, must be within `[2, len(query)]`
    pub word_size: usize,
    pub interrupt: Option<Interrupt>,
}

impl Config {
    pub fn with_word_size(word_size: usize) -> Self {
        Self {
            word_size,
            interrupt: None,
        }
    }
}
