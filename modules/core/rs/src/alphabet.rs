#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_more::Display;
use eyre::Result;

use crate::error::Error;

const DNA: &[u8] = b"ACGT";
const PROTEIN: &[u8] = b"ACDEFGHIKLMNPQRSTVWYBZX";

/// Molecule alphabet of an already normalized (uppercase) sequence.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Display)]
pub enum Alphabet {
    /// Nucleotides: A, C, G, T
    #[display("DNA")]
    Dna,
    /// The 20 standard amino acids plus the B, Z and X ambiguity codes
    #[display("protein")]
    Protein,
}

impl Alphabet {
    /// All symbols of the alphabet in a fixed order.
    pub fn symbols(&self) -> &'static [u8] {
        match self {
            Alphabet::Dna => DNA,
            Alphabet::Protein => PROTEIN,
        }
    }

    #[inline(always)]
    pub fn contains(&self, symbol: u8) -> bool {
        match self {
            Alphabet::Dna => matches!(symbol, b'A' | b'C' | b'G' | b'T'),
            Alphabet::Protein => PROTEIN.contains(&symbol),
        }
    }

    /// Ensures that every symbol of the sequence belongs to the alphabet.
    /// The error points to the first offending symbol.
    pub fn validate(&self, seq: &[u8]) -> Result<()> {
        match seq.iter().position(|x| !self.contains(*x)) {
            None => Ok(()),
            Some(position) => Err(Error::InvalidAlphabet {
                symbol: seq[position] as char,
                position,
                alphabet: *self,
            }
            .into()),
        }
    }
}
