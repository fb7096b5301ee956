use derive_more::{Display, Error};

use crate::alphabet::Alphabet;

/// Typed failures shared by all alignkit crates.
///
/// Functions return `eyre::Result` and wrap these values into the report, so callers can
/// recover the exact failure with `report.downcast_ref::<Error>()`.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
pub enum Error {
    /// A value of the wrong kind was supplied, e.g. a non-integer member of a scoring pair.
    #[display("invalid input type: {details}")]
    InvalidInputType { details: String },

    /// A sequence symbol is outside of the declared molecule alphabet.
    #[display("symbol {symbol:?} at position {position} is not a valid {alphabet} symbol")]
    InvalidAlphabet {
        symbol: char,
        position: usize,
        alphabet: Alphabet,
    },

    /// A parameter is out of its allowed range or is malformed.
    #[display("invalid parameter '{name}': {details}")]
    InvalidParameter { name: String, details: String },

    /// The substitution table has no entry for the requested pair of symbols.
    #[display("substitution table has no entry for the pair ({first:?}, {second:?})")]
    LookupMiss { first: char, second: char },

    /// External configuration (e.g. a named substitution matrix) can't be resolved.
    #[display("configuration error: {details}")]
    Configuration { details: String },

    /// The computation was stopped through an [`crate::Interrupt`] flag.
    #[display("computation was interrupted")]
    Interrupted,
}

impl Error {
    pub fn invalid_parameter(name: impl Into<String>, details: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            details: details.into(),
        }
    }

    pub fn invalid_input_type(details: impl Into<String>) -> Self {
        Error::InvalidInputType {
            details: details.into(),
        }
    }

    pub fn configuration(details: impl Into<String>) -> Self {
        Error::Configuration {
            details: details.into(),
        }
    }

    pub fn lookup_miss(first: u8, second: u8) -> Self {
        Error::LookupMiss {
            first: first as char,
            second: second as char,
        }
    }

    /// Extracts the typed error from an eyre report, if there is one.
    pub fn of(report: &eyre::Report) -> Option<&Error> {
        report.downcast_ref::<Error>()
    }
}
