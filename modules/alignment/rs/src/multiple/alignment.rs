use std::fmt::{Display, Formatter};

use derive_getters::{Dissolve, Getters};

/// Equal-length gapped rows, one per input sequence (in input order), and the consensus they
/// were aligned to.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct MultipleAlignment {
    rows: Vec<Vec<u8>>,
    consensus: Vec<u8>,
}

impl MultipleAlignment {
    pub(crate) fn new(rows: Vec<Vec<u8>>, consensus: Vec<u8>) -> Self {
        debug_assert!(rows.iter().all(|x| x.len() == rows[0].len()));
        Self { rows, consensus }
    }

    /// Number of alignment columns.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |x| x.len())
    }

    /// The i-th alignment column, top to bottom. `None` if `ind` is not below [`Self::width`].
    pub fn column(&self, ind: usize) -> Option<Vec<u8>> {
        (ind < self.width()).then(|| self.rows.iter().map(|x| x[ind]).collect())
    }
}

impl Display for MultipleAlignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Multiple alignment:")?;
        for row in &self.rows {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        write!(f, "Consensus: {}", String::from_utf8_lossy(&self.consensus))
    }
}
