use ahash::{HashMap, HashMapExt};
use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};
use itertools::Itertools;

use alignkit_core_rs::Error;

/// A substitution table: `row symbol -> column symbol -> score`.
///
/// Guarantees:
/// - Every row holds exactly one score per column header.
/// - Column headers and row headers are unique single ASCII symbols.
#[derive(Clone, PartialEq, Eq, Debug, Getters, Dissolve)]
pub struct Table {
    columns: Vec<u8>,
    rows: Vec<u8>,
    scores: HashMap<u8, HashMap<u8, i32>>,
}

impl Table {
    pub fn new(columns: Vec<u8>, rows: Vec<(u8, Vec<i32>)>) -> Result<Self> {
        ensure!(
            !columns.is_empty(),
            Error::invalid_parameter("substitution matrix", "no column headers")
        );
        ensure!(
            !rows.is_empty(),
            Error::invalid_parameter("substitution matrix", "no rows")
        );
        if let Some(dup) = columns.iter().duplicates().next() {
            return Err(Error::invalid_parameter(
                "substitution matrix",
                format!("duplicated column header {:?}", *dup as char),
            )
            .into());
        }

        let mut scores = HashMap::with_capacity(rows.len());
        let mut headers = Vec::with_capacity(rows.len());
        for (symbol, values) in rows {
            ensure!(
                values.len() == columns.len(),
                Error::invalid_parameter(
                    "substitution matrix",
                    format!(
                        "row {:?} has {} scores, expected {}",
                        symbol as char,
                        values.len(),
                        columns.len()
                    )
                )
            );
            let row: HashMap<u8, i32> = columns.iter().copied().zip(values).collect();
            ensure!(
                scores.insert(symbol, row).is_none(),
                Error::invalid_parameter(
                    "substitution matrix",
                    format!("duplicated row header {:?}", symbol as char)
                )
            );
            headers.push(symbol);
        }

        Ok(Self {
            columns,
            rows: headers,
            scores,
        })
    }

    /// Score of the given pair, if the table has it.
    #[inline(always)]
    pub fn get(&self, row: u8, column: u8) -> Option<i32> {
        self.scores.get(&row).and_then(|x| x.get(&column)).copied()
    }

    /// Returns true if `score(a, b) == score(b, a)` for every pair present in both orders.
    pub fn is_symmetric(&self) -> bool {
        self.rows.iter().all(|&a| {
            self.columns.iter().all(|&b| match (self.get(a, b), self.get(b, a)) {
                (Some(x), Some(y)) => x == y,
                _ => true,
            })
        })
    }
}
