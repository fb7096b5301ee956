use eyre::{ensure, Result, WrapErr};
use itertools::Itertools;

use alignkit_core_rs::alphabet::Alphabet;
use alignkit_core_rs::{Error, Interrupt};

use crate::pairwise::alignment::{Alignment, GAP};
use crate::pairwise::{self, Aligner, Mode};
use crate::scoring::symbols::Equality;
use crate::scoring::Score;

use super::alignment::MultipleAlignment;
use super::config::Config;
use super::consensus::consensus;

/// Progressive multiple alignment: the inputs are folded one by one into a running consensus,
/// then every input is re-aligned to the final consensus.
#[derive(Clone, Debug)]
pub struct Progressive<S: Score> {
    aligner: Aligner<Equality<S>>,
    alphabet: Alphabet,
    interrupt: Option<Interrupt>,
}

impl<S: Score> Progressive<S> {
    pub fn new(config: Config<S>) -> Result<Self> {
        let (scoring, gap, alphabet, interrupt) = config.dissolve();
        let aligner = Aligner::new(
            scoring,
            pairwise::Config {
                mode: Mode::Global,
                gap,
                alphabet: None,
                max_paths: 1,
                interrupt: interrupt.clone(),
            },
        )?;
        Ok(Self {
            aligner,
            alphabet,
            interrupt,
        })
    }

    /// Aligns the consensus with the next sequence and returns the new consensus together with
    /// the gapped row of the sequence.
    pub fn fold(&self, consensus_so_far: &[u8], next: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
        let (_, aligned1, aligned2, _, _) = self.aligner.align(consensus_so_far, next)?.dissolve();
        Ok((consensus(&aligned1, &aligned2), aligned2))
    }

    pub fn align(&self, seqs: &[impl AsRef<[u8]>]) -> Result<MultipleAlignment> {
        ensure!(
            seqs.len() >= 2,
            Error::invalid_parameter(
                "seqs",
                format!("at least 2 sequences are required, got {}", seqs.len())
            )
        );
        for (ind, seq) in seqs.iter().enumerate() {
            self.alphabet
                .validate(seq.as_ref())
                .wrap_err_with(|| format!("Invalid sequence #{ind}"))?;
        }

        let first = self.aligner.align(seqs[0].as_ref(), seqs[1].as_ref())?;
        let mut current = consensus(first.aligned1(), first.aligned2());
        for (ind, next) in seqs.iter().enumerate().skip(2) {
            Interrupt::poll(self.interrupt.as_ref())?;
            log::debug!(
                "Folding sequence #{ind} into the consensus of length {}",
                current.len()
            );
            (current, _) = self.fold(&current, next.as_ref())?;
        }

        let projections = seqs
            .iter()
            .map(|seq| self.aligner.align(&current, seq.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let rows = merge(current.len(), &projections);
        Ok(MultipleAlignment::new(rows, current))
    }
}

/// Symbols of the input placed before each consensus position (the last slot holds the trailing
/// ones) and the input symbol aligned to each consensus position.
struct Projection {
    insertions: Vec<Vec<u8>>,
    columns: Vec<u8>,
}

impl Projection {
    fn new<S: Score>(length: usize, alignment: &Alignment<S>) -> Self {
        let mut insertions = vec![Vec::new(); length + 1];
        let mut columns = Vec::with_capacity(length);
        for (&c, &s) in alignment.aligned1().iter().zip(alignment.aligned2()) {
            if c == GAP {
                insertions[columns.len()].push(s);
            } else {
                columns.push(s);
            }
        }
        debug_assert_eq!(columns.len(), length);
        Self {
            insertions,
            columns,
        }
    }
}

/// Lays out the consensus projections as equal-length rows. Insertions at the same consensus
/// position are stacked into shared columns, and rows without them are padded with gaps.
fn merge<S: Score>(length: usize, alignments: &[Alignment<S>]) -> Vec<Vec<u8>> {
    let projections = alignments
        .iter()
        .map(|x| Projection::new(length, x))
        .collect_vec();

    let widths = (0..=length)
        .map(|slot| {
            projections
                .iter()
                .map(|x| x.insertions[slot].len())
                .max()
                .unwrap_or(0)
        })
        .collect_vec();
    let total = length + widths.iter().sum::<usize>();

    projections
        .into_iter()
        .map(|projection| {
            let mut row = Vec::with_capacity(total);
            for (slot, width) in widths.iter().enumerate() {
                let inserted = &projection.insertions[slot];
                row.extend_from_slice(inserted);
                row.resize(row.len() + width - inserted.len(), GAP);
                if slot < length {
                    row.push(projection.columns[slot]);
                }
            }
            row
        })
        .collect()
}
