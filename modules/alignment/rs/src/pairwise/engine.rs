use eyre::{ensure, Result};
use num::Zero;

use alignkit_core_rs::alphabet::Alphabet;
use alignkit_core_rs::{Error, Interrupt};

use crate::scoring::gaps::Linear;
use crate::scoring::symbols::Scorer;

use super::alignment::Alignment;
use super::config::{Config, Mode};
use super::dp::{Direction, Matrices, Trace};
use super::traceback;

/// Needleman-Wunsch (global) and Smith-Waterman (local) aligner with a linear gap cost.
///
/// Tied directions are resolved in the [`Direction::PREFERENCE`] order: diagonal, then up
/// (gap in the second sequence), then left (gap in the first sequence).
#[derive(Clone, Debug)]
pub struct Aligner<P: Scorer> {
    scorer: P,
    mode: Mode,
    gaps: Linear<P::Score>,
    alphabet: Option<Alphabet>,
    max_paths: usize,
    interrupt: Option<Interrupt>,
}

impl<P: Scorer> Aligner<P> {
    pub fn new(scorer: P, config: Config<P::Score>) -> Result<Self> {
        let (mode, gap, alphabet, max_paths, interrupt) = config.dissolve();
        let gaps = Linear::new(gap)?;
        ensure!(
            max_paths >= 1,
            Error::invalid_parameter("max_paths", "must be at least 1")
        );

        Ok(Self {
            scorer,
            mode,
            gaps,
            alphabet,
            max_paths,
            interrupt,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn gap(&self) -> P::Score {
        self.gaps.penalty()
    }

    pub fn scorer(&self) -> &P {
        &self.scorer
    }

    fn validate(&self, seq1: &[u8], seq2: &[u8]) -> Result<()> {
        if let Some(alphabet) = &self.alphabet {
            alphabet.validate(seq1)?;
            alphabet.validate(seq2)?;
        }
        Ok(())
    }

    fn fill(&self, seq1: &[u8], seq2: &[u8]) -> Result<Matrices<P::Score>> {
        let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
        log::debug!("Filling {} DP matrices: {rows}x{cols}", self.mode);

        let zero = P::Score::zero();
        let mut matrices = Matrices::new(rows, cols);

        if self.mode == Mode::Global {
            let up = Trace::of(&[Direction::Up]);
            for row in 1..rows {
                let score = self.gaps.extend(matrices.score(row - 1, 0));
                matrices.set(row, 0, score, up);
            }

            let left = Trace::of(&[Direction::Left]);
            for col in 1..cols {
                let score = self.gaps.extend(matrices.score(0, col - 1));
                matrices.set(0, col, score, left);
            }
        }

        for row in 1..rows {
            Interrupt::poll(self.interrupt.as_ref())?;

            let s1 = seq1[row - 1];
            for col in 1..cols {
                let diagonal =
                    matrices.score(row - 1, col - 1) + self.scorer.score(s1, seq2[col - 1])?;
                let up = self.gaps.extend(matrices.score(row - 1, col));
                let left = self.gaps.extend(matrices.score(row, col - 1));
                let best = diagonal.max(up).max(left);

                if self.mode == Mode::Local && best <= zero {
                    matrices.set(row, col, zero, Trace::STOP);
                    continue;
                }

                let mut trace = Trace::STOP;
                for (direction, score) in [
                    (Direction::Diagonal, diagonal),
                    (Direction::Up, up),
                    (Direction::Left, left),
                ] {
                    if score == best {
                        trace.insert(direction);
                    }
                }
                matrices.set(row, col, best, trace);
            }
        }
        Ok(matrices)
    }

    /// The optimal cell: bottom-right for global alignment, the first row-major maximum for local.
    fn optimum(&self, matrices: &Matrices<P::Score>) -> (usize, usize, P::Score) {
        match self.mode {
            Mode::Global => {
                let (row, col) = matrices.last();
                (row, col, matrices.score(row, col))
            }
            Mode::Local => {
                let best = matrices.argmax();
                log::debug!(
                    "Local maximum {} at ({}, {})",
                    best.2,
                    best.0,
                    best.1
                );
                best
            }
        }
    }

    /// Filled score and trace matrices.
    pub fn matrices(&self, seq1: &[u8], seq2: &[u8]) -> Result<Matrices<P::Score>> {
        self.validate(seq1, seq2)?;
        self.fill(seq1, seq2)
    }

    /// Optimal alignment score.
    pub fn score(&self, seq1: &[u8], seq2: &[u8]) -> Result<P::Score> {
        let matrices = self.matrices(seq1, seq2)?;
        Ok(self.optimum(&matrices).2)
    }

    /// Single optimal alignment: the traceback follows the preferred direction at every cell.
    pub fn align(&self, seq1: &[u8], seq2: &[u8]) -> Result<Alignment<P::Score>> {
        let matrices = self.matrices(seq1, seq2)?;
        let (row, col, score) = self.optimum(&matrices);
        if self.mode == Mode::Local && score <= P::Score::zero() {
            return Ok(Alignment::empty(P::Score::zero()));
        }
        Ok(traceback::best(&matrices, seq1, seq2, (row, col)))
    }

    /// All optimal alignments (up to the configured `max_paths`). The first one is always
    /// identical to [`Aligner::align`].
    pub fn align_all(&self, seq1: &[u8], seq2: &[u8]) -> Result<Vec<Alignment<P::Score>>> {
        let matrices = self.matrices(seq1, seq2)?;
        let (row, col, score) = self.optimum(&matrices);

        let starts = match self.mode {
            Mode::Global => vec![(row, col)],
            Mode::Local => {
                if score <= P::Score::zero() {
                    return Ok(vec![Alignment::empty(P::Score::zero())]);
                }
                matrices.cells_with(score)
            }
        };

        let mut exhaustive = traceback::Exhaustive::new(&matrices, self.max_paths);
        let alignments = exhaustive.alignments(&starts, seq1, seq2);
        if exhaustive.truncated() {
            log::warn!(
                "Exhaustive traceback stopped after {} alignments, more optimal alignments exist",
                self.max_paths
            );
        }
        Ok(alignments)
    }
}
