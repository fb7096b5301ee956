use std::rc::Rc;

use ahash::{HashMap, HashMapExt};

use crate::scoring::Score;

use super::alignment::{Alignment, GAP};
use super::dp::{Direction, Matrices};

type Cell = (usize, usize);

/// Collects one alignment column per traceback move, backwards.
struct Collector<'a> {
    seq1: &'a [u8],
    seq2: &'a [u8],
    aligned1: Vec<u8>,
    aligned2: Vec<u8>,
}

impl<'a> Collector<'a> {
    fn new(seq1: &'a [u8], seq2: &'a [u8]) -> Self {
        let capacity = seq1.len() + seq2.len();
        Self {
            seq1,
            seq2,
            aligned1: Vec::with_capacity(capacity),
            aligned2: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    fn push(&mut self, (row, col): Cell, direction: Direction) -> Cell {
        let (s1, s2) = match direction {
            Direction::Diagonal => (self.seq1[row - 1], self.seq2[col - 1]),
            Direction::Up => (self.seq1[row - 1], GAP),
            Direction::Left => (GAP, self.seq2[col - 1]),
        };
        self.aligned1.push(s1);
        self.aligned2.push(s2);
        direction.step(row, col)
    }

    fn finish<S: Score>(self, score: S, stop: Cell) -> Alignment<S> {
        Alignment::from_traceback(score, self.aligned1, self.aligned2, stop)
    }
}

/// Follows the preferred direction of every cell from `start` until a cell with an empty trace.
pub fn best<S: Score>(
    matrices: &Matrices<S>,
    seq1: &[u8],
    seq2: &[u8],
    start: Cell,
) -> Alignment<S> {
    let score = matrices.score(start.0, start.1);
    let mut collector = Collector::new(seq1, seq2);
    let mut cell = start;
    while let Some(direction) = matrices.trace(cell.0, cell.1).first() {
        cell = collector.push(cell, direction);
    }
    collector.finish(score, cell)
}

/// A shared tail of a traceback path: the move made from a cell and the rest of the path.
struct Link {
    direction: Direction,
    tail: Path,
}

/// `None` is the empty path of a cell with an empty trace.
type Path = Option<Rc<Link>>;

/// Enumerates traceback paths in the direction preference order.
///
/// Every reachable cell stores its own (possibly truncated) list of paths, which are shared by all
/// cells leading to it. Cells are resolved in post-order with an explicit stack.
pub struct Exhaustive<'a, S: Score> {
    matrices: &'a Matrices<S>,
    max_paths: usize,
    memo: HashMap<Cell, Vec<Path>>,
    truncated: bool,
}

impl<'a, S: Score> Exhaustive<'a, S> {
    pub fn new(matrices: &'a Matrices<S>, max_paths: usize) -> Self {
        Self {
            matrices,
            max_paths,
            memo: HashMap::new(),
            truncated: false,
        }
    }

    /// True if some cell had more paths than `max_paths`.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    fn resolve(&mut self, start: Cell) {
        let mut stack = vec![(start, false)];
        while let Some((cell, expanded)) = stack.pop() {
            if self.memo.contains_key(&cell) {
                continue;
            }

            let trace = self.matrices.trace(cell.0, cell.1);
            if trace.is_empty() {
                self.memo.insert(cell, vec![None]);
            } else if expanded {
                let mut paths = Vec::new();
                'directions: for direction in trace.iter() {
                    let next = direction.step(cell.0, cell.1);
                    for tail in &self.memo[&next] {
                        if paths.len() == self.max_paths {
                            self.truncated = true;
                            break 'directions;
                        }
                        paths.push(Some(Rc::new(Link {
                            direction,
                            tail: tail.clone(),
                        })));
                    }
                }
                self.memo.insert(cell, paths);
            } else {
                stack.push((cell, true));
                // Reversed, so that the preferred direction is resolved first
                for direction in trace.iter().collect::<Vec<_>>().into_iter().rev() {
                    let next = direction.step(cell.0, cell.1);
                    if !self.memo.contains_key(&next) {
                        stack.push((next, false));
                    }
                }
            }
        }
    }

    /// All alignments starting at the given cells (in the given order), at most `max_paths` in total.
    pub fn alignments(&mut self, starts: &[Cell], seq1: &[u8], seq2: &[u8]) -> Vec<Alignment<S>> {
        let mut result = Vec::new();
        for &start in starts {
            self.resolve(start);
            let score = self.matrices.score(start.0, start.1);

            for path in &self.memo[&start] {
                if result.len() == self.max_paths {
                    self.truncated = true;
                    return result;
                }

                let mut collector = Collector::new(seq1, seq2);
                let mut cell = start;
                let mut link = path.as_deref();
                while let Some(x) = link {
                    cell = collector.push(cell, x.direction);
                    link = x.tail.as_deref();
                }
                result.push(collector.finish(score, cell));
            }
        }
        result
    }
}
