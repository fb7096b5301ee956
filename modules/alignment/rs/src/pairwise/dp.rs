use derive_getters::{Dissolve, Getters};

use crate::scoring::Score;

/// Row-major dense 2D grid.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy> Grid<T> {
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    /// Iterates over `(row, col, value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(ind, x)| (ind / cols, ind % cols, *x))
    }
}

/// Traceback move from a DP cell.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Direction {
    /// `(i-1, j-1)`: both symbols are aligned
    Diagonal,
    /// `(i-1, j)`: the first sequence symbol is aligned to a gap
    Up,
    /// `(i, j-1)`: the second sequence symbol is aligned to a gap
    Left,
}

impl Direction {
    /// Order in which tied directions are followed during the traceback.
    pub const PREFERENCE: [Direction; 3] = [Direction::Diagonal, Direction::Up, Direction::Left];

    #[inline(always)]
    const fn bit(&self) -> u8 {
        match self {
            Direction::Diagonal => 0b001,
            Direction::Up => 0b010,
            Direction::Left => 0b100,
        }
    }

    /// Cell reached by moving from `(row, col)` in this direction.
    #[inline(always)]
    pub fn step(&self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Direction::Diagonal => (row - 1, col - 1),
            Direction::Up => (row - 1, col),
            Direction::Left => (row, col - 1),
        }
    }
}

/// Set of directions that attain the cell score. An empty set marks the end of a traceback.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub struct Trace(u8);

impl Trace {
    pub const STOP: Trace = Trace(0);

    pub fn of(directions: &[Direction]) -> Self {
        let mut trace = Trace::STOP;
        for d in directions {
            trace.insert(*d);
        }
        trace
    }

    #[inline(always)]
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    #[inline(always)]
    pub fn contains(&self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The preferred direction, if any.
    #[inline(always)]
    pub fn first(&self) -> Option<Direction> {
        self.iter().next()
    }

    /// Directions of the set in the traceback preference order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> {
        let trace = *self;
        Direction::PREFERENCE
            .into_iter()
            .filter(move |x| trace.contains(*x))
    }
}

/// Filled DP matrices, `(len(seq1) + 1) x (len(seq2) + 1)`.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Matrices<S: Score> {
    scores: Grid<S>,
    traces: Grid<Trace>,
}

impl<S: Score> Matrices<S> {
    pub(super) fn new(rows: usize, cols: usize) -> Self {
        Self {
            scores: Grid::new(rows, cols, S::zero()),
            traces: Grid::new(rows, cols, Trace::STOP),
        }
    }

    pub(super) fn set(&mut self, row: usize, col: usize, score: S, trace: Trace) {
        self.scores.set(row, col, score);
        self.traces.set(row, col, trace);
    }

    #[inline(always)]
    pub fn score(&self, row: usize, col: usize) -> S {
        self.scores.get(row, col)
    }

    #[inline(always)]
    pub fn trace(&self, row: usize, col: usize) -> Trace {
        self.traces.get(row, col)
    }

    /// Bottom-right cell, where the global traceback starts.
    pub fn last(&self) -> (usize, usize) {
        (self.scores.rows - 1, self.scores.cols - 1)
    }

    /// The first maximum in row-major order. Starts from `(0, 0)` and moves only on a strictly
    /// greater score.
    pub fn argmax(&self) -> (usize, usize, S) {
        let mut best = (0, 0, self.score(0, 0));
        for (row, col, score) in self.scores.cells() {
            if score > best.2 {
                best = (row, col, score);
            }
        }
        best
    }

    /// All cells holding the given score, in row-major order.
    pub fn cells_with(&self, score: S) -> Vec<(usize, usize)> {
        self.scores
            .cells()
            .filter(|x| x.2 == score)
            .map(|(row, col, _)| (row, col))
            .collect()
    }
}
