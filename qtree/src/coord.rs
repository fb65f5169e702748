use std::fmt::Debug;
use std::ops::Add;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
/// row increases to the south
/// col increases to the east
pub struct Coord {
    pub row: usize,
    pub col: usize,
}
impl Coord {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
    /// row-major index into a square grid with side length `dim`
    pub(crate) fn linear(self, dim: usize) -> usize {
        self.row * dim + self.col
    }
}
impl Add for Coord {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            row: self.row + rhs.row,
            col: self.col + rhs.col,
        }
    }
}
impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
