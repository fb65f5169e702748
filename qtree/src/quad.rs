//! Raw types to name indicies to what would otherwise be fixed length arrays

use std::fmt::Debug;
use std::ops::Index;

use crate::coord::Coord;

/// The four quadrants of a square region, in serialization order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    UL,
    UR,
    LL,
    LR,
}
impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Self::UL, Self::UR, Self::LL, Self::LR];

    pub fn iter_all() -> impl ExactSizeIterator<Item = Quadrant> {
        Self::ALL.into_iter()
    }

    pub fn is_upper(self) -> bool {
        matches!(self, Self::UL | Self::UR)
    }
    pub fn is_left(self) -> bool {
        matches!(self, Self::UL | Self::LL)
    }

    /// offset of this quadrant's top-left cell inside a region with side `2 * half`
    pub fn offset(self, half: usize) -> Coord {
        Coord {
            row: if self.is_upper() { 0 } else { half },
            col: if self.is_left() { 0 } else { half },
        }
    }

    /// the quadrant of a region with side `2 * half` that `pos` (relative to the region) falls in
    pub fn from_coord(pos: Coord, half: usize) -> Self {
        match (pos.row < half, pos.col < half) {
            (true, true) => Self::UL,
            (true, false) => Self::UR,
            (false, true) => Self::LL,
            (false, false) => Self::LR,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Quad<T> {
    pub ul: T,
    pub ur: T,
    pub ll: T,
    pub lr: T,
}
impl<T> Quad<T> {
    /// calls `f` once per quadrant in `UL, UR, LL, LR` order
    pub fn from_fn(mut f: impl FnMut(Quadrant) -> T) -> Self {
        Quad {
            ul: f(Quadrant::UL),
            ur: f(Quadrant::UR),
            ll: f(Quadrant::LL),
            lr: f(Quadrant::LR),
        }
    }
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        [&self.ul, &self.ur, &self.ll, &self.lr].into_iter()
    }
    pub fn iter_indexed(&self) -> impl Iterator<Item = (Quadrant, &T)> {
        Quadrant::iter_all().zip(self.iter())
    }
}
impl<T> IntoIterator for Quad<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;
    fn into_iter(self) -> Self::IntoIter {
        [self.ul, self.ur, self.ll, self.lr].into_iter()
    }
}
impl<T> Index<Quadrant> for Quad<T> {
    type Output = T;
    fn index(&self, index: Quadrant) -> &Self::Output {
        match index {
            Quadrant::UL => &self.ul,
            Quadrant::UR => &self.ur,
            Quadrant::LL => &self.ll,
            Quadrant::LR => &self.lr,
        }
    }
}
