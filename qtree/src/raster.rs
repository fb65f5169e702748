use std::ops::Index;

use crate::error::{QTreeError, Result};
use crate::Coord;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// A square grid of grayscale samples
///
/// # implementation details
/// stored in row-major order, the side length is always a non-zero power of 2
pub struct Raster {
    dim: usize,
    cells: Vec<u8>,
}
impl Raster {
    /// largest side length accepted, a 1 GiB raster
    pub const MAX_DIM: usize = 1 << 15;

    /// a `dim` x `dim` raster of zeros
    pub fn new(dim: usize) -> Result<Self> {
        Self::filled(dim, 0)
    }
    pub fn filled(dim: usize, value: u8) -> Result<Self> {
        check_dim(dim)?;
        let len = dim * dim;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| QTreeError::TooLarge { dim })?;
        cells.resize(len, value);
        Ok(Self { dim, cells })
    }
    /// constructs a raster from row-major samples
    ///
    /// The number of samples must be the square of a power of 2.
    pub fn from_cells(cells: Vec<u8>) -> Result<Self> {
        let len = cells.len();
        let dim = len.isqrt();
        if len != 0 && dim * dim != len {
            return Err(QTreeError::NotSquare { len });
        }
        check_dim(dim)?;
        Ok(Self { dim, cells })
    }
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let len = rows.iter().map(|row| row.as_ref().len()).sum();
        if rows.iter().any(|row| row.as_ref().len() != rows.len()) {
            return Err(QTreeError::NotSquare { len });
        }
        Self::from_cells(rows.iter().flat_map(|row| row.as_ref()).copied().collect())
    }

    pub fn dim(&self) -> usize {
        self.dim
    }
    /// number of samples, `dim * dim`
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn get(&self, pos: Coord) -> Option<u8> {
        if pos.row < self.dim && pos.col < self.dim {
            Some(self.cells[pos.linear(self.dim)])
        } else {
            None
        }
    }
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> {
        self.cells.chunks_exact(self.dim)
    }

    /// true if every sample of the `size` x `size` square at `start` equals the one at `start`
    pub fn is_uniform(&self, start: Coord, size: usize) -> bool {
        let first = self[start];
        self.region_rows(start, size)
            .all(|row| row.iter().all(|&value| value == first))
    }
    /// sets every sample of the `size` x `size` square at `start`
    pub fn fill(&mut self, start: Coord, size: usize, value: u8) {
        let dim = self.dim;
        self.cells[start.linear(dim)..]
            .chunks_mut(dim)
            .take(size)
            .for_each(|row| row[..size].fill(value));
    }
    fn region_rows(&self, start: Coord, size: usize) -> impl Iterator<Item = &[u8]> {
        // each chunk starts at `start.col` of the next row
        self.cells[start.linear(self.dim)..]
            .chunks(self.dim)
            .take(size)
            .map(move |row| &row[..size])
    }
}
impl Index<Coord> for Raster {
    type Output = u8;
    fn index(&self, index: Coord) -> &Self::Output {
        assert!(index.row < self.dim && index.col < self.dim, "{index:?} out of bounds");
        &self.cells[index.linear(self.dim)]
    }
}

pub(crate) fn check_dim(dim: usize) -> Result<()> {
    if dim == 0 {
        Err(QTreeError::EmptyImage)
    } else if !dim.is_power_of_two() {
        Err(QTreeError::NotPowerOfTwo { dim })
    } else if dim > Raster::MAX_DIM {
        Err(QTreeError::TooLarge { dim })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::{test_raster, Coord, QTreeError, Raster};

    #[test]
    fn from_cells() {
        let raster = Raster::from_cells(vec![1, 2, 3, 4]).expect("2x2");
        assert_eq!(2, raster.dim());
        assert_eq!(3, raster[Coord::new(1, 0)]);
        assert_eq!(Some(2), raster.get(Coord::new(0, 1)));
        assert_eq!(None, raster.get(Coord::new(0, 2)));
        assert_eq!(vec![&[1, 2][..], &[3, 4][..]], raster.rows().collect::<Vec<_>>());
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(matches!(
            Raster::from_cells(vec![]),
            Err(QTreeError::EmptyImage)
        ));
        assert!(matches!(
            Raster::from_cells(vec![0; 5]),
            Err(QTreeError::NotSquare { len: 5 })
        ));
        assert!(matches!(
            Raster::from_cells(vec![0; 9]),
            Err(QTreeError::NotPowerOfTwo { dim: 3 })
        ));
        assert!(matches!(
            Raster::from_rows(&[vec![1, 2], vec![3]]),
            Err(QTreeError::NotSquare { len: 3 })
        ));
        assert!(matches!(
            Raster::new(6),
            Err(QTreeError::NotPowerOfTwo { dim: 6 })
        ));
    }

    #[test]
    fn rejects_oversized() {
        assert!(Raster::new(Raster::MAX_DIM / 64).is_ok());
        assert!(matches!(
            Raster::new(Raster::MAX_DIM * 2),
            Err(QTreeError::TooLarge { .. })
        ));
        assert!(matches!(
            Raster::filled(1 << 31, 7),
            Err(QTreeError::TooLarge { dim }) if dim == 1 << 31
        ));
    }

    #[test]
    fn uniform_regions() {
        let raster = test_raster! {"
            1 1 2 2
            1 1 2 3
            4 4 5 5
            4 4 5 5
        "};
        assert!(raster.is_uniform(Coord::new(0, 0), 2));
        assert!(!raster.is_uniform(Coord::new(0, 2), 2));
        assert!(raster.is_uniform(Coord::new(2, 0), 2));
        assert!(raster.is_uniform(Coord::new(2, 2), 2));
        assert!(raster.is_uniform(Coord::new(1, 3), 1));
        assert!(!raster.is_uniform(Coord::ORIGIN, 4));
    }

    #[test]
    fn fill_region() {
        let mut raster = Raster::new(4).expect("4x4");
        raster.fill(Coord::new(2, 2), 2, 9);
        raster.fill(Coord::new(0, 1), 1, 7);
        let expected = test_raster! {"
            0 7 0 0
            0 0 0 0
            0 0 9 9
            0 0 9 9
        "};
        assert_eq!(expected, raster);
    }
}
