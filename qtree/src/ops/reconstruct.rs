//! tree -> raster

use tracing::trace_span;

use crate::error::{QTreeError, Result};
use crate::{Coord, QuadNode, Raster};

impl QuadNode {
    /// rebuilds a `dim` x `dim` raster from this tree
    ///
    /// Fails if `dim` is not a power of 2 or the tree splits below a single pixel.
    pub fn reconstruct(&self, dim: usize) -> Result<Raster> {
        let _span = trace_span!("reconstruct", dim).entered();
        let mut raster = Raster::new(dim)?;
        if self.depth() > dim.ilog2() {
            return Err(QTreeError::TooDeep { at: 0 });
        }
        self.reconstruct_into(&mut raster, Coord::ORIGIN, dim);
        Ok(raster)
    }

    /// fills the `size` x `size` square at `start` from this tree
    ///
    /// The tree must be no deeper than `log2(size)`.
    pub fn reconstruct_into(&self, raster: &mut Raster, start: Coord, size: usize) {
        match self {
            QuadNode::Leaf(value) => raster.fill(start, size, *value),
            QuadNode::Split(children) => {
                let half = size / 2;
                for (q, child) in children.iter_indexed() {
                    child.reconstruct_into(raster, start + q.offset(half), half);
                }
            }
        }
    }
}
