//! raster -> tree

use tracing::{debug, trace_span};

use crate::{Coord, NodeCount, Quad, QuadNode, Raster};

impl QuadNode {
    /// builds the smallest tree describing the whole raster
    pub fn compress(raster: &Raster) -> QuadNode {
        let _span = trace_span!("compress", dim = raster.dim()).entered();
        let root = Self::compress_region(raster, Coord::ORIGIN, raster.dim());
        debug!(
            raw_size = raster.len(),
            compressed_size = root.node_count(),
            "compressed"
        );
        root
    }

    /// builds the tree for the `size` x `size` square at `start`
    ///
    /// `size` must be a power of 2 and the square must lie inside the raster.
    pub fn compress_region(raster: &Raster, start: Coord, size: usize) -> QuadNode {
        if size == 1 || raster.is_uniform(start, size) {
            QuadNode::leaf(raster[start])
        } else {
            let half = size / 2;
            QuadNode::split(Quad::from_fn(|q| {
                Self::compress_region(raster, start + q.offset(half), half)
            }))
        }
    }
}
