//! Lossless quadtree compression of square grayscale images.
//!
//! A raster is split into quadrants until every region is uniform, and the resulting
//! tree is stored as its preorder sequence of node values.
//!
//! ```
//! use qtree::{QuadNode, Raster};
//!
//! let raster = Raster::from_rows(&[[5, 5], [5, 7]]).unwrap();
//! let root = QuadNode::compress(&raster);
//! assert_eq!(vec![-1, 5, 5, 5, 7], root.serialize());
//! assert_eq!(raster, root.reconstruct(2).unwrap());
//! ```

// lints
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod coord;
mod error;
mod node;
mod quad;
mod raster;
mod tree;
mod ops {
    pub(crate) mod lines;

    mod compress;
    mod compressed_format;
    mod count;
    mod get;
    mod parse;
    mod preorder;
    mod raw_format;
    mod reconstruct;
    mod test_format;

    pub use compressed_format::*;
    pub use count::*;
    pub use preorder::*;
    pub use test_format::*;
}

pub use crate::node::*;
pub use coord::*;
pub use error::*;
pub use ops::*;
pub use quad::*;
pub use raster::*;
pub use tree::*;
