//! flat sequence -> tree

use tracing::trace_span;

use crate::error::{QTreeError, Result};
use crate::raster::check_dim;
use crate::QuadNode;

impl QuadNode {
    /// parses a preorder sequence that must hold exactly one tree
    pub fn parse(values: &[i32]) -> Result<QuadNode> {
        Self::parse_with_depth(values, QuadNode::MAX_DEPTH)
    }
    /// parses a preorder sequence for an image with side length `dim`
    ///
    /// A split is rejected once the region it describes is a single pixel.
    pub fn parse_for_dim(values: &[i32], dim: usize) -> Result<QuadNode> {
        check_dim(dim)?;
        Self::parse_with_depth(values, dim.ilog2())
    }
    fn parse_with_depth(values: &[i32], max_depth: u32) -> Result<QuadNode> {
        let _span = trace_span!("parse", len = values.len(), max_depth).entered();
        let mut reader = PreorderReader::new(values);
        let root = reader.read_node(max_depth)?;
        reader.expect_end()?;
        Ok(root)
    }

    /// parses one tree from the front of `values`, returning it and the number of values consumed
    pub fn parse_prefix(values: &[i32]) -> Result<(QuadNode, usize)> {
        let mut reader = PreorderReader::new(values);
        let root = reader.read_node(QuadNode::MAX_DEPTH)?;
        Ok((root, reader.at))
    }
}

struct PreorderReader<'src> {
    values: &'src [i32],
    at: usize,
}
impl<'src> PreorderReader<'src> {
    fn new(values: &'src [i32]) -> Self {
        Self { values, at: 0 }
    }

    /// `depth` is how many more splits may be nested below this node
    fn read_node(&mut self, depth: u32) -> Result<QuadNode> {
        let at = self.at;
        let value = self.consume().ok_or(QTreeError::Truncated { at })?;
        match value {
            QuadNode::SPLIT if depth == 0 => Err(QTreeError::TooDeep { at }),
            QuadNode::SPLIT => {
                let ul = self.read_node(depth - 1)?;
                let ur = self.read_node(depth - 1)?;
                let ll = self.read_node(depth - 1)?;
                let lr = self.read_node(depth - 1)?;
                Ok(QuadNode::new_split(ul, ur, ll, lr))
            }
            value => u8::try_from(value)
                .map(QuadNode::leaf)
                .map_err(|_| QTreeError::InvalidNode {
                    at,
                    value: value.into(),
                }),
        }
    }
    fn expect_end(&self) -> Result<()> {
        match self.values.len() - self.at {
            0 => Ok(()),
            remaining => Err(QTreeError::TrailingValues {
                at: self.at,
                remaining,
            }),
        }
    }

    fn consume(&mut self) -> Option<i32> {
        let value = self.values.get(self.at).copied()?;
        self.at += 1;
        Some(value)
    }
}
