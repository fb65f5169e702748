//! the compressed image format
//!
//! ```text
//! 4     <- number of pixels in the image, the side length is its square root
//! -1    <- preorder node values, one per line
//! 5
//! 5
//! 5
//! 7
//! ```

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::{QTreeError, Result};
use crate::ops::lines::IntLines;
use crate::raster::check_dim;
use crate::QuadNode;

/// A parsed compressed file
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Compressed {
    /// side length of the image
    pub dim: usize,
    pub root: QuadNode,
}

impl QuadNode {
    /// writes the `raw_size` header followed by every node value in preorder
    pub fn write_compressed(&self, raw_size: usize, mut write: impl Write) -> io::Result<()> {
        writeln!(write, "{raw_size}")?;
        for value in self.preorder() {
            writeln!(write, "{value}")?;
        }
        Ok(())
    }
    pub fn write_compressed_to_string(&self, raw_size: usize) -> String {
        let mut out = Vec::new();
        self.write_compressed(raw_size, &mut out)
            .expect("writing to a Vec can't fail");
        String::from_utf8(out).expect("valid string")
    }
}

impl Compressed {
    pub fn read_from(read: impl BufRead) -> Result<Self> {
        let mut lines = IntLines::new(read);
        let (line, header) = lines.next().ok_or(QTreeError::MissingHeader)??;
        let raw_size =
            usize::try_from(header).map_err(|_| QTreeError::Value { line, value: header })?;
        let dim = raw_size.isqrt();
        check_dim(dim)?;

        let values = lines
            .map(|item| {
                let (line, value) = item?;
                i32::try_from(value).map_err(|_| QTreeError::Value { line, value })
            })
            .collect::<Result<Vec<i32>>>()?;
        debug!(raw_size, dim, nodes = values.len(), "read compressed image");

        let root = QuadNode::parse_for_dim(&values, dim)?;
        Ok(Self { dim, root })
    }
    pub fn read_from_string(string: &str) -> Result<Self> {
        Self::read_from(string.as_bytes())
    }
}

#[cfg(test)]
mod test {
    use unindent::unindent;

    use crate::{Compressed, QTreeError, QuadNode};

    fn assert_compressed_fmt(node: QuadNode, dim: usize, fmt: &str) {
        let fmt = unindent(fmt);
        assert_eq!(node.write_compressed_to_string(dim * dim), fmt);
        assert_eq!(
            Compressed::read_from_string(&fmt).expect("valid input"),
            Compressed { dim, root: node }
        );
    }

    #[test]
    fn leaf() {
        assert_compressed_fmt(
            QuadNode::leaf(12),
            8,
            "
                64
                12
            ",
        );
    }

    #[test]
    fn split() {
        assert_compressed_fmt(
            QuadNode::new_split(5.into(), 5.into(), 5.into(), 7.into()),
            2,
            "
                4
                -1
                5
                5
                5
                7
            ",
        );
    }

    #[test]
    fn header_with_trailing_space() {
        let parsed = Compressed::read_from_string("4 \n-1\n5\n5\n5\n7\n").expect("valid input");
        assert_eq!(2, parsed.dim);
        assert_eq!(vec![-1, 5, 5, 5, 7], parsed.root.serialize());
    }

    #[test]
    fn header_is_floored() {
        let parsed = Compressed::read_from_string("17\n0\n").expect("valid input");
        assert_eq!(4, parsed.dim);
    }

    #[test]
    fn errors() {
        assert!(matches!(
            Compressed::read_from_string(""),
            Err(QTreeError::MissingHeader)
        ));
        assert!(matches!(
            Compressed::read_from_string("-4\n1\n"),
            Err(QTreeError::Value { line: 1, value: -4 })
        ));
        assert!(matches!(
            Compressed::read_from_string("9\n1\n"),
            Err(QTreeError::NotPowerOfTwo { dim: 3 })
        ));
        assert!(matches!(
            Compressed::read_from_string("0\n1\n"),
            Err(QTreeError::EmptyImage)
        ));
        assert!(matches!(
            Compressed::read_from_string("4\n-1\n-1\n"),
            Err(QTreeError::TooDeep { at: 1 })
        ));
        assert!(matches!(
            Compressed::read_from_string("16\n-1\n-1\n"),
            Err(QTreeError::Truncated { at: 2 })
        ));
        assert!(matches!(
            Compressed::read_from_string("4\n-1\n1\n2\n3\n4\n5\n"),
            Err(QTreeError::TrailingValues { at: 5, remaining: 1 })
        ));
        assert!(matches!(
            Compressed::read_from_string("4\n-1\nfive\n"),
            Err(QTreeError::Format { line: 3, .. })
        ));
        assert!(matches!(
            Compressed::read_from_string("4\n99999999999\n"),
            Err(QTreeError::Value { line: 2, .. })
        ));
    }

    #[test]
    fn huge_header() {
        assert!(matches!(
            Compressed::read_from_string("4611686018427387904\n0\n"),
            Err(QTreeError::TooLarge { dim }) if dim == 1 << 31
        ));
    }
}
