use std::fmt::Display;

use qtree::QTree;

/// size summary printed after each command
pub struct Report {
    dim: usize,
    raw_size: usize,
    compressed_size: usize,
    percent: f64,
}
impl Report {
    pub fn new(tree: &QTree) -> Self {
        Self {
            dim: tree.dim(),
            raw_size: tree.raw_size(),
            compressed_size: tree.compressed_size(),
            percent: tree.compression_percent(),
        }
    }
}
impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Image dimension: {0}x{0}", self.dim)?;
        writeln!(f, "Raw image size: {}", self.raw_size)?;
        writeln!(f, "Compressed image size: {}", self.compressed_size)?;
        writeln!(f, "Compression %: {:.2}", self.percent)
    }
}

#[cfg(test)]
mod test {
    use qtree::{QTree, Raster};

    use super::Report;

    #[test]
    fn summary() {
        let mut tree = QTree::new();
        tree.compress_raster(Raster::filled(4, 8).expect("4x4"));
        assert_eq!(
            "Image dimension: 4x4\nRaw image size: 16\nCompressed image size: 1\nCompression %: 6.25\n",
            Report::new(&tree).to_string()
        );
    }
}
