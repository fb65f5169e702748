use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, debug_span};

use crate::error::{QTreeError, Result};
use crate::{Compressed, NodeCount, QuadNode, Raster};

/// A grayscale image together with the quadtree that compresses it.
///
/// Starts out empty. Every successful `compress*` or `uncompress*` call replaces the
/// whole state; a failed call leaves it untouched.
#[derive(Clone, Debug, Default)]
pub struct QTree {
    image: Option<Image>,
}

#[derive(Clone, Debug)]
struct Image {
    root: QuadNode,
    raster: Raster,
    compressed_size: usize,
}
impl Image {
    fn new(root: QuadNode, raster: Raster) -> Self {
        let compressed_size = root.node_count();
        Self {
            root,
            raster,
            compressed_size,
        }
    }
}

impl QTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none()
    }
    pub fn root(&self) -> Option<&QuadNode> {
        self.image.as_ref().map(|image| &image.root)
    }
    pub fn raster(&self) -> Option<&Raster> {
        self.image.as_ref().map(|image| &image.raster)
    }
    /// side length of the image, 0 when empty
    pub fn dim(&self) -> usize {
        self.raster().map_or(0, Raster::dim)
    }
    /// number of pixels in the image, 0 when empty
    pub fn raw_size(&self) -> usize {
        self.raster().map_or(0, Raster::len)
    }
    /// number of values in the serialized tree, 0 when empty
    pub fn compressed_size(&self) -> usize {
        self.image.as_ref().map_or(0, |image| image.compressed_size)
    }
    /// compressed size as a percentage of the raw size, 0 when empty
    #[allow(clippy::cast_precision_loss)]
    pub fn compression_percent(&self) -> f64 {
        match self.raw_size() {
            0 => 0.0,
            raw_size => self.compressed_size() as f64 / raw_size as f64 * 100.0,
        }
    }

    // compressing

    /// compresses a raw image file
    pub fn compress(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let _span = debug_span!("compress", ?path).entered();
        self.compress_from(BufReader::new(File::open(path)?))
    }
    /// compresses a raw image read line by line
    pub fn compress_from(&mut self, read: impl BufRead) -> Result<()> {
        self.compress_raster(Raster::read_raw(read)?);
        Ok(())
    }
    pub fn compress_raster(&mut self, raster: Raster) {
        let root = QuadNode::compress(&raster);
        self.replace(Image::new(root, raster));
    }

    // uncompressing

    /// parses a compressed image file and rebuilds its raster
    pub fn uncompress(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let _span = debug_span!("uncompress", ?path).entered();
        self.uncompress_from(BufReader::new(File::open(path)?))
    }
    pub fn uncompress_from(&mut self, read: impl BufRead) -> Result<()> {
        let Compressed { dim, root } = Compressed::read_from(read)?;
        let raster = root.reconstruct(dim)?;
        self.replace(Image::new(root, raster));
        Ok(())
    }

    fn replace(&mut self, image: Image) {
        debug!(
            dim = image.raster.dim(),
            raw_size = image.raster.len(),
            compressed_size = image.compressed_size,
            "loaded image"
        );
        self.image = Some(image);
    }

    // writing

    /// writes the compressed image to a file
    ///
    /// The file is only created once the whole image has been rendered.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut out = Vec::new();
        self.write_to(&mut out)?;
        fs::write(path, out)?;
        Ok(())
    }
    pub fn write_to(&self, write: impl Write) -> Result<()> {
        let image = self.image.as_ref().ok_or(QTreeError::Empty)?;
        image.root.write_compressed(image.raster.len(), write)?;
        Ok(())
    }

    /// writes the raw image to a file
    pub fn write_raw(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut out = Vec::new();
        self.write_raw_to(&mut out)?;
        fs::write(path, out)?;
        Ok(())
    }
    pub fn write_raw_to(&self, write: impl Write) -> Result<()> {
        let raster = self.raster().ok_or(QTreeError::Empty)?;
        raster.write_raw(write)?;
        Ok(())
    }
}

impl Display for QTree {
    /// `QTree: ` followed by the space separated preorder values
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.root() {
            Some(root) => write!(f, "QTree: {root}"),
            None => write!(f, "QTree: "),
        }
    }
}
