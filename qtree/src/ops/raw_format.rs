//! the raw image format: one sample (0-255) per line, row-major

use std::io::{self, BufRead, Write};

use crate::error::{QTreeError, Result};
use crate::ops::lines::IntLines;
use crate::Raster;

impl Raster {
    pub fn read_raw(read: impl BufRead) -> Result<Raster> {
        let cells = IntLines::new(read)
            .map(|item| {
                let (line, value) = item?;
                u8::try_from(value).map_err(|_| QTreeError::Value { line, value })
            })
            .collect::<Result<Vec<u8>>>()?;
        Raster::from_cells(cells)
    }
    pub fn read_raw_from_string(string: &str) -> Result<Raster> {
        Self::read_raw(string.as_bytes())
    }

    pub fn write_raw(&self, mut write: impl Write) -> io::Result<()> {
        for value in self.cells() {
            writeln!(write, "{value}")?;
        }
        Ok(())
    }
    pub fn write_raw_to_string(&self) -> String {
        let mut out = Vec::with_capacity(self.len() * 4);
        self.write_raw(&mut out).expect("writing to a Vec can't fail");
        String::from_utf8(out).expect("valid string")
    }
}
