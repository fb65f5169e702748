use crate::Raster;

// macros make formatting nicer

/// this has very little error handling, must be a square grid with side length a power of 2
#[macro_export]
macro_rules! test_raster {
    {$s:literal} => {
        $crate::Raster::from_test_format($s)
    };
}
pub use test_raster;

impl Raster {
    /// expects rows of whitespace separated samples (0-255), one row per line
    /// blank lines and leading/trailing spaces are ignored
    pub fn from_test_format(s: &str) -> Raster {
        let rows: Vec<Vec<u8>> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(parse_row)
            .collect();
        Raster::from_rows(&rows).expect("square grid with a power of 2 side length")
    }
}

fn parse_row(line: &str) -> Vec<u8> {
    line.split_ascii_whitespace()
        .map(|sample| {
            sample
                .parse()
                .unwrap_or_else(|_| panic!("Invalid sample {sample:?}"))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use crate::{Coord, Raster};

    #[test]
    fn raster() {
        let parsed = test_raster! {"
            0 255
            17 3
        "};
        let actual = Raster::from_cells(vec![0, 255, 17, 3]).expect("2x2");
        assert_eq!(actual, parsed);
        assert_eq!(17, parsed[Coord::new(1, 0)]);
    }

    #[test]
    #[should_panic(expected = "square grid")]
    fn not_square() {
        let _ = test_raster! {"
            1 2 3
            4 5 6
        "};
    }
}
