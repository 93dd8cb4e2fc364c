//! Square integer grids loaded from flat row-major binary files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::GridError;

/// Element encoding of a grid file.
///
/// The producing program writes C `int` (4 bytes, little-endian on every
/// platform it targets). The 8-byte form exists for files consumed by older
/// tooling that read platform-default wide integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElemWidth {
    #[default]
    I32,
    I64,
}

impl ElemWidth {
    /// Size of one element in bytes.
    pub fn bytes(self) -> usize {
        match self {
            ElemWidth::I32 => 4,
            ElemWidth::I64 => 8,
        }
    }
}

/// A square grid of integers, immutable after load.
///
/// Elements are widened to `i64` on decode so both encodings compare and
/// render uniformly. Row-major addressing: flat index `i` maps to row
/// `i / width`, column `i % width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    data: Vec<i64>,
}

impl Grid {
    /// Load a grid of `width * width` elements from a raw binary file.
    ///
    /// Trailing bytes beyond the required element count are ignored. A file
    /// holding fewer elements is a `ShortRead` error, never a silent
    /// truncation.
    pub fn from_file(
        path: impl AsRef<Path>,
        width: usize,
        elem: ElemWidth,
    ) -> Result<Self, GridError> {
        let path = path.as_ref();
        let expected = width * width;
        let byte_len = expected * elem.bytes();

        let file = File::open(path).map_err(|e| GridError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut buf = Vec::with_capacity(byte_len);
        BufReader::new(file)
            .take(byte_len as u64)
            .read_to_end(&mut buf)
            .map_err(|e| GridError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        if buf.len() < byte_len {
            return Err(GridError::ShortRead {
                path: path.to_path_buf(),
                expected,
                got: buf.len() / elem.bytes(),
            });
        }

        let data = match elem {
            ElemWidth::I32 => buf
                .chunks_exact(4)
                .map(|c| i64::from(i32::from_le_bytes([c[0], c[1], c[2], c[3]])))
                .collect(),
            ElemWidth::I64 => buf
                .chunks_exact(8)
                .map(|c| i64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
                .collect(),
        };

        Ok(Self { width, data })
    }

    /// Build a grid from an in-memory flat array (fixtures and tests).
    ///
    /// Panics if `data.len() != width * width`.
    pub fn from_vec(width: usize, data: Vec<i64>) -> Self {
        assert_eq!(data.len(), width * width, "flat length must be width^2");
        Self { width, data }
    }

    /// Grid dimension (the grid holds `width * width` elements).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total element count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The flat row-major element array.
    pub fn as_flat(&self) -> &[i64] {
        &self.data
    }

    /// Element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.width + col]
    }

    /// Smallest and largest element, or `None` for an empty grid.
    pub fn min_max(&self) -> Option<(i64, i64)> {
        let first = *self.data.first()?;
        Some(
            self.data
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("gt_core_grid_{}", name))
    }

    fn write_i32(path: &std::path::Path, vals: &[i32]) {
        let mut bytes = Vec::with_capacity(vals.len() * 4);
        for v in vals {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        std::fs::write(path, bytes).unwrap();
    }

    #[test]
    fn loads_i32_grid() {
        let path = temp_path("i32");
        write_i32(&path, &[1, 2, 3, -4]);

        let grid = Grid::from_file(&path, 2, ElemWidth::I32).unwrap();
        assert_eq!(grid.as_flat(), &[1, 2, 3, -4]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn loads_i64_grid() {
        let path = temp_path("i64");
        let vals: [i64; 4] = [1, -2, i64::from(i32::MAX) + 1, 4];
        let mut bytes = Vec::new();
        for v in vals {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        std::fs::write(&path, bytes).unwrap();

        let grid = Grid::from_file(&path, 2, ElemWidth::I64).unwrap();
        assert_eq!(grid.as_flat(), &vals);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn row_major_addressing() {
        // Flat index i lands at row i / n, column i % n.
        let grid = Grid::from_vec(3, (0..9).collect());
        for i in 0..9usize {
            assert_eq!(grid.get(i / 3, i % 3), i as i64);
        }
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let path = temp_path("trailing");
        write_i32(&path, &[1, 2, 3, 4, 99, 100]);

        let grid = Grid::from_file(&path, 2, ElemWidth::I32).unwrap();
        assert_eq!(grid.as_flat(), &[1, 2, 3, 4]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn short_file_is_an_error() {
        let path = temp_path("short");
        write_i32(&path, &[1, 2, 3]);

        let err = Grid::from_file(&path, 2, ElemWidth::I32).unwrap_err();
        match err {
            GridError::ShortRead { expected, got, .. } => {
                assert_eq!(expected, 4);
                assert_eq!(got, 3);
            }
            other => panic!("expected ShortRead, got {:?}", other),
        }

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Grid::from_file("/nonexistent/gt_core_grid", 2, ElemWidth::I32).unwrap_err();
        assert!(matches!(err, GridError::Io { .. }));
    }

    #[test]
    fn zero_width_grid_is_empty() {
        let path = temp_path("zero");
        std::fs::write(&path, []).unwrap();

        let grid = Grid::from_file(&path, 0, ElemWidth::I32).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.min_max(), None);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn min_max_spans_the_data() {
        let grid = Grid::from_vec(2, vec![-7, 3, 0, 12]);
        assert_eq!(grid.min_max(), Some((-7, 12)));
    }
}
