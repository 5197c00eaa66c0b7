//! Decoding packed tag codes into oriented bit matrices.

use std::fmt;

/// Square grid of data cells, `true` = white.
///
/// Cells are stored row-major. A matrix produced by [`BitMatrix::decode`] is
/// already in render orientation: row 0 is the top of the printed marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl BitMatrix {
    /// Decode `code` into a render-oriented `n × n` matrix.
    ///
    /// Code bit `n*i + j` describes raw cell `(i, j)`. The printed marker is
    /// the raw matrix turned by 180 degrees, so the result is
    /// `from_raw(code, n).rotate_180()`. Bits at positions `>= n*n` are
    /// ignored.
    pub fn decode(code: u64, n: usize) -> Self {
        Self::from_raw(code, n).rotate_180()
    }

    /// Unrotated matrix: cell `(i, j)` is bit `n*i + j` of `code`.
    pub fn from_raw(code: u64, n: usize) -> Self {
        let cells = (0..n * n)
            .map(|bit| bit < 64 && (code >> bit) & 1 == 1)
            .collect();
        Self { size: n, cells }
    }

    /// The matrix turned by 180 degrees: `(i, j) -> (n-1-i, n-1-j)`.
    ///
    /// In row-major storage this maps index `k` to `n*n - 1 - k`, a plain
    /// reversal. Applying it twice yields the original matrix.
    pub fn rotate_180(&self) -> Self {
        let mut cells = self.cells.clone();
        cells.reverse();
        Self {
            size: self.size,
            cells,
        }
    }

    /// Side length in cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.size && col < self.size, "cell out of range");
        self.cells[row * self.size + col]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // `max(1)` keeps `chunks` valid for the empty 0x0 matrix.
        self.cells.chunks(self.size.max(1))
    }

    /// All cells as `(row, col, value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(k, &v)| (k / n, k % n, v))
    }

    /// Number of white cells.
    pub fn count_white(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                f.write_str(if cell { "1" } else { "0" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins;

    #[test]
    fn raw_layout_is_row_major_from_bit_zero() {
        // bits 0 and 5 set: raw (0,0) and (1,1) for n = 4
        let m = BitMatrix::from_raw(0b10_0001, 4);
        assert!(m.get(0, 0));
        assert!(m.get(1, 1));
        assert_eq!(m.count_white(), 2);
    }

    #[test]
    fn decode_places_bit_zero_bottom_right() {
        let m = BitMatrix::decode(1, 6);
        assert!(m.get(5, 5));
        assert_eq!(m.count_white(), 1);

        let top_left = BitMatrix::decode(1 << 35, 6);
        assert!(top_left.get(0, 0));
    }

    #[test]
    fn decode_is_point_reflection_of_raw() {
        let code = 0x0009_c712_bec7;
        let n = 6;
        let raw = BitMatrix::from_raw(code, n);
        let decoded = BitMatrix::decode(code, n);
        for i in 0..n {
            for j in 0..n {
                assert_eq!(decoded.get(i, j), raw.get(n - 1 - i, n - 1 - j));
            }
        }
    }

    #[test]
    fn rotating_twice_restores_every_builtin_tag() {
        for dict in builtins::BUILTINS {
            for &code in dict.codes {
                let decoded = BitMatrix::decode(code, dict.marker_size);
                assert_eq!(decoded.rotate_180().rotate_180(), decoded);
                assert_eq!(
                    decoded.rotate_180(),
                    BitMatrix::from_raw(code, dict.marker_size)
                );
            }
        }
    }

    #[test]
    fn bits_past_the_matrix_are_ignored() {
        let n = 4;
        let code = 0xabcd;
        let noisy = code | (1 << 16) | (1 << 40) | (1 << 63);
        assert_eq!(BitMatrix::decode(noisy, n), BitMatrix::decode(code, n));
    }

    #[test]
    fn display_prints_rows() {
        let m = BitMatrix::from_raw(0b1001, 2);
        assert_eq!(m.to_string(), "10\n01\n");
    }

    #[test]
    fn cells_iterate_row_major() {
        let m = BitMatrix::from_raw(0b0100, 2);
        let white: Vec<_> = m.cells().filter(|c| c.2).map(|c| (c.0, c.1)).collect();
        assert_eq!(white, vec![(1, 0)]);
    }
}
