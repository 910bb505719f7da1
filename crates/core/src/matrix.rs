//! Matrix module - square occupancy matrices and the rotation transform
//!
//! A matrix is stored in a fixed 4x4 array so it stays `Copy` and never
//! allocates; only the top-left `side x side` block is meaningful.

/// Largest matrix side used by any piece (the I piece)
pub const MAX_SIDE: usize = 4;

/// Square boolean matrix describing which cells of a piece are occupied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    side: u8,
    cells: [[bool; MAX_SIDE]; MAX_SIDE],
}

impl Matrix {
    /// Build a matrix from rows of 0/1 values.
    ///
    /// Panics if the rows are not square or larger than [`MAX_SIDE`]; only
    /// used for the static shape table.
    pub const fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N >= 1 && N <= MAX_SIDE);
        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            side: N as u8,
            cells,
        }
    }

    /// Side length of the matrix
    pub fn side(&self) -> usize {
        self.side as usize
    }

    /// Whether the cell at (row, col) is occupied.
    /// Returns false outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.side() && col < self.side() && self.cells[row][col]
    }

    /// Occupied cells as `(row, col)` offsets, in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.side();
        (0..n).flat_map(move |r| {
            (0..n)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (r as i8, c as i8))
        })
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.occupied().count()
    }

    /// Rotate 90° clockwise: `result[i][j] = self[n-1-j][i]`
    pub fn rotate_cw(&self) -> Matrix {
        let n = self.side();
        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        for (i, row) in cells.iter_mut().enumerate().take(n) {
            for (j, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - j][i];
            }
        }
        Matrix {
            side: self.side,
            cells,
        }
    }
}

/// Free-function form of [`Matrix::rotate_cw`]
pub fn rotate(matrix: &Matrix) -> Matrix {
    matrix.rotate_cw()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_and_get() {
        let m = Matrix::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]);
        assert_eq!(m.side(), 3);
        assert!(m.get(0, 1));
        assert!(!m.get(0, 0));
        assert!(m.get(1, 2));
        // Out of range is simply empty
        assert!(!m.get(3, 0));
        assert!(!m.get(0, 3));
    }

    #[test]
    fn test_occupied_is_row_major() {
        let m = Matrix::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]);
        let cells: Vec<_> = m.occupied().collect();
        assert_eq!(cells, vec![(0, 1), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(m.count(), 4);
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let t = Matrix::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]);
        let expected = Matrix::from_rows([[0, 1, 0], [0, 1, 1], [0, 1, 0]]);
        assert_eq!(rotate(&t), expected);
    }

    #[test]
    fn test_rotate_i_clockwise() {
        let i = Matrix::from_rows([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let expected =
            Matrix::from_rows([[0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0]]);
        assert_eq!(i.rotate_cw(), expected);
    }

    #[test]
    fn test_rotate_o_is_fixed_point() {
        let o = Matrix::from_rows([[1, 1], [1, 1]]);
        assert_eq!(o.rotate_cw(), o);
    }

    #[test]
    fn test_rotate_preserves_cell_count() {
        let s = Matrix::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]);
        assert_eq!(s.rotate_cw().count(), 4);
    }
}
