//! Square grid dimension shared by every field of a simulation.

use std::ops::Range;

use crate::error::GridError;

/// A validated square grid dimension `N`.
///
/// All fields of one simulation share a single `Grid`. Cells are addressed
/// by `(i, j)` with both coordinates in `0..N`; the interior is `1..N-1`
/// on each axis and the four corners are the only cells the boundary
/// policy rewrites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    n: usize,
}

impl Grid {
    /// Smallest accepted dimension.
    pub const MIN_DIM: usize = 2;

    /// Largest accepted dimension: `n * n` must fit in `u32` so cell
    /// indices stay compact on every target.
    pub const MAX_DIM: usize = 65_535;

    /// Create a grid of `n * n` cells.
    ///
    /// Returns `Err(GridError::TooSmall)` for `n < 2` and
    /// `Err(GridError::TooLarge)` above [`MAX_DIM`](Self::MAX_DIM).
    ///
    /// # Examples
    ///
    /// ```
    /// use eddy_core::Grid;
    ///
    /// let grid = Grid::new(8).unwrap();
    /// assert_eq!(grid.cell_count(), 64);
    /// assert_eq!(grid.interior(), 1..7);
    /// assert!(Grid::new(1).is_err());
    /// ```
    pub fn new(n: usize) -> Result<Self, GridError> {
        if n < Self::MIN_DIM {
            return Err(GridError::TooSmall { n });
        }
        if n > Self::MAX_DIM {
            return Err(GridError::TooLarge {
                n,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { n })
    }

    /// Side length `N`.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Total number of cells, `N * N`.
    pub fn cell_count(&self) -> usize {
        self.n * self.n
    }

    /// Interior index range `1..N-1`, identical on both axes.
    pub fn interior(&self) -> Range<usize> {
        1..self.n - 1
    }

    /// Flat row-major offset of cell `(i, j)`.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        i * self.n + j
    }

    /// `true` for the four corner cells.
    pub fn is_corner(&self, i: usize, j: usize) -> bool {
        let last = self.n - 1;
        (i == 0 || i == last) && (j == 0 || j == last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_dimensions() {
        assert_eq!(Grid::new(0), Err(GridError::TooSmall { n: 0 }));
        assert_eq!(Grid::new(1), Err(GridError::TooSmall { n: 1 }));
        assert!(Grid::new(2).is_ok());
        assert!(matches!(
            Grid::new(Grid::MAX_DIM + 1),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn two_by_two_has_empty_interior() {
        let g = Grid::new(2).unwrap();
        assert!(g.interior().is_empty());
        assert_eq!(g.cell_count(), 4);
    }

    #[test]
    fn index_is_row_major() {
        let g = Grid::new(5).unwrap();
        assert_eq!(g.index(0, 0), 0);
        assert_eq!(g.index(0, 4), 4);
        assert_eq!(g.index(1, 0), 5);
        assert_eq!(g.index(4, 4), 24);
    }

    #[test]
    fn corners() {
        let g = Grid::new(4).unwrap();
        assert!(g.is_corner(0, 0));
        assert!(g.is_corner(0, 3));
        assert!(g.is_corner(3, 0));
        assert!(g.is_corner(3, 3));
        assert!(!g.is_corner(0, 1));
        assert!(!g.is_corner(2, 3));
    }
}
