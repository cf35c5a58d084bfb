//! Dense scalar and vector fields over a square [`Grid`].
//!
//! Storage is row-major: cell `(i, j)` lives at `i * N + j`, so the second
//! axis is contiguous. Fields are allocated once by the caller and mutated
//! in place by the kernels; nothing in the solver resizes them.

use std::ops::{Index, IndexMut};

use crate::error::FieldError;
use crate::grid::Grid;

/// An `N x N` array of `f64` values (density, pressure, divergence, or one
/// velocity component).
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    grid: Grid,
    cells: Vec<f64>,
}

impl ScalarField {
    /// All-zero field.
    pub fn zeros(grid: Grid) -> Self {
        Self::filled(grid, 0.0)
    }

    /// Field with every cell set to `value`.
    pub fn filled(grid: Grid, value: f64) -> Self {
        Self {
            grid,
            cells: vec![value; grid.cell_count()],
        }
    }

    /// Field whose cell `(i, j)` is `f(i, j)`.
    pub fn from_fn(grid: Grid, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let n = grid.size();
        let mut cells = Vec::with_capacity(grid.cell_count());
        for i in 0..n {
            for j in 0..n {
                cells.push(f(i, j));
            }
        }
        Self { grid, cells }
    }

    /// Wrap a row-major buffer of exactly `N * N` cells.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::LengthMismatch`] if `cells.len() != N * N`.
    pub fn from_vec(grid: Grid, cells: Vec<f64>) -> Result<Self, FieldError> {
        if cells.len() != grid.cell_count() {
            return Err(FieldError::LengthMismatch {
                expected: grid.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(Self { grid, cells })
    }

    /// The grid this field lives on.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Side length `N`.
    pub fn dim(&self) -> usize {
        self.grid.size()
    }

    /// Value at `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[self.grid.index(i, j)]
    }

    /// Overwrite `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let k = self.grid.index(i, j);
        self.cells[k] = value;
    }

    /// Row-major view of all cells.
    pub fn as_slice(&self) -> &[f64] {
        &self.cells
    }

    /// Mutable row-major view of all cells.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.cells
    }

    /// Consume the field, returning its buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.cells
    }

    /// Copy every cell of `other` into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DimensionMismatch`] if the grids differ.
    pub fn copy_from(&mut self, other: &ScalarField) -> Result<(), FieldError> {
        if other.grid != self.grid {
            return Err(FieldError::DimensionMismatch {
                expected: self.dim(),
                actual: other.dim(),
            });
        }
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f64) {
        self.cells.fill(value);
    }

    /// Sum of all cells.
    pub fn sum(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Largest absolute cell value (0 for an all-zero field).
    pub fn max_abs(&self) -> f64 {
        self.cells.iter().fold(0.0_f64, |m, v| m.max(v.abs()))
    }

    /// First cell (row-major order) holding NaN or an infinity, with its value.
    pub fn find_non_finite(&self) -> Option<(usize, usize, f64)> {
        let n = self.dim();
        self.cells
            .iter()
            .position(|v| !v.is_finite())
            .map(|k| (k / n, k % n, self.cells[k]))
    }
}

impl Index<(usize, usize)> for ScalarField {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.cells[self.grid.index(i, j)]
    }
}

impl IndexMut<(usize, usize)> for ScalarField {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        let k = self.grid.index(i, j);
        &mut self.cells[k]
    }
}

/// A velocity field: two [`ScalarField`] components on one grid.
///
/// `x` is the component along the first index axis `i`, `y` along the
/// second axis `j`.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorField {
    /// First-axis component.
    pub x: ScalarField,
    /// Second-axis component.
    pub y: ScalarField,
}

impl VectorField {
    /// Both components zero.
    pub fn zeros(grid: Grid) -> Self {
        Self {
            x: ScalarField::zeros(grid),
            y: ScalarField::zeros(grid),
        }
    }

    /// Pair two components.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DimensionMismatch`] if they live on different grids.
    pub fn from_components(x: ScalarField, y: ScalarField) -> Result<Self, FieldError> {
        if x.grid() != y.grid() {
            return Err(FieldError::DimensionMismatch {
                expected: x.dim(),
                actual: y.dim(),
            });
        }
        Ok(Self { x, y })
    }

    /// The shared grid.
    pub fn grid(&self) -> Grid {
        self.x.grid()
    }

    /// Set both components to zero.
    pub fn clear(&mut self) {
        self.x.fill(0.0);
        self.y.fill(0.0);
    }
}
