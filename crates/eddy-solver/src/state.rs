//! The fields one simulation instance steps forward.

use eddy_core::{FieldError, Grid, ScalarField, VectorField};
use tracing::debug;

use crate::error::SolverError;

/// Current and previous buffers for density and velocity, plus the
/// pressure and divergence work fields used by projection.
///
/// After a [`step`](crate::StableFluids::step) the results live in
/// `density` and `velocity`; the `_prev` buffers hold intermediate values
/// and are reused as scratch by the next step.
#[derive(Clone, Debug, PartialEq)]
pub struct FluidState {
    grid: Grid,
    /// Transported scalar (dye, smoke).
    pub density: ScalarField,
    /// Intermediate density (diffused, pre-advection).
    pub density_prev: ScalarField,
    /// Velocity.
    pub velocity: VectorField,
    /// Intermediate velocity (diffused and projected, pre-advection).
    pub velocity_prev: VectorField,
    /// Pressure from the last projection.
    pub pressure: ScalarField,
    /// Divergence from the last projection.
    pub divergence: ScalarField,
}

impl FluidState {
    /// All-zero state on `grid`.
    pub fn new(grid: Grid) -> Self {
        debug!(grid_size = grid.size(), "fluid state allocated");
        Self {
            grid,
            density: ScalarField::zeros(grid),
            density_prev: ScalarField::zeros(grid),
            velocity: VectorField::zeros(grid),
            velocity_prev: VectorField::zeros(grid),
            pressure: ScalarField::zeros(grid),
            divergence: ScalarField::zeros(grid),
        }
    }

    /// State seeded with an initial density and velocity.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Field`] if the two live on different grids.
    pub fn from_parts(density: ScalarField, velocity: VectorField) -> Result<Self, SolverError> {
        let grid = density.grid();
        if velocity.grid() != grid {
            return Err(FieldError::DimensionMismatch {
                expected: grid.size(),
                actual: velocity.grid().size(),
            }
            .into());
        }
        let mut state = Self::new(grid);
        state.density = density;
        state.velocity = velocity;
        Ok(state)
    }

    /// The shared grid.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Add `amount` of density at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is outside the grid.
    pub fn add_density(&mut self, i: usize, j: usize, amount: f64) {
        self.density[(i, j)] += amount;
    }

    /// Add `(dx, dy)` to the velocity at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is outside the grid.
    pub fn add_velocity(&mut self, i: usize, j: usize, dx: f64, dy: f64) {
        self.velocity.x[(i, j)] += dx;
        self.velocity.y[(i, j)] += dy;
    }

    /// Zero every field.
    pub fn reset(&mut self) {
        self.density.fill(0.0);
        self.density_prev.fill(0.0);
        self.velocity.clear();
        self.velocity_prev.clear();
        self.pressure.fill(0.0);
        self.divergence.fill(0.0);
    }
}
