//! Reusable field fixtures.
//!
//! - [`ramp_field`]: `(i, j) -> i * N + j`, distinct in every cell.
//! - [`spike_field`]: one non-zero cell.
//! - [`random_field`]: seeded uniform noise (ChaCha8, reproducible).
//! - [`radial_velocity`]: a Gaussian source, strongly divergent.
//! - [`vortex_velocity`]: a Gaussian swirl, nearly divergence-free.

use eddy_core::{Grid, ScalarField, VectorField};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Cell `(i, j)` holds `i * N + j`.
pub fn ramp_field(grid: Grid) -> ScalarField {
    let n = grid.size();
    ScalarField::from_fn(grid, |i, j| (i * n + j) as f64)
}

/// Zero everywhere except `value` at `(i, j)`.
pub fn spike_field(grid: Grid, i: usize, j: usize, value: f64) -> ScalarField {
    let mut f = ScalarField::zeros(grid);
    f[(i, j)] = value;
    f
}

/// Uniform noise in `[lo, hi)` drawn from a ChaCha8 stream seeded with `seed`.
///
/// `lo == hi` yields a constant field.
pub fn random_field(grid: Grid, seed: u64, lo: f64, hi: f64) -> ScalarField {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let span = hi - lo;
    ScalarField::from_fn(grid, |_, _| lo + span * rng.random::<f64>())
}

/// Outward flow from the grid centre with a Gaussian envelope:
/// `v = strength * (dx, dy) * exp(-r² / (N² / 32))`.
pub fn radial_velocity(grid: Grid, strength: f64) -> VectorField {
    let n = grid.size();
    let c = (n / 2) as f64;
    let sigma = (n * n) as f64 / 32.0;
    let envelope = move |i: usize, j: usize| {
        let dx = i as f64 - c;
        let dy = j as f64 - c;
        (dx, dy, strength * (-(dx * dx + dy * dy) / sigma).exp())
    };
    VectorField {
        x: ScalarField::from_fn(grid, |i, j| {
            let (dx, _, e) = envelope(i, j);
            dx * e
        }),
        y: ScalarField::from_fn(grid, |i, j| {
            let (_, dy, e) = envelope(i, j);
            dy * e
        }),
    }
}

/// Counter-clockwise swirl about the grid centre with a Gaussian envelope.
pub fn vortex_velocity(grid: Grid, strength: f64) -> VectorField {
    let n = grid.size();
    let c = (n / 2) as f64;
    let sigma = (n * n) as f64 / 32.0;
    let envelope = move |i: usize, j: usize| {
        let dx = i as f64 - c;
        let dy = j as f64 - c;
        (dx, dy, strength * (-(dx * dx + dy * dy) / sigma).exp())
    };
    VectorField {
        x: ScalarField::from_fn(grid, |i, j| {
            let (_, dy, e) = envelope(i, j);
            -dy * e
        }),
        y: ScalarField::from_fn(grid, |i, j| {
            let (dx, _, e) = envelope(i, j);
            dx * e
        }),
    }
}
