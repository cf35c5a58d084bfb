//! Test utilities for eddy development.
//!
//! Provides field fixtures (ramps, spikes, seeded noise, divergent flow)
//! and tolerance assertions shared by unit tests, integration tests and
//! benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{radial_velocity, ramp_field, random_field, spike_field, vortex_velocity};

use eddy_core::ScalarField;

/// Assert two fields share a grid and agree cell-by-cell within `tol`.
///
/// Panics with the first offending cell.
pub fn assert_field_close(actual: &ScalarField, expected: &ScalarField, tol: f64) {
    assert_eq!(
        actual.grid(),
        expected.grid(),
        "fields live on different grids"
    );
    let n = actual.dim();
    for i in 0..n {
        for j in 0..n {
            let a = actual[(i, j)];
            let e = expected[(i, j)];
            assert!(
                (a - e).abs() <= tol,
                "cell ({i}, {j}): got {a}, expected {e} (tol {tol})"
            );
        }
    }
}

/// Assert every cell of `field` is finite.
pub fn assert_all_finite(field: &ScalarField) {
    if let Some((i, j, v)) = field.find_non_finite() {
        panic!("non-finite value {v} at ({i}, {j})");
    }
}
