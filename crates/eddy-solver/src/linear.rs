//! Fixed-iteration relaxation for the 5-point stencil system.
//!
//! Approximates, on interior cells,
//! ```text
//! x[i,j] = (x0[i,j] + a * (x[i-1,j] + x[i+1,j] + x[i,j-1] + x[i,j+1])) / c
//! ```
//! Each sweep is a Jacobi update: all four neighbours are read from the
//! state at the start of the sweep, never from cells already rewritten in
//! the same sweep.

use eddy_core::{BoundaryKind, ScalarField};

use crate::boundary::enforce_boundary;
use crate::scratch::Scratch;

/// Run `iterations` Jacobi sweeps on `x` against right-hand side `x0`.
///
/// After every sweep the corner policy is applied to `x` with `kind`.
/// Edge cells are never written by the stencil. `c == 0` is not rejected:
/// the reciprocal becomes infinite and the result non-finite.
pub fn solve_linear(
    kind: BoundaryKind,
    x: &mut ScalarField,
    x0: &ScalarField,
    a: f64,
    c: f64,
    iterations: usize,
    scratch: &mut Scratch,
) {
    debug_assert_eq!(x.grid(), x0.grid(), "solve_linear: x and x0 on different grids");
    debug_assert!(c != 0.0, "solve_linear: c must be non-zero");
    debug_assert!(a.is_finite() && c.is_finite(), "solve_linear: non-finite coefficients");

    let n = x.dim();
    let c_recip = 1.0 / c;
    let rhs = x0.as_slice();

    for _ in 0..iterations {
        sweep(x, rhs, a, c_recip, n, scratch);
        enforce_boundary(kind, x);
    }
}

/// One Jacobi sweep over the interior of `x`.
#[inline]
fn sweep(x: &mut ScalarField, rhs: &[f64], a: f64, c_recip: f64, n: usize, scratch: &mut Scratch) {
    let prev = scratch.snapshot(x);
    let out = x.as_mut_slice();
    for i in 1..n - 1 {
        let row = i * n;
        for j in 1..n - 1 {
            let k = row + j;
            let neighbours = prev[k - n] + prev[k + n] + prev[k - 1] + prev[k + 1];
            out[k] = (rhs[k] + a * neighbours) * c_recip;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eddy_core::Grid;
    use eddy_test_utils::{assert_field_close, ramp_field, spike_field};
    use proptest::prelude::*;

    fn grid(n: usize) -> Grid {
        Grid::new(n).unwrap()
    }

    #[test]
    fn uniform_rhs_with_zero_coupling() {
        // N=4, 20 sweeps, a=0, c=1, x0 all ones: every cell ends at 1.
        let g = grid(4);
        let mut s = Scratch::new(g);
        let mut x = ScalarField::filled(g, 1.0);
        let x0 = ScalarField::filled(g, 1.0);
        solve_linear(BoundaryKind::Scalar, &mut x, &x0, 0.0, 1.0, 20, &mut s);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(x[(i, j)], 1.0, "cell ({i},{j})");
            }
        }
    }

    #[test]
    fn single_sweep_reads_pre_sweep_neighbours() {
        // x starts as a ramp; with a=1, c=1, x0=0 one Jacobi sweep gives the
        // neighbour sum of the original ramp. A Gauss-Seidel sweep would
        // instead pick up already-updated values at (i-1,j) and (i,j-1).
        let g = grid(5);
        let mut s = Scratch::new(g);
        let mut x = ramp_field(g);
        let before = x.clone();
        let x0 = ScalarField::zeros(g);
        solve_linear(BoundaryKind::Scalar, &mut x, &x0, 1.0, 1.0, 1, &mut s);
        for i in 1..4 {
            for j in 1..4 {
                let expect = before[(i - 1, j)]
                    + before[(i + 1, j)]
                    + before[(i, j - 1)]
                    + before[(i, j + 1)];
                assert_eq!(x[(i, j)], expect, "cell ({i},{j})");
            }
        }
    }

    #[test]
    fn edges_untouched_by_stencil() {
        let g = grid(6);
        let mut s = Scratch::new(g);
        let mut x = ramp_field(g);
        let before = x.clone();
        let x0 = spike_field(g, 3, 3, 5.0);
        solve_linear(BoundaryKind::Scalar, &mut x, &x0, 1.0, 6.0, 7, &mut s);
        for k in 1..5 {
            assert_eq!(x[(0, k)], before[(0, k)]);
            assert_eq!(x[(5, k)], before[(5, k)]);
            assert_eq!(x[(k, 0)], before[(k, 0)]);
            assert_eq!(x[(k, 5)], before[(k, 5)]);
        }
    }

    #[test]
    fn zero_iterations_leave_field_alone() {
        let g = grid(5);
        let mut s = Scratch::new(g);
        let mut x = ramp_field(g);
        let before = x.clone();
        solve_linear(BoundaryKind::Scalar, &mut x, &ScalarField::zeros(g), 1.0, 4.0, 0, &mut s);
        assert_eq!(x, before);
    }

    #[test]
    fn spike_spreads_to_neighbours() {
        let g = grid(16);
        let mut s = Scratch::new(g);
        let x0 = spike_field(g, 8, 8, 100.0);
        let mut x = x0.clone();
        solve_linear(BoundaryKind::Scalar, &mut x, &x0, 1.0, 5.0, 20, &mut s);
        let center = x[(8, 8)];
        let neighbour = x[(9, 8)];
        assert!(center > 0.0);
        assert!(neighbour > 0.0);
        assert!(center > neighbour);
    }

    #[test]
    fn converges_towards_fixed_point() {
        // With enough sweeps the residual of the stencil equation is tiny.
        let g = grid(10);
        let mut s = Scratch::new(g);
        let x0 = spike_field(g, 5, 4, 1.0);
        let mut x = ScalarField::zeros(g);
        let (a, c) = (1.0, 6.0);
        solve_linear(BoundaryKind::Scalar, &mut x, &x0, a, c, 400, &mut s);
        for i in 2..8 {
            for j in 2..8 {
                let nb = x[(i - 1, j)] + x[(i + 1, j)] + x[(i, j - 1)] + x[(i, j + 1)];
                let residual = x[(i, j)] - (x0[(i, j)] + a * nb) / c;
                assert!(residual.abs() < 1e-9, "residual {residual} at ({i},{j})");
            }
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "c must be non-zero")]
    fn zero_c_trips_debug_assertion() {
        let g = grid(4);
        let mut s = Scratch::new(g);
        let mut x = ScalarField::zeros(g);
        solve_linear(BoundaryKind::Scalar, &mut x, &ScalarField::zeros(g), 1.0, 0.0, 1, &mut s);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn zero_c_propagates_non_finite() {
        let g = grid(4);
        let mut s = Scratch::new(g);
        let mut x = ScalarField::zeros(g);
        let x0 = ScalarField::filled(g, 1.0);
        solve_linear(BoundaryKind::Scalar, &mut x, &x0, 1.0, 0.0, 1, &mut s);
        assert!(x.find_non_finite().is_some());
    }

    proptest! {
        #[test]
        fn zero_coupling_reproduces_rhs(
            n in 3usize..12,
            iterations in 1usize..8,
            values in prop::collection::vec(-100.0f64..100.0, 144),
        ) {
            let g = grid(n);
            let mut s = Scratch::new(g);
            let x0 = ScalarField::from_fn(g, |i, j| values[i * n + j]);
            let mut x = ScalarField::zeros(g);
            solve_linear(BoundaryKind::Scalar, &mut x, &x0, 0.0, 1.0, iterations, &mut s);
            for i in 1..n - 1 {
                for j in 1..n - 1 {
                    prop_assert_eq!(x[(i, j)], x0[(i, j)]);
                }
            }
        }
    }

    #[test]
    fn matches_reference_after_two_sweeps() {
        let g = grid(5);
        let mut s = Scratch::new(g);
        let x0 = ramp_field(g);
        let mut x = ScalarField::zeros(g);
        solve_linear(BoundaryKind::Scalar, &mut x, &x0, 0.5, 3.0, 2, &mut s);

        // Hand-rolled reference with an explicit copy per sweep.
        let mut r = vec![0.0; 25];
        for _ in 0..2 {
            let p = r.clone();
            for i in 1..4 {
                for j in 1..4 {
                    let k = i * 5 + j;
                    r[k] = (x0.as_slice()[k] + 0.5 * (p[k - 5] + p[k + 5] + p[k - 1] + p[k + 1]))
                        * (1.0 / 3.0);
                }
            }
            r[0] = 0.5 * (r[5] + r[1]);
            r[4] = 0.5 * (r[9] + r[3]);
            r[20] = 0.5 * (r[15] + r[21]);
            r[24] = 0.5 * (r[19] + r[23]);
        }
        let expect = ScalarField::from_vec(g, r).unwrap();
        assert_field_close(&x, &expect, 0.0);
    }
}
