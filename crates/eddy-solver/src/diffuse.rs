//! Implicit diffusion over one timestep.

use eddy_core::{BoundaryKind, ScalarField};

use crate::linear::solve_linear;
use crate::scratch::Scratch;

/// Stencil coefficients `(a, c)` for diffusing with coefficient `diff`
/// over `dt` on a grid of side `n`: `a = dt * diff * (n-2)^2`, `c = 1 + 6a`.
#[inline]
pub fn diffusion_coefficients(diff: f64, dt: f64, n: usize) -> (f64, f64) {
    let span = (n - 2) as f64;
    let a = dt * diff * span * span;
    (a, 1.0 + 6.0 * a)
}

/// Diffuse `x0` into `x` (which also serves as the initial guess).
pub fn diffuse(
    kind: BoundaryKind,
    x: &mut ScalarField,
    x0: &ScalarField,
    diff: f64,
    dt: f64,
    iterations: usize,
    scratch: &mut Scratch,
) {
    let (a, c) = diffusion_coefficients(diff, dt, x.dim());
    solve_linear(kind, x, x0, a, c, iterations, scratch);
}

#[cfg(test)]
mod tests {
    use super::*;
    use eddy_core::Grid;
    use eddy_test_utils::spike_field;

    #[test]
    fn coefficients() {
        let (a, c) = diffusion_coefficients(0.5, 0.1, 12);
        // 0.1 * 0.5 * 10 * 10
        assert!((a - 5.0).abs() < 1e-12);
        assert!((c - 31.0).abs() < 1e-12);
    }

    #[test]
    fn zero_diffusion_copies_interior() {
        let g = Grid::new(8).unwrap();
        let mut s = Scratch::new(g);
        let x0 = spike_field(g, 3, 4, 2.0);
        let mut x = ScalarField::zeros(g);
        diffuse(BoundaryKind::Scalar, &mut x, &x0, 0.0, 0.1, 4, &mut s);
        for i in 1..7 {
            for j in 1..7 {
                assert_eq!(x[(i, j)], x0[(i, j)]);
            }
        }
    }

    #[test]
    fn single_application_smooths_for_any_coefficient() {
        let g = Grid::new(16).unwrap();
        let mut s = Scratch::new(g);
        let x0 = spike_field(g, 8, 8, 1.0);
        for diff in [1e-4, 1e-3, 1e-2, 1e-1, 1.0] {
            let mut x = x0.clone();
            diffuse(BoundaryKind::Scalar, &mut x, &x0, diff, 0.1, 20, &mut s);
            assert!(x[(8, 8)] < 1.0, "diff={diff}");
            assert!(x[(7, 8)] > 0.0, "diff={diff}");
            assert!(x[(8, 7)] > 0.0, "diff={diff}");
        }
    }

    #[test]
    fn repeated_diffusion_flattens_peak() {
        let g = Grid::new(16).unwrap();
        let mut s = Scratch::new(g);
        let mut prev = spike_field(g, 8, 8, 1.0);
        let mut peak = prev[(8, 8)];
        let mut side = prev[(9, 8)];

        for _ in 0..5 {
            let mut next = prev.clone();
            diffuse(BoundaryKind::Scalar, &mut next, &prev, 0.001, 0.1, 20, &mut s);
            assert!(next[(8, 8)] < peak, "peak must shrink");
            assert!(next[(9, 8)] > side, "neighbour must grow");
            assert!(next[(8, 9)] > 0.0);
            peak = next[(8, 8)];
            side = next[(9, 8)];
            prev = next;
        }
    }
}
