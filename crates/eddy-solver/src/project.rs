//! Pressure projection.
//!
//! Computes the divergence of the velocity field, relaxes a pressure
//! Poisson system against it, and subtracts the pressure gradient so the
//! velocity becomes (approximately) divergence-free.

use eddy_core::{BoundaryKind, ScalarField};

use crate::boundary::enforce_boundary;
use crate::linear::solve_linear;
use crate::scratch::Scratch;

/// Project `(vx, vy)` towards a divergence-free field.
///
/// `p` and `div` are work fields: their interiors are overwritten, their
/// non-corner edges are left as the caller supplied them. The pressure
/// system uses `a = 1`, `c = 6`; the divergence is scaled by `1 / N` and
/// the gradient by `0.5 * N`.
pub fn project(
    vx: &mut ScalarField,
    vy: &mut ScalarField,
    p: &mut ScalarField,
    div: &mut ScalarField,
    iterations: usize,
    scratch: &mut Scratch,
) {
    debug_assert_eq!(vx.grid(), vy.grid(), "project: velocity components on different grids");
    debug_assert_eq!(vx.grid(), p.grid(), "project: pressure on a different grid");
    debug_assert_eq!(vx.grid(), div.grid(), "project: divergence on a different grid");

    let n = vx.dim();
    let nf = n as f64;

    {
        let u = vx.as_slice();
        let v = vy.as_slice();
        let dv = div.as_mut_slice();
        let pr = p.as_mut_slice();
        for j in 1..n - 1 {
            for i in 1..n - 1 {
                let k = i * n + j;
                dv[k] = -0.5 * (u[k + n] - u[k - n] + v[k + 1] - v[k - 1]) / nf;
                pr[k] = 0.0;
            }
        }
    }
    enforce_boundary(BoundaryKind::Scalar, div);
    enforce_boundary(BoundaryKind::Scalar, p);

    solve_linear(BoundaryKind::Scalar, p, div, 1.0, 6.0, iterations, scratch);

    {
        let pr = p.as_slice();
        let u = vx.as_mut_slice();
        let v = vy.as_mut_slice();
        for j in 1..n - 1 {
            for i in 1..n - 1 {
                let k = i * n + j;
                u[k] -= 0.5 * (pr[k + n] - pr[k - n]) * nf;
                v[k] -= 0.5 * (pr[k + 1] - pr[k - 1]) * nf;
            }
        }
    }
    enforce_boundary(BoundaryKind::VelocityX, vx);
    enforce_boundary(BoundaryKind::VelocityY, vy);
}
