//! Semi-Lagrangian transport of a scalar field through a velocity field.
//!
//! Every cell traces backwards along the velocity sampled at that cell and
//! bilinearly interpolates the source field at the departure point. All
//! reads come from `d0` and the velocity, never from `d`, so the result is
//! independent of visiting order.

use eddy_core::{BoundaryKind, ScalarField};

use crate::boundary::enforce_boundary;

/// Lower clamp for a departure coordinate.
const TRACE_MIN: f64 = 0.5;

/// Departure cell pair and far-cell weight along one axis.
///
/// `pos` is clamped to `[0.5, n + 0.5]`, split into `floor` and `floor + 1`,
/// both clipped to `[0, n-1]`; the weight is measured from the clipped
/// lower cell.
#[inline]
fn trace_axis(pos: f64, n: usize) -> (usize, usize, f64) {
    let upper = n as f64 + 0.5;
    let mut p = pos;
    if p < TRACE_MIN {
        p = TRACE_MIN;
    }
    if p > upper {
        p = upper;
    }
    let base = p.floor() as isize;
    let last = (n - 1) as isize;
    let lo = base.clamp(0, last) as usize;
    let hi = (base + 1).clamp(0, last) as usize;
    (lo, hi, p - lo as f64)
}

/// Advect `d0` through `(vx, vy)` over `dt`, overwriting every cell of `d`.
///
/// Traces scale by `dt * (N - 2)`. The corner policy is applied to `d`
/// with `kind` once all cells are written.
pub fn advect(
    kind: BoundaryKind,
    d: &mut ScalarField,
    d0: &ScalarField,
    vx: &ScalarField,
    vy: &ScalarField,
    dt: f64,
) {
    debug_assert_eq!(d.grid(), d0.grid(), "advect: d and d0 on different grids");
    debug_assert_eq!(d.grid(), vx.grid(), "advect: velocity x on a different grid");
    debug_assert_eq!(d.grid(), vy.grid(), "advect: velocity y on a different grid");
    debug_assert!(dt.is_finite(), "advect: non-finite dt");

    let n = d.dim();
    let dtx = dt * (n - 2) as f64;
    let dty = dt * (n - 2) as f64;

    let src = d0.as_slice();
    let u = vx.as_slice();
    let v = vy.as_slice();
    let out = d.as_mut_slice();

    for i in 0..n {
        let row = i * n;
        for j in 0..n {
            let k = row + j;
            let (i0, i1, s1) = trace_axis(i as f64 - dtx * u[k], n);
            let (j0, j1, t1) = trace_axis(j as f64 - dty * v[k], n);
            let s0 = 1.0 - s1;
            let t0 = 1.0 - t1;

            out[k] = s0 * (t0 * src[i0 * n + j0] + t1 * src[i0 * n + j1])
                + s1 * (t0 * src[i1 * n + j0] + t1 * src[i1 * n + j1]);
        }
    }

    enforce_boundary(kind, d);
}
