//! Boundary-value policy.
//!
//! Only the four corner cells are rewritten, each as the mean of its two
//! orthogonal edge neighbours. Edge cells between the corners keep
//! whatever the kernel wrote there. The [`BoundaryKind`] is accepted so
//! call sites document which quantity they pass, but it does not select a
//! different rule.

use eddy_core::{BoundaryKind, ScalarField};

/// Recompute the corner cells of `x` in place.
///
/// Corners are updated in the order top-left, top-right, bottom-left,
/// bottom-right. On a 2x2 grid later corners read earlier results.
#[inline]
pub fn enforce_boundary(_kind: BoundaryKind, x: &mut ScalarField) {
    let n = x.dim();
    let last = n - 1;
    let cells = x.as_mut_slice();
    let at = |i: usize, j: usize| i * n + j;

    cells[at(0, 0)] = 0.5 * (cells[at(1, 0)] + cells[at(0, 1)]);
    cells[at(0, last)] = 0.5 * (cells[at(1, last)] + cells[at(0, last - 1)]);
    cells[at(last, 0)] = 0.5 * (cells[at(last - 1, 0)] + cells[at(last, 1)]);
    cells[at(last, last)] = 0.5 * (cells[at(last - 1, last)] + cells[at(last, last - 1)]);
}
