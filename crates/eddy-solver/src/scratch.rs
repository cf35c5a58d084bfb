//! Reusable snapshot buffer for whole-field updates.
//!
//! A relaxation sweep must read every neighbour from the pre-sweep state.
//! [`Scratch`] holds one grid-sized buffer that the sweep copies into and
//! reads from, so the hot loop never allocates.

use eddy_core::{Grid, ScalarField};

/// Pre-allocated `f64` buffer sized for one field.
#[derive(Clone, Debug)]
pub struct Scratch {
    buf: Vec<f64>,
}

impl Scratch {
    /// Allocate a buffer for fields on `grid`.
    pub fn new(grid: Grid) -> Self {
        Self {
            buf: vec![0.0; grid.cell_count()],
        }
    }

    /// Copy `field` into the buffer and return the copy.
    ///
    /// Grows the buffer if `field` is larger than any field seen before.
    pub fn snapshot(&mut self, field: &ScalarField) -> &[f64] {
        let src = field.as_slice();
        if self.buf.len() < src.len() {
            self.buf.resize(src.len(), 0.0);
        }
        let dst = &mut self.buf[..src.len()];
        dst.copy_from_slice(src);
        dst
    }

    /// Capacity in cells.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }
}
