//! Errors surfaced by the solver around (never inside) the kernels.

use std::error::Error;
use std::fmt;

use eddy_core::FieldError;

/// Errors from assembling a [`FluidState`](crate::FluidState) or from the
/// post-step sentinel check.
#[derive(Clone, Debug, PartialEq)]
pub enum SolverError {
    /// Fields handed to the solver do not fit together.
    Field(FieldError),
    /// NaN or infinity found in a field after a step.
    NonFinite {
        /// Name of the offending field (`"density"`, `"velocity.x"`, ...).
        field: &'static str,
        /// First-axis index of the first bad cell.
        row: usize,
        /// Second-axis index of the first bad cell.
        col: usize,
        /// The value found there.
        value: f64,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(e) => write!(f, "field: {e}"),
            Self::NonFinite {
                field,
                row,
                col,
                value,
            } => write!(f, "non-finite value {value} in {field} at ({row}, {col})"),
        }
    }
}

impl Error for SolverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(e) => Some(e),
            Self::NonFinite { .. } => None,
        }
    }
}

impl From<FieldError> for SolverError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}
