//! Error types for grid and field construction.
//!
//! The numeric kernels never fail; everything that can go wrong is caught
//! here, when a grid is sized or a field is built from caller data.

use std::error::Error;
use std::fmt;

/// Errors from [`Grid::new`](crate::Grid::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The dimension is below the minimum of 2 (no interior cells).
    TooSmall {
        /// The rejected dimension.
        n: usize,
    },
    /// `n * n` does not fit the cell index space.
    TooLarge {
        /// The rejected dimension.
        n: usize,
        /// Largest accepted dimension.
        max: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { n } => write!(f, "grid dimension {n} is below minimum of 2"),
            Self::TooLarge { n, max } => {
                write!(f, "grid dimension {n} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from building or combining fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// A raw buffer does not hold `n * n` cells.
    LengthMismatch {
        /// Required cell count.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// Two fields that must share a grid have different dimensions.
    DimensionMismatch {
        /// Dimension of the receiving field.
        expected: usize,
        /// Dimension of the other field.
        actual: usize,
    },
    /// A numeric boundary tag outside `0..=2`.
    UnknownBoundaryKind {
        /// The rejected tag.
        tag: u8,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer holds {actual} cells, expected {expected}")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "field dimension {actual} does not match grid dimension {expected}")
            }
            Self::UnknownBoundaryKind { tag } => write!(f, "unknown boundary kind tag {tag}"),
        }
    }
}

impl Error for FieldError {}
