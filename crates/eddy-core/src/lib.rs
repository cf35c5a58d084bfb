//! Core types for the eddy fluid solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data model shared by every numeric kernel: the validated grid
//! dimension, dense scalar and vector fields, boundary-kind tags and
//! the error types raised at construction time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod error;
pub mod field;
pub mod grid;

pub use boundary::BoundaryKind;
pub use error::{FieldError, GridError};
pub use field::{ScalarField, VectorField};
pub use grid::Grid;
