//! Stable Fluids numerics for the eddy workspace.
//!
//! Five kernels operate in place on caller-owned fields:
//!
//! - [`boundary::enforce_boundary`]: corner averaging on one field.
//! - [`linear::solve_linear`]: fixed-count Jacobi relaxation of the
//!   5-point stencil.
//! - [`diffuse::diffuse`]: implicit diffusion via the relaxation solver.
//! - [`advect::advect`]: semi-Lagrangian backward trace with bilinear
//!   sampling.
//! - [`project::project`]: pressure projection to a divergence-free field.
//!
//! [`StableFluids`] holds the grid size, iteration count and snapshot
//! buffer, and exposes the kernels as methods plus a whole [`step`] over a
//! [`FluidState`].
//!
//! # Step order
//!
//! 1. diffuse velocity → project
//! 2. advect velocity through itself → project
//! 3. diffuse density → advect density
//!
//! [`step`]: StableFluids::step

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod advect;
pub mod boundary;
pub mod config;
pub mod diagnostics;
pub mod diffuse;
pub mod error;
pub mod linear;
pub mod project;
pub mod scratch;
pub mod solver;
pub mod state;

pub use config::{ConfigError, SolverConfig, StepParams};
pub use error::SolverError;
pub use scratch::Scratch;
pub use solver::StableFluids;
pub use state::FluidState;
