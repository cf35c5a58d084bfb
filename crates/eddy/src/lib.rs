//! Eddy: a grid-based 2D incompressible fluid solver in the Stable Fluids
//! style.
//!
//! This is the facade crate that re-exports the public API of the eddy
//! sub-crates. For most users, adding `eddy` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use eddy::prelude::*;
//!
//! let mut solver = StableFluids::new(SolverConfig {
//!     grid_size: 32,
//!     iterations: 20,
//! })
//! .unwrap();
//! let mut state = FluidState::new(solver.grid());
//! let params = StepParams::default();
//!
//! for _ in 0..10 {
//!     state.add_density(16, 16, 5.0);
//!     state.add_velocity(16, 16, 1.0, 0.5);
//!     solver.step(&mut state, &params);
//! }
//! check_finite(&state).unwrap();
//! assert!(total_density(&state.density) > 0.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `eddy-core` | `Grid`, `ScalarField`, `VectorField`, `BoundaryKind` |
//! | [`solver`] | `eddy-solver` | Kernels, `StableFluids`, `FluidState`, diagnostics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid, field storage and boundary tags (`eddy-core`).
pub use eddy_core as types;

/// Stable Fluids kernels and the stepping driver (`eddy-solver`).
///
/// The individual kernels live in [`solver::boundary`], [`solver::linear`],
/// [`solver::diffuse`], [`solver::advect`] and [`solver::project`].
pub use eddy_solver as solver;

/// Common imports for typical eddy usage.
///
/// ```rust
/// use eddy::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use eddy_core::{BoundaryKind, Grid, ScalarField, VectorField};

    // Errors
    pub use eddy_core::{FieldError, GridError};
    pub use eddy_solver::{ConfigError, SolverError};

    // Solver
    pub use eddy_solver::{FluidState, Scratch, SolverConfig, StableFluids, StepParams};

    // Diagnostics
    pub use eddy_solver::diagnostics::{
        check_finite, kinetic_energy, max_divergence, total_density,
    };
}
