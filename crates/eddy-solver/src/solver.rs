//! The solver component: configuration plus snapshot buffer.

use eddy_core::{BoundaryKind, Grid, ScalarField};
use tracing::{debug, trace};

use crate::advect::advect;
use crate::boundary::enforce_boundary;
use crate::config::{ConfigError, SolverConfig, StepParams};
use crate::diffuse::diffuse;
use crate::linear::solve_linear;
use crate::project::project;
use crate::scratch::Scratch;
use crate::state::FluidState;

/// A Stable Fluids solver bound to one grid size and sweep count.
///
/// Holds no field data of its own beyond a reusable snapshot buffer, so
/// independent simulations each own a `StableFluids` and their
/// [`FluidState`]s without sharing anything.
///
/// ```
/// use eddy_solver::{FluidState, SolverConfig, StableFluids, StepParams};
///
/// let mut solver = StableFluids::new(SolverConfig { grid_size: 32, iterations: 10 }).unwrap();
/// let mut state = FluidState::new(solver.grid());
/// state.add_density(16, 16, 10.0);
/// state.add_velocity(16, 16, 2.0, 0.0);
/// solver.step(&mut state, &StepParams::default());
/// assert!(state.density.sum() > 0.0);
/// ```
#[derive(Debug)]
pub struct StableFluids {
    config: SolverConfig,
    grid: Grid,
    scratch: Scratch,
}

impl StableFluids {
    /// Validate `config` and allocate the snapshot buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the grid size or iteration count is invalid.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        debug!(
            grid_size = config.grid_size,
            iterations = config.iterations,
            "stable fluids solver ready"
        );
        Ok(Self {
            grid,
            scratch: Scratch::new(grid),
            config,
        })
    }

    /// The grid every field passed to this solver must live on.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Jacobi sweeps per relaxation solve.
    pub fn iterations(&self) -> usize {
        self.config.iterations
    }

    /// The configuration this solver was built from.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Apply the corner policy to `field`.
    pub fn enforce_boundary(&self, kind: BoundaryKind, field: &mut ScalarField) {
        debug_assert_eq!(field.grid(), self.grid);
        enforce_boundary(kind, field);
    }

    /// Advect `src` through `(vel_x, vel_y)` into `dest`.
    pub fn advect(
        &self,
        kind: BoundaryKind,
        dest: &mut ScalarField,
        src: &ScalarField,
        vel_x: &ScalarField,
        vel_y: &ScalarField,
        dt: f64,
    ) {
        debug_assert_eq!(dest.grid(), self.grid);
        trace!(kind = kind.tag(), dt, "advect");
        advect(kind, dest, src, vel_x, vel_y, dt);
    }

    /// Relax `field` against `rhs` with stencil coefficients `(a, c)`.
    pub fn solve_linear(
        &mut self,
        kind: BoundaryKind,
        field: &mut ScalarField,
        rhs: &ScalarField,
        a: f64,
        c: f64,
    ) {
        debug_assert_eq!(field.grid(), self.grid);
        trace!(kind = kind.tag(), a, c, "solve_linear");
        solve_linear(kind, field, rhs, a, c, self.config.iterations, &mut self.scratch);
    }

    /// Diffuse `prev` into `field` with coefficient `diff` over `dt`.
    pub fn diffuse(
        &mut self,
        kind: BoundaryKind,
        field: &mut ScalarField,
        prev: &ScalarField,
        diff: f64,
        dt: f64,
    ) {
        debug_assert_eq!(field.grid(), self.grid);
        trace!(kind = kind.tag(), diff, dt, "diffuse");
        diffuse(kind, field, prev, diff, dt, self.config.iterations, &mut self.scratch);
    }

    /// Project `(vel_x, vel_y)` towards a divergence-free field.
    pub fn project(
        &mut self,
        vel_x: &mut ScalarField,
        vel_y: &mut ScalarField,
        pressure: &mut ScalarField,
        divergence: &mut ScalarField,
    ) {
        debug_assert_eq!(vel_x.grid(), self.grid);
        trace!("project");
        project(
            vel_x,
            vel_y,
            pressure,
            divergence,
            self.config.iterations,
            &mut self.scratch,
        );
    }

    /// Advance `state` by one step: velocity first, then density.
    pub fn step(&mut self, state: &mut FluidState, params: &StepParams) {
        debug_assert_eq!(state.grid(), self.grid, "step: state on a different grid");
        debug_assert!(params.validate().is_ok(), "step: invalid params {params:?}");
        trace!(dt = params.dt, "step");
        self.velocity_step(state, params);
        self.density_step(state, params);
    }

    fn velocity_step(&mut self, state: &mut FluidState, params: &StepParams) {
        let FluidState {
            velocity,
            velocity_prev,
            pressure,
            divergence,
            ..
        } = state;
        let iterations = self.config.iterations;
        let scratch = &mut self.scratch;

        diffuse(
            BoundaryKind::VelocityX,
            &mut velocity_prev.x,
            &velocity.x,
            params.viscosity,
            params.dt,
            iterations,
            scratch,
        );
        diffuse(
            BoundaryKind::VelocityY,
            &mut velocity_prev.y,
            &velocity.y,
            params.viscosity,
            params.dt,
            iterations,
            scratch,
        );
        project(
            &mut velocity_prev.x,
            &mut velocity_prev.y,
            pressure,
            divergence,
            iterations,
            scratch,
        );

        advect(
            BoundaryKind::VelocityX,
            &mut velocity.x,
            &velocity_prev.x,
            &velocity_prev.x,
            &velocity_prev.y,
            params.dt,
        );
        advect(
            BoundaryKind::VelocityY,
            &mut velocity.y,
            &velocity_prev.y,
            &velocity_prev.x,
            &velocity_prev.y,
            params.dt,
        );
        project(
            &mut velocity.x,
            &mut velocity.y,
            pressure,
            divergence,
            iterations,
            scratch,
        );
    }

    fn density_step(&mut self, state: &mut FluidState, params: &StepParams) {
        let FluidState {
            density,
            density_prev,
            velocity,
            ..
        } = state;

        diffuse(
            BoundaryKind::Scalar,
            density_prev,
            density,
            params.diffusion,
            params.dt,
            self.config.iterations,
            &mut self.scratch,
        );
        advect(
            BoundaryKind::Scalar,
            density,
            density_prev,
            &velocity.x,
            &velocity.y,
            params.dt,
        );
    }
}
