//! Solver configuration, per-step parameters, and validation errors.
//!
//! [`SolverConfig`] fixes the grid size and relaxation sweep count for the
//! lifetime of a [`StableFluids`](crate::StableFluids) instance.
//! [`StepParams`] carries the physical constants of one step and may vary
//! between calls.

use std::error::Error;
use std::fmt;

use eddy_core::{Grid, GridError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`SolverConfig::validate`] and [`StepParams::validate`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The grid size is unusable.
    Grid(GridError),
    /// `iterations` is zero; the relaxation solver would do nothing.
    ZeroIterations,
    /// `dt` is NaN, infinite, zero, or negative.
    InvalidTimestep {
        /// The rejected value.
        value: f64,
    },
    /// A diffusion-type coefficient is negative or not finite.
    NegativeCoefficient {
        /// Which coefficient (`"viscosity"` or `"diffusion"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::ZeroIterations => write!(f, "iterations must be at least 1"),
            Self::InvalidTimestep { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::NegativeCoefficient { name, value } => {
                write!(f, "{name} must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SolverConfig ───────────────────────────────────────────────────

/// Fixed configuration of one simulation instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Side length `N` of every field. Default: 64.
    pub grid_size: usize,
    /// Jacobi sweeps per relaxation solve. Default: 20.
    pub iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            grid_size: 64,
            iterations: 20,
        }
    }
}

impl SolverConfig {
    /// Check structural invariants and return the validated grid.
    pub fn validate(&self) -> Result<Grid, ConfigError> {
        let grid = Grid::new(self.grid_size)?;
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(grid)
    }
}

// ── StepParams ─────────────────────────────────────────────────────

/// Physical constants for one [`step`](crate::StableFluids::step).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParams {
    /// Timestep. Default: 0.1.
    pub dt: f64,
    /// Velocity diffusion coefficient. Default: 0.0001.
    pub viscosity: f64,
    /// Density diffusion coefficient. Default: 0.0001.
    pub diffusion: f64,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            dt: 0.1,
            viscosity: 0.0001,
            diffusion: 0.0001,
        }
    }
}

impl StepParams {
    /// Reject parameters the kernels would turn into degenerate numerics.
    ///
    /// The kernels themselves never call this; it is for drivers that take
    /// parameters from outside.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimestep { value: self.dt });
        }
        for (name, value) in [("viscosity", self.viscosity), ("diffusion", self.diffusion)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NegativeCoefficient { name, value });
            }
        }
        Ok(())
    }
}
