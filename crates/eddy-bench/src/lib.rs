//! Benchmark profiles for the eddy fluid solver.
//!
//! - [`reference_profile`]: 64x64 grid, 20 sweeps, default step parameters
//! - [`stress_profile`]: 256x256 grid, same parameters
//! - [`seeded_state`]: deterministic dye and swirl for a given grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use eddy_core::Grid;
use eddy_solver::{FluidState, SolverConfig, StableFluids, StepParams};
use eddy_test_utils::{random_field, vortex_velocity};

/// Grid sizes swept by the per-kernel benchmarks.
pub const KERNEL_SIZES: [usize; 3] = [32, 64, 128];

/// A solver plus a populated state and the parameters to step it with.
#[derive(Debug)]
pub struct Profile {
    /// The solver.
    pub solver: StableFluids,
    /// State seeded by [`seeded_state`].
    pub state: FluidState,
    /// Step parameters.
    pub params: StepParams,
}

fn profile(grid_size: usize, seed: u64) -> Profile {
    let config = SolverConfig {
        grid_size,
        iterations: 20,
    };
    let solver = StableFluids::new(config).expect("benchmark profile config is valid");
    let state = seeded_state(solver.grid(), seed);
    Profile {
        solver,
        state,
        params: StepParams::default(),
    }
}

/// 64x64 grid (4K cells) with 20 Jacobi sweeps.
pub fn reference_profile(seed: u64) -> Profile {
    profile(64, seed)
}

/// 256x256 grid (64K cells) with 20 Jacobi sweeps.
pub fn stress_profile(seed: u64) -> Profile {
    profile(256, seed)
}

/// Uniform-noise density in `[0, 1)` under a centred vortex.
pub fn seeded_state(grid: Grid, seed: u64) -> FluidState {
    let mut state = FluidState::new(grid);
    state.density = random_field(grid, seed, 0.0, 1.0);
    state.velocity = vortex_velocity(grid, 0.5);
    state
}
