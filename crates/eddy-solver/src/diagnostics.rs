//! Read-only measurements over fields and states.

use eddy_core::{ScalarField, VectorField};
use tracing::warn;

use crate::error::SolverError;
use crate::state::FluidState;

/// Sum of every density cell.
pub fn total_density(density: &ScalarField) -> f64 {
    density.sum()
}

/// Mean kinetic energy over interior cells: `0.5 * <vx² + vy²>`.
pub fn kinetic_energy(velocity: &VectorField) -> f64 {
    let grid = velocity.grid();
    let mut sum = 0.0;
    let mut count = 0usize;
    for i in grid.interior() {
        for j in grid.interior() {
            let u = velocity.x[(i, j)];
            let v = velocity.y[(i, j)];
            sum += u * u + v * v;
            count += 1;
        }
    }
    if count > 0 {
        0.5 * sum / count as f64
    } else {
        0.0
    }
}

/// Largest interior divergence magnitude, scaled the way the projector
/// scales it: `|0.5 * (du/di + dv/dj) / N|` with central differences.
pub fn max_divergence(velocity: &VectorField) -> f64 {
    let grid = velocity.grid();
    let n = grid.size();
    let (u, v) = (&velocity.x, &velocity.y);
    let mut max = 0.0_f64;
    for i in grid.interior() {
        for j in grid.interior() {
            let d = 0.5 * (u[(i + 1, j)] - u[(i - 1, j)] + v[(i, j + 1)] - v[(i, j - 1)])
                / n as f64;
            max = max.max(d.abs());
        }
    }
    max
}

/// Scan every field of `state` for NaN or infinity.
///
/// # Errors
///
/// Returns [`SolverError::NonFinite`] naming the first field (in the order
/// density, velocity, pressure, divergence, then the previous-step buffers)
/// and row-major cell that fails.
pub fn check_finite(state: &FluidState) -> Result<(), SolverError> {
    let fields: [(&'static str, &ScalarField); 8] = [
        ("density", &state.density),
        ("velocity.x", &state.velocity.x),
        ("velocity.y", &state.velocity.y),
        ("pressure", &state.pressure),
        ("divergence", &state.divergence),
        ("density_prev", &state.density_prev),
        ("velocity_prev.x", &state.velocity_prev.x),
        ("velocity_prev.y", &state.velocity_prev.y),
    ];
    for (field, f) in fields {
        if let Some((row, col, value)) = f.find_non_finite() {
            warn!(field, row, col, value, "non-finite value in fluid state");
            return Err(SolverError::NonFinite {
                field,
                row,
                col,
                value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eddy_core::Grid;
    use eddy_test_utils::radial_velocity;

    #[test]
    fn kinetic_energy_of_still_and_uniform_flow() {
        let g = Grid::new(8).unwrap();
        let mut vel = VectorField::zeros(g);
        assert_eq!(kinetic_energy(&vel), 0.0);
        vel.x.fill(1.0);
        assert!((kinetic_energy(&vel) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn kinetic_energy_on_empty_interior() {
        let g = Grid::new(2).unwrap();
        let mut vel = VectorField::zeros(g);
        vel.x.fill(3.0);
        assert_eq!(kinetic_energy(&vel), 0.0);
    }

    #[test]
    fn divergence_of_uniform_and_radial_flow() {
        let g = Grid::new(12).unwrap();
        let mut vel = VectorField::zeros(g);
        vel.x.fill(2.0);
        vel.y.fill(-1.0);
        assert_eq!(max_divergence(&vel), 0.0);

        let radial = radial_velocity(g, 0.01);
        assert!(max_divergence(&radial) > 0.0);
    }

    #[test]
    fn total_density_sums_all_cells() {
        let g = Grid::new(3).unwrap();
        let f = ScalarField::filled(g, 0.5);
        assert_eq!(total_density(&f), 4.5);
    }

    #[test]
    fn check_finite_names_first_bad_field() {
        let g = Grid::new(6).unwrap();
        let mut state = FluidState::new(g);
        assert!(check_finite(&state).is_ok());

        state.pressure[(2, 3)] = f64::NAN;
        state.velocity_prev.y[(1, 1)] = f64::INFINITY;
        match check_finite(&state) {
            Err(SolverError::NonFinite {
                field, row, col, ..
            }) => {
                assert_eq!(field, "pressure");
                assert_eq!((row, col), (2, 3));
            }
            other => panic!("expected NonFinite, got {other:?}"),
        }
    }
}
