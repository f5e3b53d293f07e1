//! Numerical parameters for sampling, tracing, and surveys
//!
//! `Parameters` holds the runtime settings:
//! - sampler discretization (`theta_steps`, `phi_steps`),
//! - capture/offset radius (`radial_differential`),
//! - trace step budget (`max_steps`),
//! - seed offset distance and grid extent for the surveys

#[derive(Debug, Clone)]
pub struct Parameters {
    pub theta_steps: usize, // polar sampler divisions
    pub phi_steps: usize, // azimuthal sampler divisions, 2 * theta_steps
    pub radial_differential: f64, // sampler offset radius and capture radius
    pub max_steps: usize, // field line step budget
    pub seed_increment: f64, // per-charge seed offset distance
    pub grid_extent: i64, // grid survey covers [-extent, extent) per axis
}

impl Default for Parameters {
    fn default() -> Self {
        // Reference constants: 16x32 scan, unit radial step, 30-step lines,
        // 0.1 seed offsets, lattice over [-3, 3)
        Self {
            theta_steps: 16,
            phi_steps: 32,
            radial_differential: 1.0,
            max_steps: 30,
            seed_increment: 0.1,
            grid_extent: 3,
        }
    }
}
