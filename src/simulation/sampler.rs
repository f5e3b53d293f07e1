//! Steepest-potential-drop sampling
//!
//! Approximates the direction of steepest potential decrease at a point by
//! brute-force directional sampling, because an arbitrary superposition has
//! no closed-form minimum direction. One strategy ships
//! ([`SphericalScanSampler`]); the trait is the seam for substituting an
//! analytic-gradient tracer later.

use crate::simulation::fields::potential_at;
use crate::simulation::states::{ChargeSystem, NVec3};

/// Strategy for finding the adjacent point of steepest potential drop
pub trait DropSampler {
    /// Return the sampled point around `p` with the lowest potential
    /// Must be deterministic for a fixed store state and query point
    fn steepest_drop(&self, sys: &ChargeSystem, p: NVec3) -> NVec3;
}

/// Brute-force spherical scan over a fixed grid of unit-radius offsets
///
/// `phi_steps` is twice `theta_steps`, but the azimuthal angular increment
/// reuses the polar increment `pi/theta_steps` instead of `2*pi/phi_steps`.
/// That asymmetry oversamples the azimuthal range relative to a uniform
/// grid; it is the reference discretization and is kept exactly so traces
/// reproduce bit-for-bit.
#[derive(Debug, Clone)]
pub struct SphericalScanSampler {
    pub theta_steps: usize, // polar divisions over [0, pi)
    pub phi_steps: usize, // azimuthal divisions, 2 * theta_steps
    pub radial_differential: f64, // offset radius, one length unit
}

impl SphericalScanSampler {
    /// Reference grid: the azimuthal count is twice the polar count
    pub fn new(theta_steps: usize, radial_differential: f64) -> Self {
        Self::with_steps(theta_steps, 2 * theta_steps, radial_differential)
    }

    pub fn with_steps(theta_steps: usize, phi_steps: usize, radial_differential: f64) -> Self {
        Self {
            theta_steps,
            phi_steps,
            radial_differential,
        }
    }
}

impl Default for SphericalScanSampler {
    fn default() -> Self {
        Self::new(16, 1.0)
    }
}

impl DropSampler for SphericalScanSampler {
    /// 512 potential evaluations per call at the default 16x32 grid, each
    /// O(charges) — the dominant cost of the whole system
    fn steepest_drop(&self, sys: &ChargeSystem, p: NVec3) -> NVec3 {
        // Both angles advance by the polar increment (see type docs)
        let angular_differential = std::f64::consts::PI / self.theta_steps as f64;

        let mut lowest_potential = f64::INFINITY;
        let mut lowest_point = p;
        let mut first = true;

        for n in 0..self.theta_steps {
            for m in 0..self.phi_steps {
                let theta = n as f64 * angular_differential;
                let phi = m as f64 * angular_differential;
                // Spherical to Cartesian at fixed radius
                let offset = NVec3::new(
                    self.radial_differential * theta.sin() * phi.cos(),
                    self.radial_differential * theta.sin() * phi.sin(),
                    self.radial_differential * theta.cos(),
                );
                let candidate = p + offset;
                let potential = potential_at(sys, candidate);
                // First sample initializes the minimum unconditionally;
                // strict < keeps the first-encountered point on ties
                if first || potential < lowest_potential {
                    lowest_potential = potential;
                    lowest_point = candidate;
                    first = false;
                }
            }
        }
        lowest_point
    }
}
