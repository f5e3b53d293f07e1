//! Coulomb superposition over the charge store
//!
//! Pure evaluators mapping a query position to scalar potential or vector
//! field. Both walk every charge in the store and sum contributions; neither
//! ever fails. The singular case (query point exactly at a charge center)
//! degrades instead:
//! - `potential_at` silently omits the offending term,
//! - `field_at` returns the all-infinity sentinel vector, discarding every
//!   other contribution for that call. That sentinel is a preserved quirk of
//!   the reference behavior, kept for output compatibility; do not "fix" it.

use crate::simulation::states::{ChargeSystem, NVec3};

/// Coulomb's constant, N*m^2/C^2
pub const COULOMB_K: f64 = 8.9875517873681764e9;

/// Separation vector from `initial` to `final_`
/// Anti-symmetric: swapping the arguments negates the result
pub fn separation_vector(initial: NVec3, final_: NVec3) -> NVec3 {
    final_ - initial
}

/// Euclidean distance between two positions (symmetric in its arguments)
pub fn separation_magnitude(initial: NVec3, final_: NVec3) -> f64 {
    separation_vector(initial, final_).norm()
}

/// Electrostatic potential at `p` in volts, by superposition
///
/// Sums `charge_i / |d_i|` over all charges and applies Coulomb's constant
/// once at the end (the reference summation order). A charge whose center
/// coincides exactly with `p` contributes nothing. An empty store yields 0.
/// Results across reimplementations agree only up to floating-point
/// summation order; that non-bit-exactness is accepted.
pub fn potential_at(sys: &ChargeSystem, p: NVec3) -> f64 {
    let mut potential = 0.0;
    for c in &sys.charges {
        let distance = separation_magnitude(c.position, p);
        // Zero-distance terms are omitted rather than dividing by zero
        if distance != 0.0 {
            potential += c.charge() / distance;
        }
    }
    COULOMB_K * potential
}

/// Electric field vector at `p` in newtons/coulomb, by superposition
///
/// Each charge's contribution is built from the spherical angles of the
/// charge-to-`p` separation (`theta = acos(dz/|d|)`, `phi = atan2(dy, dx)`)
/// scaled by `charge / |d|^2`; components are summed across charges, scaled
/// by Coulomb's constant, and rounded to 4 decimal places.
///
/// If any charge sits at zero distance from `p` the result is the sentinel
/// all-infinity vector, overriding every accumulated contribution. An empty
/// store yields the zero vector.
pub fn field_at(sys: &ChargeSystem, p: NVec3) -> NVec3 {
    let mut field = NVec3::zeros();
    for c in &sys.charges {
        let separation = separation_vector(c.position, p);
        let distance = separation.norm();
        if distance == 0.0 {
            // Field undefined here; once any charge is singular the whole
            // evaluation collapses to the sentinel, matching the reference
            return NVec3::repeat(f64::INFINITY);
        }
        let theta = (separation.z / distance).acos();
        let phi = separation.y.atan2(separation.x);
        let magnitude = c.charge() / (distance * distance);
        // Unit radial direction from spherical-to-Cartesian conversion
        field.x += theta.sin() * phi.cos() * magnitude;
        field.y += theta.sin() * phi.sin() * magnitude;
        field.z += theta.cos() * magnitude;
    }
    NVec3::new(
        round4(COULOMB_K * field.x),
        round4(COULOMB_K * field.y),
        round4(COULOMB_K * field.z),
    )
}

// Half-away-from-zero rounding to 4 decimal places, as the reference rounds
fn round4(x: f64) -> f64 {
    (x * 1e4).round() / 1e4
}
