//! Field-line tracing by repeated steepest-drop stepping
//!
//! Builds a piecewise-linear approximation of an electric field line: start
//! at a seed point, repeatedly ask the sampler for the adjacent point of
//! steepest potential drop, stop on a step budget or when the next point
//! falls inside a charge's capture radius. Periodic directional markers go
//! out through the render sink so the numeric core carries no drawing
//! dependency of its own.

use crate::simulation::fields::separation_magnitude;
use crate::simulation::params::Parameters;
use crate::simulation::sampler::DropSampler;
use crate::simulation::states::{ChargeSystem, NVec3};
use crate::visualization::sink::{ChargeColor, RenderSink};

/// Why a trace stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The next point fell within a charge's capture radius
    Captured,
    /// The step budget ran out
    StepLimit,
}

/// A completed trace: ordered positions starting at the seed, never empty
#[derive(Debug, Clone)]
pub struct Streamline {
    pub points: Vec<NVec3>,
    pub termination: Termination,
}

// Marker cone geometry, from the reference visualization
const MARKER_RADIUS: f64 = 0.1;
const MARKER_LENGTH: f64 = 0.7;

/// Trace one field line from `seed`
///
/// The path always begins with the seed point itself. Each iteration appends
/// the sampler's steepest-drop point, except that a point within
/// `params.radial_differential` of any charge center terminates the trace
/// without being appended — the path ends at the last point strictly outside
/// all capture radii. On the reference's `(step - 3) % 20 == 1` schedule a
/// directional marker is emitted before the proximity check, so a capturing
/// step can still produce its marker.
pub fn trace_field_line(
    sys: &ChargeSystem,
    sampler: &dyn DropSampler,
    seed: NVec3,
    params: &Parameters,
    sink: &mut dyn RenderSink,
) -> Streamline {
    let mut points = vec![seed];
    let mut current = seed;

    for step in 0..params.max_steps {
        let next = sampler.steepest_drop(sys, current);

        // (step + 16) % 20 == 0 is (step - 3) % 20 == 1 without the
        // negative-modulo wrinkle
        if (step + 16) % 20 == 0 {
            sink.draw_directional_glyph(
                current,
                next - current,
                MARKER_RADIUS,
                MARKER_LENGTH,
                ChargeColor::Positive,
            );
        }

        // Terminate cleanly at the first charge that captures the next point
        for c in &sys.charges {
            if separation_magnitude(next, c.position) <= params.radial_differential {
                return Streamline {
                    points,
                    termination: Termination::Captured,
                };
            }
        }

        points.push(next);
        current = next;
    }

    Streamline {
        points,
        termination: Termination::StepLimit,
    }
}
