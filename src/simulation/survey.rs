//! Batch drivers over the field evaluator and the tracer
//!
//! Two sweep modes, both thin orchestration with no new numerics:
//! - grid survey: a directional glyph per integer lattice point, sized by
//!   the local potential drop,
//! - streamline survey: a fixed 14-seed pattern around every positively
//!   charged body, one trace per seed.
//!
//! Everything observable leaves through the [`RenderSink`]; nothing here
//! feeds back into the physics.

use log::debug;

use crate::simulation::fields::potential_at;
use crate::simulation::params::Parameters;
use crate::simulation::sampler::DropSampler;
use crate::simulation::states::{Charge, ChargeSystem, NVec3};
use crate::simulation::tracer::trace_field_line;
use crate::visualization::sink::{ChargeColor, RenderSink};

// Glyph sizing divisors from the reference. The resulting radius/length are
// a visualization proxy for the local potential drop, not a field magnitude.
const GLYPH_RADIUS_DIVISOR: f64 = 20000.0;
const GLYPH_LENGTH_DIVISOR: f64 = 5000.0;

/// Render every charge in the store as a sphere colored by polarity
pub fn draw_charges(sys: &ChargeSystem, sink: &mut dyn RenderSink) {
    for c in &sys.charges {
        sink.draw_sphere(c.position, c.radius, ChargeColor::from_density(c.charge_density));
    }
}

/// Directional-glyph sweep over the integer lattice
///
/// For every lattice point in `[-extent, extent)` per axis, find the
/// steepest-drop point and emit a glyph along the drop direction, sized by
/// the potential difference between the two points.
pub fn grid_survey(
    sys: &ChargeSystem,
    sampler: &dyn DropSampler,
    params: &Parameters,
    sink: &mut dyn RenderSink,
) {
    let e = params.grid_extent;
    debug!("grid survey over [{}, {})^3, {} charges", -e, e, sys.len());
    for x in -e..e {
        for y in -e..e {
            for z in -e..e {
                let position = NVec3::new(x as f64, y as f64, z as f64);
                let drop_point = sampler.steepest_drop(sys, position);
                // E = -grad V, so the drop in potential toward the sampled
                // point stands in for the field strength
                let potential_difference =
                    potential_at(sys, position) - potential_at(sys, drop_point);
                sink.draw_directional_glyph(
                    position,
                    drop_point - position,
                    potential_difference / GLYPH_RADIUS_DIVISOR,
                    potential_difference / GLYPH_LENGTH_DIVISOR,
                    ChargeColor::Positive,
                );
            }
        }
    }
}

/// The fixed 14-seed pattern around one charge center: the 6 axis-aligned
/// offsets at `increment` and the 8 cube-diagonal offsets at
/// `increment * sqrt(1/3)`
pub fn seed_points(charge: &Charge, increment: f64) -> Vec<NVec3> {
    let p = charge.position;
    let d = (1.0f64 / 3.0).sqrt() * increment;
    vec![
        p + NVec3::new(increment, 0.0, 0.0),
        p + NVec3::new(-increment, 0.0, 0.0),
        p + NVec3::new(0.0, increment, 0.0),
        p + NVec3::new(0.0, -increment, 0.0),
        p + NVec3::new(0.0, 0.0, increment),
        p + NVec3::new(0.0, 0.0, -increment),
        p + NVec3::new(d, d, d),
        p + NVec3::new(-d, -d, d),
        p + NVec3::new(d, -d, d),
        p + NVec3::new(-d, d, d),
        p + NVec3::new(d, d, -d),
        p + NVec3::new(-d, -d, -d),
        p + NVec3::new(d, -d, -d),
        p + NVec3::new(-d, d, -d),
    ]
}

/// Trace field lines outward from every positively charged body
///
/// Neutral and negative bodies are skipped: lines are only seeded at
/// positive sources and terminate wherever capture stops them. Each
/// completed path is handed to the sink as one curve.
pub fn streamline_survey(
    sys: &ChargeSystem,
    sampler: &dyn DropSampler,
    params: &Parameters,
    sink: &mut dyn RenderSink,
) {
    for c in &sys.charges {
        if c.charge_density <= 0.0 {
            continue;
        }
        let seeds = seed_points(c, params.seed_increment);
        debug!(
            "tracing {} field lines from charge at {:?}",
            seeds.len(),
            c.position
        );
        for seed in seeds {
            let line = trace_field_line(sys, sampler, seed, params, sink);
            sink.draw_curve(&line.points, ChargeColor::Positive);
        }
    }
}
