//! Build fully-initialized scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - numerical parameters (`Parameters`)
//! - the charge store (`ChargeSystem` populated from config)
//! - the active drop sampler (boxed behind [`DropSampler`])
//!
//! The bundle is what the binary and the surveys consume.

use crate::configuration::config::{ScenarioConfig, SurveyConfig};
use crate::error::EmError;
use crate::simulation::params::Parameters;
use crate::simulation::sampler::{DropSampler, SphericalScanSampler};
use crate::simulation::states::{ChargeSystem, NVec3};

/// A fully-initialized simulation scenario
///
/// The main runtime bundle constructed from a [`ScenarioConfig`]: numeric
/// parameters, the charge store, the sampler strategy, and the survey mode
/// to run. Multiple scenarios can coexist; there is no global state.
pub struct Scenario {
    pub parameters: Parameters,
    pub system: ChargeSystem,
    pub sampler: Box<dyn DropSampler + Send + Sync>,
    pub survey: SurveyConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, EmError> {
        let defaults = Parameters::default();

        // Parameters (runtime) from ParametersConfig, reference defaults
        // filling any omitted knob
        let p_cfg = cfg.parameters;
        let theta_steps = p_cfg.theta_steps.unwrap_or(defaults.theta_steps);
        // A zero-division scan would sample nothing and leave every trace
        // stuck at its seed, so reject it up front
        if theta_steps == 0 {
            return Err(EmError::InvalidSampling { theta_steps });
        }
        let parameters = Parameters {
            theta_steps,
            // The azimuthal count is always derived, never configured
            phi_steps: 2 * theta_steps,
            radial_differential: p_cfg
                .radial_differential
                .unwrap_or(defaults.radial_differential),
            max_steps: p_cfg.max_steps.unwrap_or(defaults.max_steps),
            seed_increment: p_cfg.seed_increment.unwrap_or(defaults.seed_increment),
            grid_extent: p_cfg.grid_extent.unwrap_or(defaults.grid_extent),
        };

        // Charges: map ChargeConfig -> store entries, validating geometry
        let mut system = ChargeSystem::new();
        for cc in &cfg.charges {
            system.add_charge(vec3_field(&cc.position, "position")?, cc.radius, cc.charge_density)?;
        }

        let sampler = Box::new(SphericalScanSampler::with_steps(
            parameters.theta_steps,
            parameters.phi_steps,
            parameters.radial_differential,
        ));

        Ok(Self {
            parameters,
            system,
            sampler,
            survey: cfg.survey,
        })
    }
}

// Config vectors arrive as Vec<f64>; anything but exactly 3 components is a
// config error, not a panic
fn vec3_field(v: &[f64], field: &'static str) -> Result<NVec3, EmError> {
    match v {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(EmError::BadVector {
            field,
            len: v.len(),
        }),
    }
}
