//! Configuration types for loading charge scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical knobs (all optional, reference defaults)
//! - [`ChargeConfig`]     – one entry per charged body
//! - [`SurveyConfig`]     – which batch sweep to run
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   theta_steps: 16           # polar sampler divisions (azimuthal = 2x)
//!   radial_differential: 1.0  # sampler offset / capture radius
//!   max_steps: 30             # field line step budget
//!   seed_increment: 0.1       # per-charge seed offset distance
//!   grid_extent: 3            # grid survey covers [-3, 3) per axis
//!
//! survey: "streamlines"       # or "grid", "both"
//!
//! charges:
//!   - position: [ 1.0, 0.0, 7.0 ]
//!     radius: 0.01
//!     charge_density: 0.05
//!   - position: [ -2.0, -3.0, 1.0 ]
//!     radius: 0.01
//!     charge_density: -0.05
//! ```
//!
//! The engine maps this configuration into its runtime scenario bundle,
//! validating geometry and vector lengths along the way.

use serde::Deserialize;

/// Which batch survey the binary runs over the scenario
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyConfig {
    #[serde(rename = "grid")] // directional glyph per lattice point
    Grid,

    #[serde(rename = "streamlines")] // traced field lines from positive charges
    Streamlines,

    #[serde(rename = "both")] // grid glyphs, then streamlines
    Both,
}

/// Numerical parameters for a scenario
/// Every field is optional; omitted knobs take the reference defaults
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub theta_steps: Option<usize>,        // polar sampler divisions
    pub radial_differential: Option<f64>,  // offset / capture radius
    pub max_steps: Option<usize>,          // field line step budget
    pub seed_increment: Option<f64>,       // seed offset distance
    pub grid_extent: Option<i64>,          // half-width of the survey lattice
}

/// Configuration for a single charged body
#[derive(Deserialize, Debug, Clone)]
pub struct ChargeConfig {
    pub position: Vec<f64>,  // sphere center, exactly 3 components, meters
    pub radius: f64,         // sphere radius in meters, must be positive
    pub charge_density: f64, // C/m^3, sign determines polarity
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // numerical knobs, optional block
    pub survey: SurveyConfig,         // which sweep to run
    pub charges: Vec<ChargeConfig>,   // bodies that define the system
}
