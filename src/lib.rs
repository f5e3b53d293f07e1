pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Charge, ChargeHandle, ChargeSystem, NVec3};
pub use simulation::fields::{
    field_at, potential_at, separation_magnitude, separation_vector, COULOMB_K,
};
pub use simulation::sampler::{DropSampler, SphericalScanSampler};
pub use simulation::tracer::{trace_field_line, Streamline, Termination};
pub use simulation::survey::{draw_charges, grid_survey, seed_points, streamline_survey};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ChargeConfig, ParametersConfig, ScenarioConfig, SurveyConfig};

pub use visualization::sink::{
    ChargeColor, DrawEvent, LogSink, NullSink, RecordingSink, RenderSink,
};

pub use error::EmError;

pub use benchmark::benchmark::{bench_potential, bench_steepest_drop, bench_trace};
