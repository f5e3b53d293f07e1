pub mod states;
pub mod params;
pub mod fields;
pub mod sampler;
pub mod tracer;
pub mod survey;
pub mod scenario;
