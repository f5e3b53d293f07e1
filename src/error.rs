//! Error taxonomy for the engine
//!
//! Only construction and configuration can fail. Evaluation never errors:
//! a singular query (point exactly at a charge center) degrades — the
//! potential omits the term, the field returns the infinity sentinel — and
//! an empty store is well-defined (zero potential, zero field).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmError {
    /// A charge was created with a non-positive radius
    #[error("charge radius must be positive, got {radius}")]
    InvalidGeometry { radius: f64 },

    /// A config vector did not have exactly 3 components
    #[error("{field} must have 3 components, got {len}")]
    BadVector { field: &'static str, len: usize },

    /// The sampler was configured with no polar divisions
    #[error("theta_steps must be at least 1, got {theta_steps}")]
    InvalidSampling { theta_steps: usize },
}
