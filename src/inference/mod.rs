//! Inference engine and heuristic analyses

pub mod engine;
pub mod experience;
pub mod metrics;
pub mod summary;

pub use engine::{AnalysisResult, InferenceEngine, PredictionResult};
pub use experience::{ExperienceHeuristic, ExperienceLevel};

/// Round to two decimal places.
pub(crate) fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
