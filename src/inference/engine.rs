//! Inference orchestration: preprocessing, classification and heuristics

use crate::error::Result;
use crate::inference::experience::{ExperienceHeuristic, ExperienceLevel};
use crate::inference::metrics::TextMetrics;
use crate::inference::round2;
use crate::inference::summary::generate_summary;
use crate::model::ModelArtifacts;
use crate::preprocessing::{PreprocessedResume, Preprocessor};
use chrono::{SecondsFormat, Utc};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome of the prediction path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub job_category: String,
    /// Maximum posterior probability, rounded to two decimals.
    pub confidence: f32,
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub summary: String,
    /// UTC, ISO-8601 with trailing `Z`.
    pub timestamp: String,
}

/// Prediction plus surface-level text analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(flatten)]
    pub prediction: PredictionResult,
    pub word_count: usize,
    pub character_count: usize,
    pub avg_sentence_length: f32,
    pub sections: HashSet<String>,
    /// First 20 processed tokens.
    pub keywords: Vec<String>,
    /// 0..10, higher reads easier.
    pub readability_score: f32,
}

const KEYWORD_LIMIT: usize = 20;

/// Orchestrates the pipeline: preprocess, vectorize, classify, then
/// layer the heuristic analyses on top. Holds the loaded artifacts by
/// value; all methods take `&self` and are side-effect-free, so a
/// single engine can serve concurrent callers.
pub struct InferenceEngine {
    artifacts: ModelArtifacts,
    preprocessor: Preprocessor,
    experience: ExperienceHeuristic,
    metrics: TextMetrics,
}

impl InferenceEngine {
    /// The artifacts are injected rather than looked up globally; the
    /// caller decides where they come from and when loading failures
    /// are fatal.
    pub fn new(artifacts: ModelArtifacts) -> Self {
        Self {
            artifacts,
            preprocessor: Preprocessor::new(),
            experience: ExperienceHeuristic::new(),
            metrics: TextMetrics::new(),
        }
    }

    /// Classify resume text into a job category with confidence,
    /// skills, experience level and a summary sentence.
    pub fn predict(&self, raw_text: &str) -> Result<PredictionResult> {
        let preprocessed = self.preprocessor.preprocess(raw_text);
        self.predict_preprocessed(raw_text, &preprocessed)
    }

    /// Prediction plus text metrics, section detection and readability.
    pub fn analyze(&self, raw_text: &str) -> Result<AnalysisResult> {
        let preprocessed = self.preprocessor.preprocess(raw_text);
        let prediction = self.predict_preprocessed(raw_text, &preprocessed)?;

        let keywords = preprocessed
            .processed_tokens
            .iter()
            .take(KEYWORD_LIMIT)
            .cloned()
            .collect();

        Ok(AnalysisResult {
            prediction,
            word_count: self.metrics.word_count(raw_text),
            character_count: self.metrics.character_count(raw_text),
            avg_sentence_length: self.metrics.avg_sentence_length(raw_text),
            sections: self.metrics.detect_sections(raw_text),
            keywords,
            readability_score: self.metrics.readability_score(raw_text),
        })
    }

    fn predict_preprocessed(
        &self,
        raw_text: &str,
        preprocessed: &PreprocessedResume,
    ) -> Result<PredictionResult> {
        let features = self.artifacts.vectorizer.transform(&preprocessed.cleaned_text);

        let probabilities = self
            .artifacts
            .classifier
            .predict_proba(&features)
            .map_err(|e| {
                error!("Classification failed: {}", e);
                e
            })?;

        // confidence is the maximum posterior for the chosen input
        let (class_index, &max_probability) = probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .ok_or_else(|| {
                crate::error::ResumeAnalyzerError::Inference(
                    "Empty probability distribution".to_string(),
                )
            })?;

        let job_category = self
            .artifacts
            .labels
            .inverse_transform(class_index)
            .map_err(|e| {
                error!("Label decoding failed: {}", e);
                e
            })?
            .to_string();

        let confidence = round2(max_probability);
        let experience_level = self.experience.infer(raw_text);
        let summary = generate_summary(&job_category, confidence, &preprocessed.skills);

        debug!(
            "Predicted '{}' with confidence {:.2}, {} skills",
            job_category,
            confidence,
            preprocessed.skills.len()
        );

        Ok(PredictionResult {
            job_category,
            confidence,
            skills: preprocessed.skills.clone(),
            experience_level,
            summary,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        })
    }
}
