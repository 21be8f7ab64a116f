//! TF-IDF feature vectorization over a fixed, trained vocabulary

use crate::error::{Result, ResumeAnalyzerError};
use ndarray::Array1;
use serde::Deserialize;
use std::collections::HashMap;

/// Serialized form of a trained TF-IDF vectorizer.
#[derive(Debug, Deserialize)]
pub struct VectorizerSpec {
    /// Term -> feature column index.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature column.
    pub idf: Vec<f32>,
}

/// Maps cleaned text to a fixed-dimension, L2-normalized TF-IDF vector.
/// Deterministic and pure over the feature space established at
/// training time.
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Array1<f32>,
}

impl TfidfVectorizer {
    pub fn from_spec(spec: VectorizerSpec) -> Result<Self> {
        if spec.idf.is_empty() {
            return Err(ResumeAnalyzerError::Artifact(
                "Vectorizer has an empty feature space".to_string(),
            ));
        }
        let dimension = spec.idf.len();
        for (term, &index) in &spec.vocabulary {
            if index >= dimension {
                return Err(ResumeAnalyzerError::Artifact(format!(
                    "Vectorizer term '{}' maps to column {} outside the {}-dimension feature space",
                    term, index, dimension
                )));
            }
        }

        Ok(Self {
            vocabulary: spec.vocabulary,
            idf: Array1::from_vec(spec.idf),
        })
    }

    /// Number of feature columns.
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Transform cleaned text into its feature vector: raw term counts
    /// weighted by IDF, then L2-normalized. Unknown terms are ignored.
    pub fn transform(&self, cleaned_text: &str) -> Array1<f32> {
        let mut counts = Array1::<f32>::zeros(self.dimension());
        for term in cleaned_text.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(term) {
                counts[index] += 1.0;
            }
        }

        counts *= &self.idf;

        let norm = counts.dot(&counts).sqrt();
        if norm > 0.0 {
            counts /= norm;
        }
        counts
    }
}
