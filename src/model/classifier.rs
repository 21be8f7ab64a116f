//! Linear classifier over TF-IDF feature vectors

use crate::error::{Result, ResumeAnalyzerError};
use ndarray::{Array1, Array2};
use serde::Deserialize;

/// Serialized form of a trained multinomial logistic regression model.
#[derive(Debug, Deserialize)]
pub struct ClassifierSpec {
    /// One row of feature weights per class.
    pub weights: Vec<Vec<f32>>,
    /// One intercept per class.
    pub intercepts: Vec<f32>,
}

/// Multinomial logistic regression: class scores are `Wx + b`, the
/// probability distribution their softmax. Deterministic given the same
/// feature vector.
pub struct LinearClassifier {
    weights: Array2<f32>,
    intercepts: Array1<f32>,
}

impl LinearClassifier {
    pub fn from_spec(spec: ClassifierSpec) -> Result<Self> {
        let n_classes = spec.weights.len();
        if n_classes < 2 {
            return Err(ResumeAnalyzerError::Artifact(format!(
                "Classifier needs at least 2 classes, found {}",
                n_classes
            )));
        }
        if spec.intercepts.len() != n_classes {
            return Err(ResumeAnalyzerError::Artifact(format!(
                "Classifier has {} weight rows but {} intercepts",
                n_classes,
                spec.intercepts.len()
            )));
        }

        let n_features = spec.weights[0].len();
        if spec.weights.iter().any(|row| row.len() != n_features) {
            return Err(ResumeAnalyzerError::Artifact(
                "Classifier weight rows have inconsistent lengths".to_string(),
            ));
        }

        let flat: Vec<f32> = spec.weights.into_iter().flatten().collect();
        let weights = Array2::from_shape_vec((n_classes, n_features), flat).map_err(|e| {
            ResumeAnalyzerError::Artifact(format!("Invalid classifier weight matrix: {}", e))
        })?;

        Ok(Self {
            weights,
            intercepts: Array1::from_vec(spec.intercepts),
        })
    }

    pub fn n_classes(&self) -> usize {
        self.weights.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.weights.ncols()
    }

    /// Index of the most probable class.
    pub fn predict(&self, features: &Array1<f32>) -> Result<usize> {
        let probabilities = self.predict_proba(features)?;
        let (index, _) = probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .ok_or_else(|| {
                ResumeAnalyzerError::Inference("Empty probability distribution".to_string())
            })?;
        Ok(index)
    }

    /// Softmax probability distribution over all classes.
    pub fn predict_proba(&self, features: &Array1<f32>) -> Result<Array1<f32>> {
        if features.len() != self.n_features() {
            return Err(ResumeAnalyzerError::Inference(format!(
                "Feature vector has {} dimensions, classifier expects {}",
                features.len(),
                self.n_features()
            )));
        }

        let scores = self.weights.dot(features) + &self.intercepts;

        // max-shifted softmax
        let max_score = scores.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let exp = scores.mapv(|s| (s - max_score).exp());
        let total = exp.sum();

        Ok(exp / total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> LinearClassifier {
        LinearClassifier::from_spec(ClassifierSpec {
            weights: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            intercepts: vec![0.0, 0.0],
        })
        .unwrap()
    }

    #[test]
    fn test_predict_picks_max_probability_class() {
        let model = classifier();
        let features = Array1::from_vec(vec![1.0, 0.0]);
        assert_eq!(model.predict(&features).unwrap(), 0);

        let features = Array1::from_vec(vec![0.0, 1.0]);
        assert_eq!(model.predict(&features).unwrap(), 1);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let model = classifier();
        let probabilities = model.predict_proba(&Array1::from_vec(vec![0.3, 0.9])).unwrap();
        let total: f32 = probabilities.sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!(probabilities.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn test_known_softmax_value() {
        let model = classifier();
        let probabilities = model.predict_proba(&Array1::from_vec(vec![1.0, 0.0])).unwrap();
        // softmax([1, 0]) = [e/(e+1), 1/(e+1)]
        let expected = std::f32::consts::E / (std::f32::consts::E + 1.0);
        assert!((probabilities[0] - expected).abs() < 1e-5);
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let model = classifier();
        assert!(model.predict_proba(&Array1::from_vec(vec![1.0])).is_err());
    }

    #[test]
    fn test_ragged_weight_matrix_is_rejected() {
        let result = LinearClassifier::from_spec(ClassifierSpec {
            weights: vec![vec![1.0, 0.0], vec![0.0]],
            intercepts: vec![0.0, 0.0],
        });
        assert!(result.is_err());
    }
}
