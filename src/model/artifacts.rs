//! All-or-nothing loading of the pre-trained model artifacts

use crate::error::{Result, ResumeAnalyzerError};
use crate::model::classifier::{ClassifierSpec, LinearClassifier};
use crate::model::labels::{LabelEncoder, LabelSpec};
use crate::model::vectorizer::{TfidfVectorizer, VectorizerSpec};
use log::info;
use serde::de::DeserializeOwned;
use std::path::Path;

const VECTORIZER_FILE: &str = "vectorizer.json";
const CLASSIFIER_FILE: &str = "classifier.json";
const LABELS_FILE: &str = "labels.json";

/// The three trained artifacts the inference engine depends on, loaded
/// once at startup and immutable thereafter. Partial loads fail whole.
pub struct ModelArtifacts {
    pub vectorizer: TfidfVectorizer,
    pub classifier: LinearClassifier,
    pub labels: LabelEncoder,
}

impl ModelArtifacts {
    /// Load and cross-validate all artifacts from a directory. Any
    /// missing, corrupt or mutually inconsistent artifact fails the
    /// load; callers treat that as fatal.
    pub fn load(artifacts_dir: &Path) -> Result<Self> {
        let vectorizer_spec: VectorizerSpec = read_artifact(artifacts_dir, VECTORIZER_FILE)?;
        let classifier_spec: ClassifierSpec = read_artifact(artifacts_dir, CLASSIFIER_FILE)?;
        let label_spec: LabelSpec = read_artifact(artifacts_dir, LABELS_FILE)?;

        let vectorizer = TfidfVectorizer::from_spec(vectorizer_spec)?;
        let classifier = LinearClassifier::from_spec(classifier_spec)?;
        let labels = LabelEncoder::from_spec(label_spec)?;

        if classifier.n_features() != vectorizer.dimension() {
            return Err(ResumeAnalyzerError::Artifact(format!(
                "Classifier expects {} features but vectorizer produces {}",
                classifier.n_features(),
                vectorizer.dimension()
            )));
        }
        if classifier.n_classes() != labels.n_classes() {
            return Err(ResumeAnalyzerError::Artifact(format!(
                "Classifier has {} classes but label encoder has {}",
                classifier.n_classes(),
                labels.n_classes()
            )));
        }

        info!(
            "Model artifacts loaded: {} features, {} classes",
            vectorizer.dimension(),
            labels.n_classes()
        );

        Ok(Self {
            vectorizer,
            classifier,
            labels,
        })
    }
}

fn read_artifact<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<T> {
    let path = dir.join(file_name);
    let content = std::fs::read_to_string(&path).map_err(|e| {
        ResumeAnalyzerError::Artifact(format!("Failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        ResumeAnalyzerError::Artifact(format!("Failed to parse {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_valid_artifacts(dir: &Path) {
        fs::write(
            dir.join(VECTORIZER_FILE),
            r#"{"vocabulary": {"python": 0, "sales": 1}, "idf": [1.0, 1.0]}"#,
        )
        .unwrap();
        fs::write(
            dir.join(CLASSIFIER_FILE),
            r#"{"weights": [[2.0, 0.0], [0.0, 2.0]], "intercepts": [0.0, 0.0]}"#,
        )
        .unwrap();
        fs::write(
            dir.join(LABELS_FILE),
            r#"{"classes": ["Software Engineering", "Sales"]}"#,
        )
        .unwrap();
    }

    #[test]
    fn test_load_succeeds_with_consistent_artifacts() {
        let dir = TempDir::new().unwrap();
        write_valid_artifacts(dir.path());

        let artifacts = ModelArtifacts::load(dir.path()).unwrap();
        assert_eq!(artifacts.vectorizer.dimension(), 2);
        assert_eq!(artifacts.classifier.n_classes(), 2);
        assert_eq!(artifacts.labels.n_classes(), 2);
    }

    #[test]
    fn test_missing_file_fails_whole_load() {
        let dir = TempDir::new().unwrap();
        write_valid_artifacts(dir.path());
        fs::remove_file(dir.path().join(LABELS_FILE)).unwrap();

        assert!(ModelArtifacts::load(dir.path()).is_err());
    }

    #[test]
    fn test_corrupt_json_fails_whole_load() {
        let dir = TempDir::new().unwrap();
        write_valid_artifacts(dir.path());
        fs::write(dir.path().join(CLASSIFIER_FILE), "not json").unwrap();

        assert!(ModelArtifacts::load(dir.path()).is_err());
    }

    #[test]
    fn test_label_count_mismatch_fails_load() {
        let dir = TempDir::new().unwrap();
        write_valid_artifacts(dir.path());
        fs::write(
            dir.path().join(LABELS_FILE),
            r#"{"classes": ["Software Engineering", "Sales", "Marketing"]}"#,
        )
        .unwrap();

        assert!(ModelArtifacts::load(dir.path()).is_err());
    }

    #[test]
    fn test_feature_dimension_mismatch_fails_load() {
        let dir = TempDir::new().unwrap();
        write_valid_artifacts(dir.path());
        fs::write(
            dir.path().join(VECTORIZER_FILE),
            r#"{"vocabulary": {"python": 0}, "idf": [1.0]}"#,
        )
        .unwrap();

        assert!(ModelArtifacts::load(dir.path()).is_err());
    }
}
