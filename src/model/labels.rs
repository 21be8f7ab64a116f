//! Label encoding between class indices and category names

use crate::error::{Result, ResumeAnalyzerError};
use serde::Deserialize;

/// Serialized form of a trained label encoder.
#[derive(Debug, Deserialize)]
pub struct LabelSpec {
    /// Class names ordered by classifier output index.
    pub classes: Vec<String>,
}

/// Maps classifier output indices back to human-readable job categories.
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn from_spec(spec: LabelSpec) -> Result<Self> {
        if spec.classes.is_empty() {
            return Err(ResumeAnalyzerError::Artifact(
                "Label encoder has no classes".to_string(),
            ));
        }
        Ok(Self {
            classes: spec.classes,
        })
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Category name for a class index.
    pub fn inverse_transform(&self, index: usize) -> Result<&str> {
        self.classes.get(index).map(String::as_str).ok_or_else(|| {
            ResumeAnalyzerError::Inference(format!(
                "Class index {} outside label set of size {}",
                index,
                self.classes.len()
            ))
        })
    }

    /// All known category names, in classifier index order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
