//! Input validation and sanitization ahead of the pipeline

use crate::config::ValidationConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Validation outcome. Warnings never block processing; errors do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Validate resume text before it reaches the pipeline. The pipeline
/// itself degrades gracefully on empty input, so emptiness must be
/// rejected here when an error response is wanted.
pub fn validate_resume_text(text: &str, limits: &ValidationConfig) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if text.trim().is_empty() {
        errors.push("Resume text cannot be empty".to_string());
    } else {
        let length = text.chars().count();
        if length > limits.max_length {
            warnings.push("Resume text is very long, consider shortening it".to_string());
        }
        if length < limits.min_length {
            warnings.push("Resume text seems too short for meaningful analysis".to_string());
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Strip script/iframe blocks and `javascript:` scheme strings from
/// input text.
pub struct Sanitizer {
    script_regex: Regex,
    iframe_regex: Regex,
    js_scheme_regex: Regex,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer {
    pub fn new() -> Self {
        let script_regex =
            Regex::new(r"(?is)<script\b.*?</script>").expect("Invalid script regex");
        let iframe_regex =
            Regex::new(r"(?is)<iframe\b.*?</iframe>").expect("Invalid iframe regex");
        let js_scheme_regex = Regex::new(r"(?i)javascript:").expect("Invalid scheme regex");

        Self {
            script_regex,
            iframe_regex,
            js_scheme_regex,
        }
    }

    pub fn sanitize(&self, text: &str) -> String {
        let without_scripts = self.script_regex.replace_all(text, "");
        let without_iframes = self.iframe_regex.replace_all(&without_scripts, "");
        self.js_scheme_regex.replace_all(&without_iframes, "").into_owned()
    }
}
