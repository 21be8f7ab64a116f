//! Composed preprocessing pipeline

use crate::preprocessing::{SkillExtractor, TextCleaner, Tokenizer};
use serde::{Deserialize, Serialize};

/// Immutable output of the preprocessing pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessedResume {
    /// Lowercase, alpha-only, single-spaced rendition of the raw text.
    pub cleaned_text: String,
    /// Lemmatized content words of `cleaned_text`, order preserved.
    pub processed_tokens: Vec<String>,
    /// Distinct title-cased skills in first-occurrence order, matched
    /// against the raw text.
    pub skills: Vec<String>,
}

/// One-pass composition of cleaning, skill extraction and tokenization.
pub struct Preprocessor {
    cleaner: TextCleaner,
    tokenizer: Tokenizer,
    skill_extractor: SkillExtractor,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor {
    pub fn new() -> Self {
        Self {
            cleaner: TextCleaner::new(),
            tokenizer: Tokenizer::new(),
            skill_extractor: SkillExtractor::new(),
        }
    }

    /// Run the full pipeline. Degrades to empty outputs on empty input
    /// rather than erroring; callers wanting an error response validate
    /// non-emptiness beforehand.
    pub fn preprocess(&self, raw_text: &str) -> PreprocessedResume {
        if raw_text.is_empty() {
            return PreprocessedResume {
                cleaned_text: String::new(),
                processed_tokens: Vec::new(),
                skills: Vec::new(),
            };
        }

        let cleaned_text = self.cleaner.clean(raw_text);
        let skills = self.skill_extractor.extract(raw_text);
        let processed_tokens = self.tokenizer.tokenize(&cleaned_text);

        PreprocessedResume {
            cleaned_text,
            processed_tokens,
            skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_produces_all_fields() {
        let preprocessor = Preprocessor::new();
        let result = preprocessor.preprocess(
            "Senior Python developer. Reach me at dev@example.com or http://example.com",
        );

        assert!(!result.cleaned_text.contains('@'));
        assert!(!result.cleaned_text.contains("http"));
        assert!(result.cleaned_text.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
        assert!(result.processed_tokens.contains(&"senior".to_string()));
        assert_eq!(result.skills, vec!["Python"]);
    }

    #[test]
    fn test_tokens_derive_from_cleaned_text() {
        let preprocessor = Preprocessor::new();
        let result = preprocessor.preprocess("Worked with Node.js since 2019");

        // digits never survive cleaning, so no token contains one
        assert!(result.processed_tokens.iter().all(|t| !t.chars().any(|c| c.is_ascii_digit())));
        // skills still see the raw text
        assert_eq!(result.skills, vec!["Node.Js"]);
    }

    #[test]
    fn test_empty_input_degrades_gracefully() {
        let preprocessor = Preprocessor::new();
        let result = preprocessor.preprocess("");
        assert!(result.cleaned_text.is_empty());
        assert!(result.processed_tokens.is_empty());
        assert!(result.skills.is_empty());
    }
}
