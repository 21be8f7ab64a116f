//! Raw-text metrics: counts, sections and readability

use crate::inference::round2;
use crate::preprocessing::skills::title_case;
use regex::Regex;
use std::collections::HashSet;

/// Section headers recognized in resume text.
const SECTION_HEADERS: &[&str] = &[
    "education",
    "experience",
    "skills",
    "projects",
    "certifications",
    "awards",
    "contact",
    "summary",
    "objective",
    "work experience",
    "professional experience",
];

/// Surface-level text statistics computed on the raw (uncleaned) text.
pub struct TextMetrics {
    sentence_regex: Regex,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMetrics {
    pub fn new() -> Self {
        let sentence_regex = Regex::new(r"[.!?]+").expect("Invalid sentence regex");
        Self { sentence_regex }
    }

    pub fn word_count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }

    pub fn character_count(&self, text: &str) -> usize {
        text.chars().count()
    }

    /// Mean words per sentence, two decimals; 0 if the text has no
    /// non-empty sentence fragments.
    pub fn avg_sentence_length(&self, text: &str) -> f32 {
        let sentences = self.split_sentences(text);
        if sentences.is_empty() {
            return 0.0;
        }

        let total_words: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
        round2(total_words as f32 / sentences.len() as f32)
    }

    /// Recognized section headers present in the text, as a set of
    /// title-cased names. Order is not meaningful.
    pub fn detect_sections(&self, text: &str) -> HashSet<String> {
        let lower = text.to_lowercase();
        SECTION_HEADERS
            .iter()
            .filter(|header| lower.contains(*header))
            .map(|header| title_case(header))
            .collect()
    }

    /// Simplified Automated Readability Index mapped onto a 0..10 scale:
    /// `clamp(10 - ari / 2, 0, 10)` with
    /// `ari = 4.71 * (chars / words) + 0.5 * (words / sentences) - 21.43`.
    /// Exactly 0.0 when there are no words or no sentences.
    pub fn readability_score(&self, text: &str) -> f32 {
        let words = self.word_count(text);
        let sentences = self.split_sentences(text).len();

        if words == 0 || sentences == 0 {
            return 0.0;
        }

        let characters = text.chars().filter(|c| *c != ' ').count();
        let ari = 4.71 * (characters as f32 / words as f32)
            + 0.5 * (words as f32 / sentences as f32)
            - 21.43;

        round2((10.0 - ari / 2.0).clamp(0.0, 10.0))
    }

    fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.sentence_regex
            .split(text)
            .filter(|fragment| !fragment.trim().is_empty())
            .collect()
    }
}
