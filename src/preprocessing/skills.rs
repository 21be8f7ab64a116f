//! Skill vocabulary matching against raw resume text

use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::HashSet;

/// Matches a fixed vocabulary of skill terms against raw (uncleaned)
/// text, so that compound terms like "Node.js", "C++" and "UI/UX"
/// survive intact.
pub struct SkillExtractor {
    matcher: AhoCorasick,
    vocabulary: Vec<&'static str>,
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillExtractor {
    pub fn new() -> Self {
        let vocabulary: Vec<&'static str> = SKILL_VOCABULARY.to_vec();

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&vocabulary)
            .expect("Invalid skill vocabulary");

        Self { matcher, vocabulary }
    }

    /// Extract distinct skills in first-occurrence order, title-cased.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let bytes = text.as_bytes();
        let mut seen = HashSet::new();
        let mut skills = Vec::new();

        for mat in self.matcher.find_iter(text) {
            let term = self.vocabulary[mat.pattern().as_usize()];
            if !is_word_bounded(bytes, mat.start(), mat.end()) {
                continue;
            }
            if seen.insert(term) {
                skills.push(title_case(term));
            }
        }

        skills
    }
}

/// Word-boundary check that tolerates vocabulary terms beginning or
/// ending in non-word characters ("c++", "c#", "ui/ux"). A boundary
/// holds unless an alphanumeric vocabulary edge touches an adjacent
/// alphanumeric input byte.
fn is_word_bounded(bytes: &[u8], start: usize, end: usize) -> bool {
    let first_alnum = bytes[start].is_ascii_alphanumeric();
    let last_alnum = bytes[end - 1].is_ascii_alphanumeric();

    if first_alnum && start > 0 && bytes[start - 1].is_ascii_alphanumeric() {
        return false;
    }
    if last_alnum && end < bytes.len() && bytes[end].is_ascii_alphanumeric() {
        return false;
    }
    true
}

/// Title-casing where the first letter of every alphabetic run is
/// uppercased and the rest lowered ("ui/ux" -> "Ui/Ux", "node.js" ->
/// "Node.Js").
pub(crate) fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut prev_alpha = false;
    for c in term.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Fixed skill vocabulary spanning languages, frameworks, platforms and
/// soft skills.
const SKILL_VOCABULARY: &[&str] = &[
    "python", "java", "javascript", "react", "angular", "vue", "node.js",
    "sql", "mongodb", "postgresql", "mysql", "django", "flask", "spring",
    "docker", "kubernetes", "aws", "azure", "gcp", "machine learning",
    "deep learning", "data science", "nlp", "computer vision", "tensorflow",
    "pytorch", "git", "agile", "scrum", "project management", "leadership",
    "teamwork", "communication", "problem solving", "analytical",
    "marketing", "sales", "design", "ui/ux", "android", "ios", "flutter",
    "react native", "php", "ruby", "c++", "c#", "html", "css", "bootstrap",
    "jquery", "api", "rest", "microservices",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_extraction_order() {
        let extractor = SkillExtractor::new();
        let skills = extractor.extract("I use Python and Java");
        assert_eq!(skills, vec!["Python", "Java"]);
    }

    #[test]
    fn test_case_insensitive_dedup() {
        let extractor = SkillExtractor::new();
        let skills = extractor.extract("python PYTHON Python");
        assert_eq!(skills, vec!["Python"]);
    }

    #[test]
    fn test_punctuation_bearing_terms() {
        let extractor = SkillExtractor::new();
        let skills = extractor.extract("Shipped C++ services, Node.js tooling and UI/UX mockups");
        assert!(skills.contains(&"C++".to_string()));
        assert!(skills.contains(&"Node.Js".to_string()));
        assert!(skills.contains(&"Ui/Ux".to_string()));
    }

    #[test]
    fn test_whole_word_matching() {
        let extractor = SkillExtractor::new();
        // "restful" must not match "rest", "rapid" must not match "api"
        let skills = extractor.extract("Built restful rapid prototypes");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_longest_match_wins() {
        let extractor = SkillExtractor::new();
        let skills = extractor.extract("JavaScript expert");
        assert_eq!(skills, vec!["Javascript"]);
    }

    #[test]
    fn test_multi_word_terms() {
        let extractor = SkillExtractor::new();
        let skills = extractor.extract("Focus on machine learning and React Native apps");
        assert_eq!(skills, vec!["Machine Learning", "React Native"]);
    }
}
