//! Raw text cleaning and normalization

use regex::Regex;

/// Normalizes raw resume text into a lowercase, alpha-only, single-spaced
/// form suitable for vectorization.
pub struct TextCleaner {
    url_regex: Regex,
    email_regex: Regex,
    non_alpha_regex: Regex,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCleaner {
    pub fn new() -> Self {
        // Matching runs on already-lowercased text, so plain lowercase
        // patterns cover the case-insensitive contract.
        let url_regex = Regex::new(r"(?:http|www)\S+").expect("Invalid URL regex");

        let email_regex = Regex::new(r"\S+@\S+").expect("Invalid email regex");

        let non_alpha_regex = Regex::new(r"[^a-z\s]").expect("Invalid non-alpha regex");

        Self {
            url_regex,
            email_regex,
            non_alpha_regex,
        }
    }

    /// Clean raw text. Total over any input; empty input yields an empty
    /// string. The step order is load-bearing: lowercase, strip URLs,
    /// strip emails, blank out non-letters, collapse whitespace.
    pub fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let lowered = text.to_lowercase();

        let without_urls = self.url_regex.replace_all(&lowered, "");
        let without_emails = self.email_regex.replace_all(&without_urls, "");
        let alpha_only = self.non_alpha_regex.replace_all(&without_emails, " ");

        alpha_only.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_are_stripped() {
        let cleaner = TextCleaner::new();
        let cleaned = cleaner.clean("See my portfolio at http://x.com and www.example.org today");
        assert!(!cleaned.contains("http"));
        assert!(!cleaned.contains("x.com"));
        assert!(!cleaned.contains("www"));
    }

    #[test]
    fn test_emails_are_stripped() {
        let cleaner = TextCleaner::new();
        let cleaned = cleaner.clean("Contact john.doe@example.com for details");
        assert!(!cleaned.contains("john"));
        assert!(!cleaned.contains("example"));
        assert!(cleaned.contains("contact"));
        assert!(cleaned.contains("details"));
    }

    #[test]
    fn test_output_is_lowercase_alpha_only() {
        let cleaner = TextCleaner::new();
        let cleaned = cleaner.clean("Senior C++ Developer, 10+ years! (Remote)");
        assert!(cleaned.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
        assert!(!cleaned.contains("  "));
        assert_eq!(cleaned, cleaned.trim());
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let cleaner = TextCleaner::new();
        assert_eq!(cleaner.clean("hello \t\n  world"), "hello world");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let cleaner = TextCleaner::new();
        assert_eq!(cleaner.clean(""), "");
        assert_eq!(cleaner.clean("12345 !!!"), "");
    }
}
