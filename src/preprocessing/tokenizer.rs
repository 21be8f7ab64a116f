//! Tokenization and lemmatization of cleaned resume text

use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Splits cleaned text into content-word lemmas.
///
/// Stopwords, pure punctuation and tokens of length <= 2 are dropped;
/// surviving tokens are reduced to a dictionary base form. Original
/// token order is preserved.
pub struct Tokenizer {
    stop_words: HashSet<&'static str>,
    lemmatizer: Lemmatizer,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Tokenize cleaned text into lemmatized content words. Empty input
    /// yields an empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut tokens = Vec::new();
        for word in text.unicode_words() {
            let word = word.to_lowercase();

            if self.stop_words.contains(word.as_str()) {
                continue;
            }
            if !word.chars().any(|c| c.is_alphanumeric()) {
                continue;
            }
            if word.chars().count() <= 2 {
                continue;
            }

            tokens.push(self.lemmatizer.lemmatize(&word));
        }

        tokens
    }
}

/// Rule-based English lemmatizer: an irregular-form table plus ordered
/// suffix rules. Best effort, not guaranteed correct for all forms.
struct Lemmatizer {
    irregulars: HashMap<&'static str, &'static str>,
}

impl Lemmatizer {
    fn new() -> Self {
        let irregulars: HashMap<&'static str, &'static str> = [
            ("children", "child"),
            ("men", "man"),
            ("women", "woman"),
            ("people", "person"),
            ("feet", "foot"),
            ("teeth", "tooth"),
            ("geese", "goose"),
            ("mice", "mouse"),
            ("data", "data"),
            ("analyses", "analysis"),
            ("theses", "thesis"),
            ("criteria", "criterion"),
            ("media", "medium"),
            ("ran", "run"),
            ("led", "lead"),
            ("built", "build"),
            ("wrote", "write"),
            ("taught", "teach"),
            ("went", "go"),
            ("made", "make"),
            ("better", "good"),
            ("best", "good"),
        ]
        .into_iter()
        .collect();

        Self { irregulars }
    }

    fn lemmatize(&self, word: &str) -> String {
        if let Some(&lemma) = self.irregulars.get(word) {
            return lemma.to_string();
        }

        // First matching rule wins.
        if let Some(stem) = word.strip_suffix("ies") {
            if stem.len() > 1 {
                return format!("{}y", stem);
            }
        }
        if word.ends_with("sses") || word.ends_with("xes") || word.ends_with("zes")
            || word.ends_with("ches") || word.ends_with("shes")
        {
            return word[..word.len() - 2].to_string();
        }
        if let Some(stem) = word.strip_suffix("ing") {
            if stem.len() >= 3 && has_vowel(stem) {
                return undouble(stem);
            }
        }
        if let Some(stem) = word.strip_suffix("ed") {
            if stem.len() >= 3 && has_vowel(stem) {
                return undouble(stem);
            }
        }
        if word.len() > 3
            && word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
        {
            return word[..word.len() - 1].to_string();
        }

        word.to_string()
    }
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

/// Collapse a doubled trailing consonant left behind by suffix removal
/// ("running" -> "runn" -> "run"). Doubled "l" and "s" stay ("skill").
fn undouble(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() >= 2 {
        let last = chars[chars.len() - 1];
        let prev = chars[chars.len() - 2];
        if last == prev && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u' | 'l' | 's') {
            return chars[..chars.len() - 1].iter().collect();
        }
    }
    stem.to_string()
}

/// Fixed English stopword set.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she",
    "her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
    "theirs", "themselves", "what", "which", "who", "whom", "this", "that",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of",
    "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "s", "t", "can", "will", "just", "don", "should", "now", "d",
    "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn",
    "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
    "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];
