//! Experience-level inference from resume wording

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Junior,
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Senior,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceLevel::Junior => write!(f, "Junior"),
            ExperienceLevel::MidLevel => write!(f, "Mid-Level"),
            ExperienceLevel::Senior => write!(f, "Senior"),
        }
    }
}

const JUNIOR_KEYWORDS: &[&str] = &[
    "junior", "entry level", "intern", "fresh", "beginner", "student", "graduate",
];
const MID_KEYWORDS: &[&str] = &[
    "mid", "associate", "experienced", "intermediate", "2-5 years", "3-5 years",
];
const SENIOR_KEYWORDS: &[&str] = &[
    "senior", "lead", "principal", "architect", "manager", "expert", "10+ years",
];

/// Deterministic rule table over fixed keyword lists, with a
/// years-of-experience fallback. The rule order and the 8/3 year
/// thresholds are part of the contract.
pub struct ExperienceHeuristic {
    years_regex: Regex,
}

impl Default for ExperienceHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceHeuristic {
    pub fn new() -> Self {
        let years_regex = Regex::new(r"(\d+)\+?\s*(?:years?|yrs?)").expect("Invalid years regex");
        Self { years_regex }
    }

    pub fn infer(&self, raw_text: &str) -> ExperienceLevel {
        let lower = raw_text.to_lowercase();

        let junior_count = count_hits(&lower, JUNIOR_KEYWORDS);
        let mid_count = count_hits(&lower, MID_KEYWORDS);
        let senior_count = count_hits(&lower, SENIOR_KEYWORDS);

        if senior_count > mid_count && senior_count > junior_count {
            return ExperienceLevel::Senior;
        }
        if mid_count > junior_count {
            return ExperienceLevel::MidLevel;
        }
        if junior_count > 0 {
            return ExperienceLevel::Junior;
        }

        match self.max_years_mentioned(&lower) {
            Some(years) if years >= 8 => ExperienceLevel::Senior,
            Some(years) if years >= 3 => ExperienceLevel::MidLevel,
            Some(_) => ExperienceLevel::Junior,
            None => ExperienceLevel::MidLevel,
        }
    }

    fn max_years_mentioned(&self, lower: &str) -> Option<u32> {
        self.years_regex
            .captures_iter(lower)
            .filter_map(|cap| cap[1].parse::<u32>().ok())
            .max()
    }
}

fn count_hits(lower: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| lower.contains(*k)).count()
}
