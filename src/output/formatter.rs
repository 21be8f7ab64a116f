//! Console and JSON rendering of analysis results

use crate::config::OutputFormat;
use crate::error::Result;
use crate::inference::{AnalysisResult, PredictionResult};
use colored::Colorize;
use std::fmt::Write as _;

/// Renders results for the shell. Pure presentation, no computation.
pub struct ReportFormatter {
    color: bool,
}

impl ReportFormatter {
    pub fn new(color: bool) -> Self {
        // honor NO_COLOR and non-tty pipelines via the colored runtime switch
        if !color {
            colored::control::set_override(false);
        }
        Self { color }
    }

    pub fn format_prediction(
        &self,
        result: &PredictionResult,
        format: OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Console => Ok(self.prediction_console(result)),
        }
    }

    pub fn format_analysis(&self, result: &AnalysisResult, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Console => Ok(self.analysis_console(result)),
        }
    }

    fn prediction_console(&self, result: &PredictionResult) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.heading("Resume Prediction"));
        let _ = writeln!(
            out,
            "  Category:   {}",
            result.job_category.bold()
        );
        let _ = writeln!(
            out,
            "  Confidence: {}",
            self.confidence_badge(result.confidence)
        );
        let _ = writeln!(out, "  Experience: {}", result.experience_level);
        let _ = writeln!(out, "  Skills:     {}", join_or_dash(&result.skills));
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", result.summary);
        let _ = writeln!(out);
        let _ = writeln!(out, "  Generated at {}", result.timestamp.dimmed());
        out
    }

    fn analysis_console(&self, result: &AnalysisResult) -> String {
        let mut out = self.prediction_console(&result.prediction);

        let _ = writeln!(out, "{}", self.heading("Text Analysis"));
        let _ = writeln!(out, "  Words:             {}", result.word_count);
        let _ = writeln!(out, "  Characters:        {}", result.character_count);
        let _ = writeln!(out, "  Avg sentence:      {:.2} words", result.avg_sentence_length);
        let _ = writeln!(out, "  Readability:       {:.2} / 10", result.readability_score);

        let mut sections: Vec<&str> = result.sections.iter().map(String::as_str).collect();
        sections.sort_unstable();
        let _ = writeln!(out, "  Sections:          {}", join_or_dash(&sections));
        let _ = writeln!(out, "  Keywords:          {}", join_or_dash(&result.keywords));
        out
    }

    fn heading(&self, title: &str) -> String {
        if self.color {
            format!("\n{}", title.bold().underline())
        } else {
            format!("\n{}", title)
        }
    }

    fn confidence_badge(&self, confidence: f32) -> String {
        let rendered = format!("{:.2}", confidence);
        if !self.color {
            return rendered;
        }
        if confidence >= 0.8 {
            rendered.green().to_string()
        } else if confidence >= 0.6 {
            rendered.yellow().to_string()
        } else {
            rendered.red().to_string()
        }
    }
}

fn join_or_dash<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::ExperienceLevel;
    use std::collections::HashSet;

    fn prediction() -> PredictionResult {
        PredictionResult {
            job_category: "Software Engineering".to_string(),
            confidence: 0.87,
            skills: vec!["Python".to_string(), "Docker".to_string()],
            experience_level: ExperienceLevel::Senior,
            summary: "This resume appears to align with the Software Engineering role \
                      with high confidence. Key skills identified: Python, Docker."
                .to_string(),
            timestamp: "2024-01-01T00:00:00.000000Z".to_string(),
        }
    }

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            prediction: prediction(),
            word_count: 120,
            character_count: 900,
            avg_sentence_length: 14.5,
            sections: HashSet::from(["Education".to_string(), "Skills".to_string()]),
            keywords: vec!["python".to_string(), "docker".to_string()],
            readability_score: 7.25,
        }
    }

    #[test]
    fn test_console_prediction_contains_fields() {
        let formatter = ReportFormatter::new(false);
        let rendered = formatter
            .format_prediction(&prediction(), OutputFormat::Console)
            .unwrap();
        assert!(rendered.contains("Software Engineering"));
        assert!(rendered.contains("0.87"));
        assert!(rendered.contains("Senior"));
        assert!(rendered.contains("Python, Docker"));
    }

    #[test]
    fn test_json_analysis_is_valid_and_flat() {
        let formatter = ReportFormatter::new(false);
        let rendered = formatter
            .format_analysis(&analysis(), OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["job_category"], "Software Engineering");
        assert_eq!(value["word_count"], 120);
        assert_eq!(value["experience_level"], "Senior");
    }

    #[test]
    fn test_console_analysis_lists_sections_sorted() {
        let formatter = ReportFormatter::new(false);
        let rendered = formatter
            .format_analysis(&analysis(), OutputFormat::Console)
            .unwrap();
        assert!(rendered.contains("Education, Skills"));
    }
}
