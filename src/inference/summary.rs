//! Fixed-template summary generation

/// Render the analysis summary sentence. Deterministic given inputs.
pub fn generate_summary(job_category: &str, confidence: f32, skills: &[String]) -> String {
    let confidence_desc = if confidence >= 0.8 {
        "high confidence"
    } else if confidence >= 0.6 {
        "moderate confidence"
    } else {
        "low confidence"
    };

    let mut skill_str = skills
        .iter()
        .take(5)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if skills.len() > 5 {
        skill_str.push_str(&format!(", and {} more", skills.len() - 5));
    }

    format!(
        "This resume appears to align with the {} role with {}. Key skills identified: {}.",
        job_category, confidence_desc, skill_str
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_confidence_bands() {
        let s = skills(&["Python"]);
        assert!(generate_summary("Data Science", 0.91, &s).contains("high confidence"));
        assert!(generate_summary("Data Science", 0.8, &s).contains("high confidence"));
        assert!(generate_summary("Data Science", 0.79, &s).contains("moderate confidence"));
        assert!(generate_summary("Data Science", 0.6, &s).contains("moderate confidence"));
        assert!(generate_summary("Data Science", 0.59, &s).contains("low confidence"));
    }

    #[test]
    fn test_skill_overflow_is_counted() {
        let s = skills(&["Python", "Java", "React", "Docker", "Aws", "Sql", "Git"]);
        let summary = generate_summary("Software Engineering", 0.7, &s);
        assert!(summary.contains("Python, Java, React, Docker, Aws, and 2 more"));
    }

    #[test]
    fn test_short_skill_list_is_joined_plainly() {
        let s = skills(&["Python", "Java"]);
        let summary = generate_summary("Software Engineering", 0.7, &s);
        assert!(summary.contains("Key skills identified: Python, Java."));
        assert!(!summary.contains("more"));
    }
}
