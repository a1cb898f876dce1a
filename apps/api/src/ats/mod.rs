//! ATS compatibility scoring. `score` is a deterministic pure function of a
//! structured resume: eight fixed-order weighted checks, an aggregate
//! percentage, a letter grade, and the worst offenders ranked by how many
//! points they left on the table.

pub mod checks;
pub mod handlers;
pub mod keywords;

use serde::{Deserialize, Serialize};

use crate::parser::models::StructuredResume;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsCheck {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub passed: bool,
    pub score: u32,
    pub max_score: u32,
    pub feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsScoreResult {
    pub overall_score: u32,
    pub max_score: u32,
    pub percentage: u32,
    pub grade: char,
    pub checks: Vec<AtsCheck>,
    pub summary: String,
    pub top_issues: Vec<String>,
}

/// Checks whose score sits below this fraction of their max are flagged as
/// top issues even when they technically passed.
const WEAK_CHECK_RATIO: f64 = 0.7;

pub fn score(resume: &StructuredResume) -> AtsScoreResult {
    let checks = vec![
        checks::check_contact_info(resume),
        checks::check_summary(resume),
        checks::check_experience(resume),
        checks::check_education(resume),
        checks::check_skills(resume),
        checks::check_keyword_optimization(resume),
        checks::check_quantifiable_achievements(resume),
        checks::check_content_length(resume),
    ];

    let overall_score: u32 = checks.iter().map(|c| c.score).sum();
    let max_score: u32 = checks.iter().map(|c| c.max_score).sum();
    let percentage = ((overall_score as f64 / max_score as f64) * 100.0).round() as u32;

    AtsScoreResult {
        overall_score,
        max_score,
        percentage,
        grade: grade_for(percentage),
        summary: summary_for(percentage),
        top_issues: top_issues(&checks),
        checks,
    }
}

fn grade_for(percentage: u32) -> char {
    match percentage {
        90.. => 'A',
        80..=89 => 'B',
        70..=79 => 'C',
        60..=69 => 'D',
        _ => 'F',
    }
}

fn summary_for(percentage: u32) -> String {
    match percentage {
        90.. => format!(
            "Excellent — at {percentage}% this resume should pass automated screening cleanly."
        ),
        80..=89 => format!(
            "Strong — {percentage}% compatibility; a couple of small fixes would make it airtight."
        ),
        70..=79 => format!(
            "Decent — {percentage}% compatibility, but several sections need attention."
        ),
        60..=69 => format!(
            "Below average — {percentage}% compatibility; screeners may rank this resume low."
        ),
        _ => format!(
            "Poor — {percentage}% compatibility; this resume is likely to be filtered out."
        ),
    }
}

/// Feedback lines of the up-to-three worst checks, ordered by how far each
/// fell short of its maximum.
fn top_issues(checks: &[AtsCheck]) -> Vec<String> {
    let mut failing: Vec<&AtsCheck> = checks
        .iter()
        .filter(|c| !c.passed || (c.score as f64) < WEAK_CHECK_RATIO * c.max_score as f64)
        .collect();
    failing.sort_by_key(|c| std::cmp::Reverse(c.max_score - c.score));
    failing.iter().take(3).map(|c| c.feedback.clone()).collect()
}
