//! The eight weighted compatibility checks. Each is a pure function of the
//! structured resume returning a filled-in [`AtsCheck`]; the max scores are
//! fixed and sum to 100 across the set.

use crate::ats::keywords::{count_matches, MEASURABLE_INDICATORS, POWER_VERBS};
use crate::ats::AtsCheck;
use crate::parser::models::StructuredResume;

fn build_check(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    score: u32,
    max_score: u32,
    pass_threshold: u32,
    pass_feedback: &str,
    fail_feedback: &str,
    suggestions: Vec<String>,
) -> AtsCheck {
    let passed = score >= pass_threshold;
    AtsCheck {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        passed,
        score,
        max_score,
        feedback: if passed {
            pass_feedback.to_string()
        } else {
            fail_feedback.to_string()
        },
        suggestions: if suggestions.is_empty() {
            None
        } else {
            Some(suggestions)
        },
    }
}

pub fn check_contact_info(resume: &StructuredResume) -> AtsCheck {
    let info = &resume.personal_info;
    let mut score = 0;
    let mut suggestions = Vec::new();

    if !info.first_name.is_empty() && !info.last_name.is_empty() {
        score += 3;
    } else {
        suggestions.push("Add your full name at the top of the resume".to_string());
    }
    if !info.email.is_empty() {
        score += 3;
    } else {
        suggestions.push("Add an email address".to_string());
    }
    if !info.phone.is_empty() {
        score += 3;
    } else {
        suggestions.push("Add a phone number".to_string());
    }
    if !info.location.is_empty() {
        score += 3;
    } else {
        suggestions.push("Add your city and state or region".to_string());
    }
    if !info.linkedin_url.is_empty() {
        score += 3;
    } else {
        suggestions.push("Add a LinkedIn profile URL".to_string());
    }

    build_check(
        "contact-info",
        "Contact Information",
        "Checks that recruiters can identify and reach you",
        "essentials",
        score,
        15,
        12,
        "Contact information is complete and easy to find",
        "Key contact details are missing",
        suggestions,
    )
}

pub fn check_summary(resume: &StructuredResume) -> AtsCheck {
    let summary = resume.personal_info.summary.trim();
    let summary_lower = summary.to_lowercase();
    let mut score = 0;
    let mut suggestions = Vec::new();

    if !summary.is_empty() {
        score += 3;
    } else {
        suggestions.push("Add a professional summary near the top of the resume".to_string());
    }

    let words = summary.split_whitespace().count();
    if (30..=200).contains(&words) {
        score += 3;
    } else if !summary.is_empty() {
        suggestions.push("Keep the summary between 30 and 200 words".to_string());
    }

    if count_matches(&summary_lower, POWER_VERBS) > 0 {
        score += 2;
    } else {
        suggestions.push("Open summary sentences with action verbs like 'led' or 'built'".to_string());
    }

    let mentions_skill = resume
        .skills
        .iter()
        .any(|s| !s.name.is_empty() && summary_lower.contains(&s.name.to_lowercase()));
    if mentions_skill {
        score += 2;
    } else {
        suggestions.push("Mention one or two of your listed skills in the summary".to_string());
    }

    build_check(
        "professional-summary",
        "Professional Summary",
        "Checks for a concise, keyword-bearing summary",
        "content",
        score,
        10,
        7,
        "Summary is well sized and keyword rich",
        "Summary is missing or too thin to register with screeners",
        suggestions,
    )
}

pub fn check_experience(resume: &StructuredResume) -> AtsCheck {
    let entries = &resume.experience;
    let mut score = 0;
    let mut suggestions = Vec::new();

    if entries.is_empty() {
        suggestions.push("Add at least one work experience entry".to_string());
    } else {
        score += 5;

        if entries
            .iter()
            .all(|e| !e.title.is_empty() && !e.company_name.is_empty())
        {
            score += 5;
        } else {
            suggestions.push("Give every position both a job title and a company name".to_string());
        }

        let described = entries
            .iter()
            .filter(|e| e.description.chars().count() > 50)
            .count();
        let fraction = described as f64 / entries.len() as f64;
        if fraction >= 0.8 {
            score += 8;
        } else if fraction >= 0.5 {
            score += 5;
            suggestions.push("Describe every role with 2-4 bullet points".to_string());
        } else {
            suggestions.push("Most roles lack descriptions; add bullet points for each".to_string());
        }

        if entries.iter().all(|e| !e.start_date.is_empty()) {
            score += 4;
        } else {
            suggestions.push("Add a start date to every position".to_string());
        }

        if entries.iter().any(|e| !e.achievements.is_empty()) {
            score += 3;
        } else {
            suggestions.push("Call out concrete achievements, not just responsibilities".to_string());
        }
    }

    build_check(
        "work-experience",
        "Work Experience",
        "Checks completeness and depth of the work history",
        "content",
        score,
        25,
        18,
        "Work history is detailed and fully dated",
        "Work history is too sparse for screeners to rank",
        suggestions,
    )
}

pub fn check_education(resume: &StructuredResume) -> AtsCheck {
    let entries = &resume.education;
    let mut score = 0;
    let mut suggestions = Vec::new();

    if entries.is_empty() {
        suggestions.push("Add an education entry, even for in-progress degrees".to_string());
    } else {
        score += 4;

        if entries
            .iter()
            .all(|e| !e.institution.is_empty() && !e.degree.is_empty())
        {
            score += 4;
        } else {
            suggestions.push("List both the institution and the degree for each entry".to_string());
        }

        if entries
            .iter()
            .any(|e| !e.start_date.is_empty() || !e.end_date.is_empty())
        {
            score += 2;
        } else {
            suggestions.push("Add graduation dates to education entries".to_string());
        }
    }

    build_check(
        "education",
        "Education",
        "Checks that education entries are present and complete",
        "content",
        score,
        10,
        7,
        "Education section is complete",
        "Education section is missing or incomplete",
        suggestions,
    )
}

pub fn check_skills(resume: &StructuredResume) -> AtsCheck {
    let skills = &resume.skills;
    let mut score = 0;
    let mut suggestions = Vec::new();

    if skills.is_empty() {
        suggestions.push("Add a skills section; it is the first thing keyword filters read".to_string());
    } else {
        score += 5;

        let count = skills.len();
        if (8..=25).contains(&count) {
            score += 5;
        } else if count >= 5 {
            score += 3;
            suggestions.push("Aim for 8-25 skills to cover more keyword filters".to_string());
        } else {
            suggestions.push("List at least 5 relevant skills".to_string());
        }

        if skills.iter().any(|s| s.level.is_some()) {
            score += 3;
        } else {
            suggestions.push("Add proficiency levels to your strongest skills".to_string());
        }

        let mut names: Vec<String> = skills.iter().map(|s| s.name.to_lowercase()).collect();
        let before = names.len();
        names.sort();
        names.dedup();
        if names.len() == before {
            score += 2;
        } else {
            suggestions.push("Remove duplicate skills".to_string());
        }
    }

    build_check(
        "skills",
        "Skills",
        "Checks skill list size, levels, and duplicates",
        "keywords",
        score,
        15,
        10,
        "Skill list is the right size and free of duplicates",
        "Skill list needs work to pass keyword filters",
        suggestions,
    )
}

pub fn check_keyword_optimization(resume: &StructuredResume) -> AtsCheck {
    let mut combined = String::new();
    combined.push_str(&resume.personal_info.summary);
    combined.push(' ');
    combined.push_str(&resume.personal_info.headline);
    for entry in &resume.experience {
        combined.push(' ');
        combined.push_str(&entry.title);
        combined.push(' ');
        combined.push_str(&entry.description);
        for achievement in &entry.achievements {
            combined.push(' ');
            combined.push_str(achievement);
        }
    }
    for skill in &resume.skills {
        combined.push(' ');
        combined.push_str(&skill.name);
    }
    let combined = combined.to_lowercase();

    let mut score = 0;
    let mut suggestions = Vec::new();

    let verbs = count_matches(&combined, POWER_VERBS);
    if verbs >= 10 {
        score += 5;
    } else if verbs >= 5 {
        score += 3;
        suggestions.push("Work more action verbs into bullet points".to_string());
    } else {
        score += 1;
        suggestions.push("Rewrite bullet points to start with action verbs".to_string());
    }

    if resume.skills.len() >= 5 {
        score += 3;
    } else {
        suggestions.push("List at least 5 skills to widen keyword coverage".to_string());
    }

    if resume.personal_info.headline.chars().count() > 5 {
        score += 2;
    } else {
        suggestions.push("Add a headline stating your target role".to_string());
    }

    build_check(
        "keyword-optimization",
        "Keyword Optimization",
        "Checks action-verb density and keyword surface area",
        "keywords",
        score,
        10,
        7,
        "Resume carries strong keyword density",
        "Resume is light on the keywords screeners match against",
        suggestions,
    )
}

pub fn check_quantifiable_achievements(resume: &StructuredResume) -> AtsCheck {
    let mut text = String::new();
    for entry in &resume.experience {
        text.push(' ');
        text.push_str(&entry.description);
        for achievement in &entry.achievements {
            text.push(' ');
            text.push_str(achievement);
        }
    }
    let text = text.to_lowercase();

    let mut score = 0;
    let mut suggestions = Vec::new();

    if text.chars().any(|c| c.is_ascii_digit()) {
        score += 3;
    } else {
        suggestions.push("Add numbers to your bullet points (team size, users, requests)".to_string());
    }

    if text.contains('%') || text.contains("percent") {
        score += 3;
    } else {
        suggestions.push("Express at least one result as a percentage".to_string());
    }

    let has_money_marker = text.contains('$')
        || text.contains('€')
        || text.contains('£')
        || text.contains("million")
        || text.contains("thousand")
        || text.contains("billion");
    if has_money_marker {
        score += 2;
    } else {
        suggestions.push("Mention revenue, cost, or budget figures where you can".to_string());
    }

    if count_matches(&text, MEASURABLE_INDICATORS) >= 3 {
        score += 2;
    } else {
        suggestions.push("Use result verbs like 'increased', 'reduced', 'saved'".to_string());
    }

    build_check(
        "quantifiable-achievements",
        "Quantifiable Achievements",
        "Checks for measured, numeric outcomes in the work history",
        "content",
        score,
        10,
        6,
        "Achievements are backed by numbers",
        "Achievements read as duties; add measurable outcomes",
        suggestions,
    )
}

pub fn check_content_length(resume: &StructuredResume) -> AtsCheck {
    let words = total_word_count(resume);
    let mut suggestions = Vec::new();

    let score = if (300..=1200).contains(&words) {
        5
    } else if words < 200 {
        suggestions.push("Resume is very short; expand descriptions to at least 300 words".to_string());
        1
    } else if words <= 1500 {
        3
    } else {
        suggestions.push("Resume is long; trim to roughly two pages of content".to_string());
        2
    };

    build_check(
        "content-length",
        "Content Length",
        "Checks total resume length against the one-to-two page norm",
        "formatting",
        score,
        5,
        3,
        "Resume length sits in the normal range",
        "Resume length falls outside what screeners expect",
        suggestions,
    )
}

/// Words across every free-text field in the resume.
fn total_word_count(resume: &StructuredResume) -> usize {
    let info = &resume.personal_info;
    let mut count = 0;

    for field in [
        &info.first_name,
        &info.last_name,
        &info.headline,
        &info.summary,
        &info.location,
    ] {
        count += field.split_whitespace().count();
    }
    for entry in &resume.experience {
        count += entry.title.split_whitespace().count();
        count += entry.company_name.split_whitespace().count();
        count += entry.description.split_whitespace().count();
        for achievement in &entry.achievements {
            count += achievement.split_whitespace().count();
        }
    }
    for entry in &resume.education {
        count += entry.institution.split_whitespace().count();
        count += entry.degree.split_whitespace().count();
        count += entry.field_of_study.split_whitespace().count();
        count += entry.description.split_whitespace().count();
    }
    for skill in &resume.skills {
        count += skill.name.split_whitespace().count();
    }
    for cert in &resume.certifications {
        count += cert.name.split_whitespace().count();
        count += cert.issuing_organization.split_whitespace().count();
    }
    for language in &resume.languages {
        count += language.name.split_whitespace().count();
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::models::{
        EducationEntry, ExperienceEntry, PersonalInfo, Skill, SkillLevel, StructuredResume,
    };
    use uuid::Uuid;

    fn skill(name: &str) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            name: name.to_string(),
            level: Some(SkillLevel::Intermediate),
        }
    }

    #[test]
    fn test_contact_info_without_linkedin_scores_twelve_and_passes() {
        let resume = StructuredResume {
            personal_info: PersonalInfo {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                email: "jane@example.com".into(),
                phone: "555-123-4567".into(),
                location: "Austin, TX".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let check = check_contact_info(&resume);
        assert_eq!(check.score, 12);
        assert!(check.passed);
        assert_eq!(check.suggestions.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_contact_info_empty_scores_zero() {
        let check = check_contact_info(&StructuredResume::default());
        assert_eq!(check.score, 0);
        assert!(!check.passed);
        assert_eq!(check.suggestions.as_ref().map(Vec::len), Some(5));
    }

    #[test]
    fn test_contact_info_requires_both_name_parts() {
        let resume = StructuredResume {
            personal_info: PersonalInfo {
                first_name: "Madonna".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(check_contact_info(&resume).score, 0);
    }

    #[test]
    fn test_summary_all_criteria() {
        let words: Vec<&str> = std::iter::repeat("infrastructure").take(28).collect();
        let resume = StructuredResume {
            personal_info: PersonalInfo {
                summary: format!("Led Rust platform work. {}", words.join(" ")),
                ..Default::default()
            },
            skills: vec![skill("Rust")],
            ..Default::default()
        };
        let check = check_summary(&resume);
        assert_eq!(check.score, 10);
        assert!(check.passed);
    }

    #[test]
    fn test_summary_missing_scores_zero_on_presence_criteria() {
        let check = check_summary(&StructuredResume::default());
        assert_eq!(check.score, 0);
        assert!(!check.passed);
    }

    #[test]
    fn test_experience_full_marks() {
        let mut entry = ExperienceEntry::new();
        entry.title = "Engineer".into();
        entry.company_name = "Acme".into();
        entry.start_date = "2020-01".into();
        entry.description = "x".repeat(60);
        entry.achievements = vec!["Cut costs 20%".into()];
        let resume = StructuredResume {
            experience: vec![entry],
            ..Default::default()
        };
        let check = check_experience(&resume);
        assert_eq!(check.score, 25);
        assert!(check.passed);
    }

    #[test]
    fn test_experience_half_described_gets_middle_band() {
        let mut described = ExperienceEntry::new();
        described.title = "Engineer".into();
        described.company_name = "Acme".into();
        described.start_date = "2020-01".into();
        described.description = "x".repeat(60);
        let mut bare = ExperienceEntry::new();
        bare.title = "Analyst".into();
        bare.company_name = "Initech".into();
        bare.start_date = "2018-01".into();
        let resume = StructuredResume {
            experience: vec![described, bare],
            ..Default::default()
        };
        // 5 present + 5 titled + 5 half-described + 4 dated = 19, no achievements.
        let check = check_experience(&resume);
        assert_eq!(check.score, 19);
        assert!(check.passed);
    }

    #[test]
    fn test_experience_empty_scores_zero() {
        let check = check_experience(&StructuredResume::default());
        assert_eq!(check.score, 0);
        assert!(!check.passed);
    }

    #[test]
    fn test_education_complete_and_dated() {
        let mut entry = EducationEntry::new();
        entry.institution = "MIT".into();
        entry.degree = "B.S.".into();
        entry.end_date = "2016-01".into();
        let resume = StructuredResume {
            education: vec![entry],
            ..Default::default()
        };
        let check = check_education(&resume);
        assert_eq!(check.score, 10);
        assert!(check.passed);
    }

    #[test]
    fn test_education_undated_misses_date_points() {
        let mut entry = EducationEntry::new();
        entry.institution = "MIT".into();
        entry.degree = "B.S.".into();
        let check = check_education(&StructuredResume {
            education: vec![entry],
            ..Default::default()
        });
        assert_eq!(check.score, 8);
        assert!(check.passed);
    }

    #[test]
    fn test_skills_optimal_count_full_marks() {
        let names = ["Rust", "Go", "Python", "SQL", "Kafka", "Redis", "AWS", "Docker"];
        let resume = StructuredResume {
            skills: names.iter().map(|n| skill(n)).collect(),
            ..Default::default()
        };
        let check = check_skills(&resume);
        assert_eq!(check.score, 15);
        assert!(check.passed);
    }

    #[test]
    fn test_skills_duplicates_lose_points() {
        let resume = StructuredResume {
            skills: vec![
                skill("Rust"), skill("rust"), skill("Go"), skill("Python"),
                skill("SQL"), skill("Kafka"), skill("Redis"), skill("AWS"),
            ],
            ..Default::default()
        };
        let check = check_skills(&resume);
        assert_eq!(check.score, 13);
        assert!(check
            .suggestions
            .as_ref()
            .unwrap()
            .iter()
            .any(|s| s.contains("duplicate")));
    }

    #[test]
    fn test_skills_small_list_middle_band() {
        let resume = StructuredResume {
            skills: ["Rust", "Go", "Python", "SQL", "Kafka"].iter().map(|n| skill(n)).collect(),
            ..Default::default()
        };
        // 5 present + 3 count band + 3 levels + 2 unique = 13.
        assert_eq!(check_skills(&resume).score, 13);
    }

    #[test]
    fn test_keyword_optimization_low_verbs_floor_point() {
        let check = check_keyword_optimization(&StructuredResume::default());
        assert_eq!(check.score, 1);
        assert!(!check.passed);
    }

    #[test]
    fn test_keyword_optimization_counts_across_fields() {
        let mut entry = ExperienceEntry::new();
        entry.description =
            "Led rollout. Built pipeline. Reduced cost. Improved uptime. Launched beta.".into();
        let resume = StructuredResume {
            personal_info: PersonalInfo {
                headline: "Platform Engineer".into(),
                ..Default::default()
            },
            skills: ["Rust", "Go", "Python", "SQL", "Kafka"].iter().map(|n| skill(n)).collect(),
            experience: vec![entry],
            ..Default::default()
        };
        // 5 distinct verbs → +3, 5 skills → +3, headline → +2.
        let check = check_keyword_optimization(&resume);
        assert_eq!(check.score, 8);
        assert!(check.passed);
    }

    #[test]
    fn test_quantifiable_all_markers() {
        let mut entry = ExperienceEntry::new();
        entry.description =
            "Increased revenue by 30%, reduced spend by $2 million, saved 10 hours weekly".into();
        let check = check_quantifiable_achievements(&StructuredResume {
            experience: vec![entry],
            ..Default::default()
        });
        assert_eq!(check.score, 10);
        assert!(check.passed);
    }

    #[test]
    fn test_quantifiable_unmeasured_prose_scores_zero() {
        let mut entry = ExperienceEntry::new();
        entry.description = "Responsible for various backend tasks".into();
        let check = check_quantifiable_achievements(&StructuredResume {
            experience: vec![entry],
            ..Default::default()
        });
        assert_eq!(check.score, 0);
        assert!(!check.passed);
    }

    #[test]
    fn test_content_length_bands() {
        let resume_with_words = |n: usize| {
            let mut entry = ExperienceEntry::new();
            entry.description = vec!["word"; n].join(" ");
            StructuredResume {
                experience: vec![entry],
                ..Default::default()
            }
        };
        assert_eq!(check_content_length(&resume_with_words(500)).score, 5);
        assert_eq!(check_content_length(&resume_with_words(250)).score, 3);
        assert_eq!(check_content_length(&resume_with_words(1400)).score, 3);
        assert_eq!(check_content_length(&resume_with_words(50)).score, 1);
        assert_eq!(check_content_length(&resume_with_words(2000)).score, 2);
    }

    #[test]
    fn test_scores_never_exceed_max() {
        let resume = StructuredResume::default();
        for check in [
            check_contact_info(&resume),
            check_summary(&resume),
            check_experience(&resume),
            check_education(&resume),
            check_skills(&resume),
            check_keyword_optimization(&resume),
            check_quantifiable_achievements(&resume),
            check_content_length(&resume),
        ] {
            assert!(check.score <= check.max_score, "{} over max", check.id);
        }
    }
}
