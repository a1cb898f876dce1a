//! Flat-list section parsers: skills, certifications, and languages.

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::parser::dates::{normalize_date, DATE};
use crate::parser::experience::{BULLET, PART_SEPARATOR};
use crate::parser::models::{Certification, LanguageEntry, LanguageProficiency, Skill, SkillLevel};

const MAX_SKILLS: usize = 30;
const MAX_LANGUAGES: usize = 10;

/// Skill tokens split on every common list delimiter, bullets included.
static SKILL_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;|•·▪‣◦\-*]").expect("skill delimiter pattern is valid"));

/// Language lines keep hyphens intact ("English - Native" carries its
/// proficiency on the same token).
static LANGUAGE_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;|•·▪‣◦]").expect("language delimiter pattern is valid"));

/// Splits skill lines into tokens, dedupes case-insensitively keeping the
/// first spelling seen, and truncates to the cap after collection.
pub fn parse_skills(lines: &[String]) -> Vec<Skill> {
    let mut seen = Vec::new();
    let mut skills = Vec::new();

    for line in lines {
        for token in SKILL_DELIMITER.split(line) {
            let name = token.trim();
            let len = name.chars().count();
            if !(2..=49).contains(&len) {
                continue;
            }
            let lower = name.to_lowercase();
            if seen.contains(&lower) {
                continue;
            }
            seen.push(lower);
            skills.push(Skill {
                id: Uuid::new_v4(),
                name: name.to_string(),
                level: Some(SkillLevel::Intermediate),
            });
        }
    }

    skills.truncate(MAX_SKILLS);
    skills
}

/// One certification per line: dates pulled out as issue/expiry, the residue
/// split into name and issuing organization. Lines that strip down to almost
/// nothing are treated as noise.
pub fn parse_certifications(lines: &[String]) -> Vec<Certification> {
    let mut certs = Vec::new();

    for line in lines {
        let line = BULLET.replace(line, "");
        let date_matches: Vec<String> =
            DATE.find_iter(&line).map(|m| m.as_str().to_string()).collect();

        let residue = DATE.replace_all(&line, "");
        let residue = residue.trim();
        if residue.chars().count() <= 3 {
            continue;
        }

        let parts: Vec<&str> = PART_SEPARATOR
            .split(residue)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let mut cert = Certification::new();
        cert.name = parts
            .first()
            .map(|p| p.to_string())
            .unwrap_or_else(|| residue.to_string());
        if let Some(org) = parts.get(1) {
            cert.issuing_organization = org.to_string();
        }
        if let Some(issued) = date_matches.first() {
            cert.issue_date = normalize_date(issued);
        }
        if let Some(expires) = date_matches.get(1) {
            cert.expiry_date = normalize_date(expires);
        }

        certs.push(cert);
    }

    certs
}

/// Proficiency keyword found on a language token; stripped out of the name.
static PROFICIENCY_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(native|fluent|advanced|professional|intermediate|conversational|basic|elementary|beginner)\b",
    )
    .expect("proficiency pattern is valid")
});

fn proficiency_for(keyword: &str) -> LanguageProficiency {
    match keyword.to_lowercase().as_str() {
        "native" | "fluent" | "advanced" | "professional" => LanguageProficiency::Professional,
        "basic" | "elementary" | "beginner" => LanguageProficiency::Basic,
        _ => LanguageProficiency::Conversational,
    }
}

pub fn parse_languages(lines: &[String]) -> Vec<LanguageEntry> {
    let mut languages = Vec::new();

    for line in lines {
        for token in LANGUAGE_DELIMITER.split(line) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            let proficiency = PROFICIENCY_KEYWORD
                .find(token)
                .map(|m| proficiency_for(m.as_str()))
                .unwrap_or(LanguageProficiency::Conversational);

            let name = PROFICIENCY_KEYWORD.replace(token, "");
            let name = name
                .trim_matches(|c: char| c.is_whitespace() || "()-–:".contains(c))
                .to_string();
            if name.is_empty() {
                continue;
            }

            languages.push(LanguageEntry {
                id: Uuid::new_v4(),
                name,
                proficiency,
            });
        }
    }

    languages.truncate(MAX_LANGUAGES);
    languages
}
