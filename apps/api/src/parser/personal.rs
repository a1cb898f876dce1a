//! Contact / identity extraction from the implicit header section plus the
//! full raw text. Every field degrades to an empty string when nothing
//! matches; this stage never fails.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::models::PersonalInfo;

pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern is valid")
});

/// Loose international phone shape: optional country code, optional area
/// code, then a 3+4 digit local number with common separators.
pub static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d{0,3}[-.\s]?(?:\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}")
        .expect("phone pattern is valid")
});

static LINKEDIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)linkedin\.com/(in|pub)/([A-Za-z0-9_%-]+)").expect("linkedin pattern is valid")
});

static GITHUB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)github\.com/([A-Za-z0-9_-]+)").expect("github pattern is valid")
});

/// Anything that looks like a link; used to skip contact lines when hunting
/// for the headline and location.
pub static URL_HINT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://|www\.|linkedin\.com|github\.com").expect("url pattern is valid")
});

// "City, ST 94105" and the looser "City, Region" fallback.
static CITY_STATE_ZIP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z .'-]*),\s*([A-Z]{2})(?:\s+\d{5}(?:-\d{4})?)?$")
        .expect("city-state pattern is valid")
});

static CITY_REGION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z .'-]*),\s*([A-Za-z][A-Za-z .'-]*)$")
        .expect("city-region pattern is valid")
});

/// Extracts personal info from the header lines and the full raw text.
/// Email, phone, and profile URLs scan the whole document since many layouts
/// push contact details into a footer.
pub fn extract_personal_info(header_lines: &[String], full_text: &str) -> PersonalInfo {
    let mut info = PersonalInfo::default();

    if let Some(m) = EMAIL.find(full_text) {
        info.email = m.as_str().to_string();
    }
    if let Some(m) = PHONE.find(full_text) {
        info.phone = m.as_str().trim().to_string();
    }
    if let Some(caps) = LINKEDIN.captures(full_text) {
        info.linkedin_url = format!(
            "https://linkedin.com/{}/{}",
            caps[1].to_lowercase(),
            &caps[2]
        );
    }
    if let Some(caps) = GITHUB.captures(full_text) {
        info.github_url = format!("https://github.com/{}", &caps[1]);
    }

    let (first_name, last_name) = extract_name(header_lines);
    info.first_name = first_name;
    info.last_name = last_name;
    info.headline = extract_headline(header_lines);
    info.location = extract_location(header_lines);

    info
}

/// The first non-empty header line is assumed to be the candidate's name.
/// Tokens containing digits or `@` (phone fragments, emails) are dropped.
fn extract_name(header_lines: &[String]) -> (String, String) {
    let Some(line) = header_lines.iter().find(|l| !l.trim().is_empty()) else {
        return (String::new(), String::new());
    };

    let tokens: Vec<&str> = line
        .split_whitespace()
        .filter(|t| !t.contains('@') && !t.chars().any(|c| c.is_ascii_digit()))
        .collect();

    match tokens.len() {
        0 => (String::new(), String::new()),
        1 => (tokens[0].to_string(), String::new()),
        _ => (tokens[0].to_string(), tokens[1..].join(" ")),
    }
}

/// Scans header lines 2 through 4 for a plausible title line: not a contact
/// line, between 6 and 99 characters.
fn extract_headline(header_lines: &[String]) -> String {
    for line in header_lines.iter().skip(1).take(3) {
        if EMAIL.is_match(line) || PHONE.is_match(line) || URL_HINT.is_match(line) {
            continue;
        }
        let len = line.chars().count();
        if (6..=99).contains(&len) {
            return line.clone();
        }
    }
    String::new()
}

fn extract_location(header_lines: &[String]) -> String {
    for line in header_lines {
        if EMAIL.is_match(line) || URL_HINT.is_match(line) {
            continue;
        }
        if CITY_STATE_ZIP.is_match(line) || CITY_REGION.is_match(line) {
            return line.clone();
        }
    }
    String::new()
}
