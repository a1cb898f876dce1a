//! Education-history extraction. Shares the accumulate-then-finalize shape of
//! the experience parser, with two deliberate differences: a degree keyword is
//! enough to open an entry (many education lines carry no date at all), and a
//! lone date is the graduation date, not a start date — resumes list completed
//! degrees by the year they finished.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::dates::{normalize_date, DATE, PRESENT};
use crate::parser::experience::{BULLET, PART_SEPARATOR};
use crate::parser::models::EducationEntry;

pub static DEGREE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:bachelor(?:'?s)?|master(?:'?s)?|ph\.?d\.?|doctorate|associate(?:'?s)?|diploma|certificate|b\.?s\.?c?\.?|b\.?a\.?|b\.?e(?:ng)?\.?|b\.?tech\.?|m\.?s\.?c?\.?|m\.?a\.?|m\.?b\.?a\.?|m\.?tech\.?)\b",
    )
    .expect("degree pattern is valid")
});

static INSTITUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:university|college|institute|school|academy|polytechnic)\b")
        .expect("institution pattern is valid")
});

pub fn parse_education(lines: &[String]) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    let mut current: Option<EducationEntry> = None;

    for line in lines {
        let starts_entry = DATE.is_match(line) || DEGREE.is_match(line);

        if starts_entry {
            finalize(&mut entries, current.take());
            current = Some(parse_entry_line(line));
        } else if let Some(entry) = current.as_mut() {
            let text = BULLET.replace(line, "").to_string();
            if entry.description.is_empty() {
                entry.description = text;
            } else {
                entry.description.push('\n');
                entry.description.push_str(&text);
            }
        }
    }

    finalize(&mut entries, current);
    entries
}

fn finalize(entries: &mut Vec<EducationEntry>, entry: Option<EducationEntry>) {
    if let Some(entry) = entry {
        if !entry.institution.is_empty() || !entry.degree.is_empty() {
            entries.push(entry);
        }
    }
}

/// Assigns the comma/pipe/dash-split parts of an entry line. A part matching
/// the degree pattern claims `degree`; one naming a university/college/school
/// claims `institution`; leftovers fill `institution` then `field_of_study`
/// in that order.
fn parse_entry_line(line: &str) -> EducationEntry {
    let mut entry = EducationEntry::new();

    let date_matches: Vec<String> = DATE.find_iter(line).map(|m| m.as_str().to_string()).collect();
    entry.is_current = PRESENT.is_match(line);

    let without_dates = DATE.replace_all(line, "");
    let residue = PRESENT.replace_all(&without_dates, "");

    let parts: Vec<&str> = PART_SEPARATOR
        .split(&residue)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    for part in parts {
        if entry.degree.is_empty() && DEGREE.is_match(part) {
            entry.degree = part.to_string();
        } else if entry.institution.is_empty() && INSTITUTION.is_match(part) {
            entry.institution = part.to_string();
        } else if entry.institution.is_empty() {
            entry.institution = part.to_string();
        } else if entry.field_of_study.is_empty() {
            entry.field_of_study = part.to_string();
        }
    }

    match (date_matches.first(), date_matches.get(1)) {
        (Some(first), Some(second)) => {
            entry.start_date = normalize_date(first);
            if !entry.is_current {
                entry.end_date = normalize_date(second);
            }
        }
        (Some(only), None) => {
            if entry.is_current {
                entry.start_date = normalize_date(only);
            } else {
                // Graduation-year convention: a single date closes the entry.
                entry.end_date = normalize_date(only);
            }
        }
        _ => {}
    }

    entry
}
