//! Work-history extraction from the experience section's body lines.
//!
//! Two-phase accumulate-then-finalize: a line with a date on it (and short
//! enough to be a "Title, Company, Dates" header rather than bullet prose)
//! opens a new entry; bullets and continuation lines pile into the open
//! entry's description until the next header line or end of section.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::dates::{normalize_date, DATE, PRESENT};
use crate::parser::models::ExperienceEntry;

/// Bullet glyphs and numbered-list prefixes that mark description lines.
pub static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[•·▪‣◦\-*]|\d+\.)\s*").expect("bullet pattern is valid"));

/// Separators used to split an entry header line into its parts once dates
/// have been stripped out.
pub static PART_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,|–-]").expect("separator pattern is valid"));

/// Dated lines under 150 chars are treated as entry headers; longer dated
/// lines are almost always bullet prose that happens to mention a year.
const MAX_HEADER_LINE_LEN: usize = 150;

pub fn parse_experience(lines: &[String]) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut current: Option<ExperienceEntry> = None;

    for (idx, line) in lines.iter().enumerate() {
        let is_bullet = BULLET.is_match(line);
        let has_date = DATE.is_match(line);
        let starts_entry =
            (has_date && line.chars().count() < MAX_HEADER_LINE_LEN) || (idx == 0 && !is_bullet);

        if starts_entry {
            finalize(&mut entries, current.take());
            current = Some(parse_entry_header(line));
        } else if let Some(entry) = current.as_mut() {
            let text = if is_bullet {
                format!("• {}", BULLET.replace(line, ""))
            } else {
                line.clone()
            };
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

/// Entries with neither a title nor a company are parse noise and dropped.
fn finalize(entries: &mut Vec<ExperienceEntry>, entry: Option<ExperienceEntry>) {
    if let Some(entry) = entry {
        if !entry.title.is_empty() || !entry.company_name.is_empty() {
            entries.push(entry);
        }
    }
}

/// Splits a "Title, Company, Location, Dates" header line. Dates and
/// present-markers are stripped first; the residue splits on comma, pipe,
/// or dash in title → company → location order.
fn parse_entry_header(line: &str) -> ExperienceEntry {
    let mut entry = ExperienceEntry::new();

    let date_matches: Vec<String> = DATE.find_iter(line).map(|m| m.as_str().to_string()).collect();
    entry.is_current = PRESENT.is_match(line);

    let without_dates = DATE.replace_all(line, "");
    let residue = PRESENT.replace_all(&without_dates, "");

    let parts: Vec<&str> = PART_SEPARATOR
        .split(&residue)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    // A lone residue part on a dated line is the employer, not a title.
    if parts.len() == 1 {
        entry.company_name = parts[0].to_string();
    } else {
        if let Some(title) = parts.first() {
            entry.title = title.to_string();
        }
        if let Some(company) = parts.get(1) {
            entry.company_name = company.to_string();
        }
        if let Some(location) = parts.get(2) {
            entry.location = location.to_string();
        }
    }

    if let Some(first) = date_matches.first() {
        entry.start_date = normalize_date(first);
    }
    if !entry.is_current {
        if let Some(second) = date_matches.get(1) {
            entry.end_date = normalize_date(second);
        }
    }

    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_entry_with_date_range() {
        let entries = parse_experience(&lines(&[
            "Software Engineer, Acme Corp, Jan 2020 - Mar 2022",
            "• Built the billing pipeline",
        ]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Software Engineer");
        assert_eq!(entries[0].company_name, "Acme Corp");
        assert_eq!(entries[0].start_date, "2020-01");
        assert_eq!(entries[0].end_date, "2022-03");
        assert!(!entries[0].is_current);
    }

    #[test]
    fn test_present_keyword_sets_is_current() {
        let entries = parse_experience(&lines(&["Engineer, Acme Corp, Jan 2020 - Present"]));
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_current);
        assert_eq!(entries[0].start_date, "2020-01");
        assert_eq!(entries[0].end_date, "");
    }

    #[test]
    fn test_single_date_is_start_date() {
        // A lone date with no present-marker means an employment range whose
        // end was never written down; it maps to the start.
        let entries = parse_experience(&lines(&["Engineer, Acme Corp, 2019"]));
        assert_eq!(entries[0].start_date, "2019-01");
        assert_eq!(entries[0].end_date, "");
        assert!(!entries[0].is_current);
    }

    #[test]
    fn test_pipe_separated_header() {
        let entries =
            parse_experience(&lines(&["Staff Engineer | Globex Inc | Remote | Jun 2021 - Present"]));
        assert_eq!(entries[0].title, "Staff Engineer");
        assert_eq!(entries[0].company_name, "Globex Inc");
        assert_eq!(entries[0].location, "Remote");
    }

    #[test]
    fn test_bullets_accumulate_into_description() {
        let entries = parse_experience(&lines(&[
            "Engineer, Acme Corp, Jan 2020 - Present",
            "• Shipped the v2 API",
            "- Cut deploy time in half",
            "* Mentored two juniors",
        ]));
        assert_eq!(
            entries[0].description,
            "• Shipped the v2 API\n• Cut deploy time in half\n• Mentored two juniors"
        );
    }

    #[test]
    fn test_numbered_list_bullets_normalized() {
        let entries = parse_experience(&lines(&[
            "Engineer, Acme Corp, Jan 2020 - Present",
            "1. Owned the payments integration",
        ]));
        assert_eq!(entries[0].description, "• Owned the payments integration");
    }

    #[test]
    fn test_continuation_line_kept_verbatim() {
        let entries = parse_experience(&lines(&[
            "Engineer, Acme Corp, Jan 2020 - Present",
            "Worked across the platform team",
        ]));
        assert_eq!(entries[0].description, "Worked across the platform team");
    }

    #[test]
    fn test_second_dated_line_starts_new_entry() {
        let entries = parse_experience(&lines(&[
            "Engineer, Acme Corp, Jan 2020 - Present",
            "• Did things",
            "Analyst, Initech, Mar 2017 - Dec 2019",
            "• Did other things",
        ]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company_name, "Acme Corp");
        assert_eq!(entries[1].company_name, "Initech");
        assert_eq!(entries[1].end_date, "2019-12");
    }

    #[test]
    fn test_first_line_without_date_still_opens_entry() {
        let entries = parse_experience(&lines(&["Freelance Consultant", "Various clients"]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company_name, "Freelance Consultant");
        assert_eq!(entries[0].description, "Various clients");
    }

    #[test]
    fn test_lone_part_on_dated_line_is_the_company() {
        let entries = parse_experience(&lines(&["Acme Corp, Jan 2020 - Present"]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company_name, "Acme Corp");
        assert_eq!(entries[0].title, "");
    }

    #[test]
    fn test_long_dated_prose_line_is_not_a_header() {
        let prose = format!(
            "Throughout 2020 the team {} delivered a number of projects",
            "x".repeat(120)
        );
        let entries = parse_experience(&lines(&[
            "Engineer, Acme Corp, Jan 2020 - Present",
            &prose,
        ]));
        assert_eq!(entries.len(), 1);
        assert!(entries[0].description.contains("Throughout 2020"));
    }

    #[test]
    fn test_empty_section_yields_no_entries() {
        assert!(parse_experience(&[]).is_empty());
    }

    #[test]
    fn test_entry_without_title_or_company_dropped() {
        // A stray date-only line opens an entry with nothing in it.
        let entries = parse_experience(&lines(&["2019 - 2020"]));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_en_dash_date_range() {
        let entries = parse_experience(&lines(&["Engineer, Acme Corp, Jan 2018 – Feb 2020"]));
        assert_eq!(entries[0].start_date, "2018-01");
        assert_eq!(entries[0].end_date, "2020-02");
    }
}
