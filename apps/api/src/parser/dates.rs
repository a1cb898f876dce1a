//! Date detection and normalization for resume text.
//!
//! Resumes write dates as "January 2020", "Jan 2020", "01/2020", or a bare
//! year. Everything normalizes to `YYYY-MM`; a bare year pins the month to
//! January. Unrecognized input normalizes to the empty string, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches any of the three date shapes anywhere in a line. Alternation order
/// matters: "January 2020" must be consumed as one match before the bare-year
/// branch can claim the "2020" inside it.
pub static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+\d{4}\b|\b(?:0?[1-9]|1[0-2])/\d{4}\b|\b(?:19|20)\d{2}\b",
    )
    .expect("date pattern is valid")
});

/// "Present"-style markers on an experience or education line.
pub static PRESENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:present|current|now)\b").expect("present pattern is valid"));

static MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([a-z]+)\.?\s+(\d{4})$").expect("month-year pattern is valid"));

static NUMERIC_MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{4})$").expect("numeric pattern is valid"));

static YEAR_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}$").expect("year pattern is valid"));

/// Normalizes a single date token to `YYYY-MM`.
///
/// - "January 2020" / "jan 2020" / "Sept. 2020" -> "2020-01" / "2020-01" / "2020-09"
/// - "03/2019" -> "2019-03"
/// - "2021" -> "2021-01"
/// - anything else -> ""
pub fn normalize_date(raw: &str) -> String {
    let token = raw.trim();

    if let Some(caps) = MONTH_YEAR.captures(token) {
        if let Some(month) = month_number(&caps[1]) {
            return format!("{}-{:02}", &caps[2], month);
        }
        return String::new();
    }

    if let Some(caps) = NUMERIC_MONTH_YEAR.captures(token) {
        let month: u32 = caps[1].parse().unwrap_or(0);
        if (1..=12).contains(&month) {
            return format!("{}-{:02}", &caps[2], month);
        }
        return String::new();
    }

    if YEAR_ONLY.is_match(token) {
        return format!("{token}-01");
    }

    String::new()
}

/// Month names resolve by their first three letters, which also covers the
/// common four-letter "Sept" abbreviation.
fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    let prefix = lower.get(..3)?;
    match prefix {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_month_name() {
        assert_eq!(normalize_date("January 2020"), "2020-01");
    }

    #[test]
    fn test_abbreviated_month_name() {
        assert_eq!(normalize_date("Mar 2018"), "2018-03");
    }

    #[test]
    fn test_sept_four_letter_abbreviation() {
        assert_eq!(normalize_date("Sept 2021"), "2021-09");
    }

    #[test]
    fn test_month_with_trailing_dot() {
        assert_eq!(normalize_date("Dec. 2019"), "2019-12");
    }

    #[test]
    fn test_case_insensitive_month() {
        assert_eq!(normalize_date("OCTOBER 2022"), "2022-10");
    }

    #[test]
    fn test_numeric_month_zero_padded() {
        assert_eq!(normalize_date("03/2019"), "2019-03");
    }

    #[test]
    fn test_numeric_month_double_digit() {
        assert_eq!(normalize_date("11/2020"), "2020-11");
    }

    #[test]
    fn test_numeric_month_out_of_range() {
        assert_eq!(normalize_date("13/2020"), "");
    }

    #[test]
    fn test_bare_year_pins_january() {
        assert_eq!(normalize_date("2021"), "2021-01");
    }

    #[test]
    fn test_garbage_normalizes_empty() {
        assert_eq!(normalize_date("not a date"), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(normalize_date("  June 2017  "), "2017-06");
    }

    #[test]
    fn test_date_regex_finds_all_shapes_in_line() {
        let line = "Acme Corp | Jan 2019 - 03/2021";
        let found: Vec<&str> = DATE.find_iter(line).map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["Jan 2019", "03/2021"]);
    }

    #[test]
    fn test_month_year_consumed_as_single_match() {
        let found: Vec<&str> = DATE.find_iter("January 2020").map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["January 2020"]);
    }

    #[test]
    fn test_present_marker_variants() {
        assert!(PRESENT.is_match("Jan 2020 - Present"));
        assert!(PRESENT.is_match("2019 to current"));
        assert!(PRESENT.is_match("June 2021 - now"));
    }

    #[test]
    fn test_present_requires_word_boundary() {
        assert!(!PRESENT.is_match("presentation skills"));
        assert!(!PRESENT.is_match("currently unemployed"));
    }
}
