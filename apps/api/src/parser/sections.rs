//! Line-level section segmentation.
//!
//! Each trimmed, non-empty line is either a section header or body content of
//! the most recently opened section. The seven header categories form a closed
//! enumeration tested in a fixed priority order, so a line carries exactly one
//! tag regardless of pattern overlap. Lines before the first recognized header
//! accumulate into an implicit `Header` section used only for contact-info
//! extraction.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Implicit section for everything above the first recognized header.
    Header,
    Experience,
    Education,
    Skills,
    Summary,
    Certifications,
    Projects,
    Languages,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub kind: SectionKind,
    pub lines: Vec<String>,
}

/// Header patterns in evaluation order. Each must match the whole line (an
/// optional trailing colon aside) so that prose like "Experienced in Rust"
/// stays body content.
static HEADER_PATTERNS: Lazy<Vec<(SectionKind, Regex)>> = Lazy::new(|| {
    let pattern = |re: &str| Regex::new(re).expect("section header pattern is valid");
    vec![
        (
            SectionKind::Experience,
            pattern(r"(?i)^(?:work\s+experience|work\s+history|employment\s+history|professional\s+experience|career\s+history|experience|employment)\s*:?\s*$"),
        ),
        (
            SectionKind::Education,
            pattern(r"(?i)^(?:education|academic\s+background|academics|educational\s+background|qualifications)\s*:?\s*$"),
        ),
        (
            SectionKind::Skills,
            pattern(r"(?i)^(?:technical\s+skills|core\s+competencies|skills\s*(?:&|and)\s*abilities|skills|competencies|technologies)\s*:?\s*$"),
        ),
        (
            SectionKind::Summary,
            pattern(r"(?i)^(?:professional\s+summary|career\s+objective|summary|objective|profile|about\s+me|about)\s*:?\s*$"),
        ),
        (
            SectionKind::Certifications,
            pattern(r"(?i)^(?:licenses\s*(?:&|and)\s*certifications|certifications?|certificates?|licenses?)\s*:?\s*$"),
        ),
        (
            SectionKind::Projects,
            pattern(r"(?i)^(?:personal\s+projects|key\s+projects|notable\s+projects|projects)\s*:?\s*$"),
        ),
        (
            SectionKind::Languages,
            pattern(r"(?i)^(?:languages?|language\s+proficiency)\s*:?\s*$"),
        ),
    ]
});

/// Returns the header category a line opens, if any. First match wins.
pub fn classify_header(line: &str) -> Option<SectionKind> {
    HEADER_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(line))
        .map(|(kind, _)| *kind)
}

/// Splits raw text into sections. A new header closes the previous section;
/// the final open section is emitted at end of input.
pub fn split_sections(raw_text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section {
        kind: SectionKind::Header,
        lines: Vec::new(),
    };

    for raw_line in raw_text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        match classify_header(line) {
            Some(kind) => {
                if current.kind != SectionKind::Header || !current.lines.is_empty() {
                    sections.push(current);
                }
                current = Section {
                    kind,
                    lines: Vec::new(),
                };
            }
            None => current.lines.push(line.to_string()),
        }
    }

    if current.kind != SectionKind::Header || !current.lines.is_empty() {
        sections.push(current);
    }

    sections
}

/// Collects the body lines of every section of `kind`, in document order.
/// Resumes occasionally repeat a header ("Experience" split across pages);
/// those fragments concatenate.
pub fn lines_of(sections: &[Section], kind: SectionKind) -> Vec<String> {
    sections
        .iter()
        .filter(|s| s.kind == kind)
        .flat_map(|s| s.lines.iter().cloned())
        .collect()
}
