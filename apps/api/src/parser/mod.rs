//! Resume text parsing: section segmentation plus per-section field
//! extraction. `segment` is total over any string input; malformed or sparse
//! text degrades to empty fields, never an error.

pub mod dates;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod lists;
pub mod models;
pub mod personal;
pub mod sections;

use crate::parser::models::StructuredResume;
use crate::parser::sections::{lines_of, split_sections, SectionKind};

/// Parses raw extracted text into a structured resume.
///
/// Lines are classified into sections, then each section runs its own
/// extractor. Project entries are never produced from free text; that section
/// has no line-level grammar worth guessing at.
pub fn segment(raw_text: &str) -> StructuredResume {
    let sections = split_sections(raw_text);

    let header_lines = lines_of(&sections, SectionKind::Header);
    let mut personal_info = personal::extract_personal_info(&header_lines, raw_text);
    personal_info.summary = lines_of(&sections, SectionKind::Summary).join(" ");

    StructuredResume {
        personal_info,
        experience: experience::parse_experience(&lines_of(&sections, SectionKind::Experience)),
        education: education::parse_education(&lines_of(&sections, SectionKind::Education)),
        skills: lists::parse_skills(&lines_of(&sections, SectionKind::Skills)),
        certifications: lists::parse_certifications(&lines_of(
            &sections,
            SectionKind::Certifications,
        )),
        languages: lists::parse_languages(&lines_of(&sections, SectionKind::Languages)),
        projects: Vec::new(),
    }
}
