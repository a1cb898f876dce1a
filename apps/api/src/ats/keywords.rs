//! Keyword tables shared by the ATS checks.

/// Action verbs that applicant-tracking systems and recruiters weight
/// heavily. Matched case-insensitively as substrings of the resume text.
pub const POWER_VERBS: &[&str] = &[
    "achieved",
    "architected",
    "automated",
    "built",
    "collaborated",
    "coordinated",
    "created",
    "delivered",
    "designed",
    "developed",
    "directed",
    "drove",
    "established",
    "executed",
    "implemented",
    "improved",
    "increased",
    "initiated",
    "launched",
    "led",
    "managed",
    "mentored",
    "negotiated",
    "optimized",
    "orchestrated",
    "reduced",
    "resolved",
    "scaled",
    "shipped",
    "spearheaded",
    "streamlined",
    "transformed",
];

/// Verbs that usually prefix a quantified result ("reduced latency by 40%").
/// Three or more distinct hits suggest a measurement-driven work history.
pub const MEASURABLE_INDICATORS: &[&str] = &[
    "accelerated",
    "boosted",
    "cut",
    "decreased",
    "doubled",
    "exceeded",
    "generated",
    "grew",
    "increased",
    "lowered",
    "raised",
    "reduced",
    "saved",
    "tripled",
];

/// Counts how many table entries appear in `text` (already lowercased).
pub fn count_matches(text: &str, table: &[&str]) -> usize {
    table.iter().filter(|kw| text.contains(*kw)).count()
}
