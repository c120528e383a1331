//! Helpers for the lightweight HTML carried in section content.

use crate::Section;
use regex::Regex;
use std::sync::LazyLock;

/// Process name used when the first section yields no usable text.
pub const DEFAULT_PROCESS_NAME: &str = "Process Design Document";

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("Valid tag regex"));

/// Remove every `<...>` tag from the text, leaving inner text untouched.
///
/// # Examples
///
/// ```
/// use procdoc_core::strip_tags;
///
/// assert_eq!(strip_tags("<p>Invoice <strong>Approval</strong></p>"), "Invoice Approval");
/// ```
pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}

/// Derive the process name from the first section's content.
///
/// # Examples
///
/// ```
/// use procdoc_core::{process_name, Section, DEFAULT_PROCESS_NAME};
///
/// let sections = vec![Section::new("Process Name", "<p> Vendor Onboarding </p>")];
/// assert_eq!(process_name(&sections), "Vendor Onboarding");
/// assert_eq!(process_name(&[]), DEFAULT_PROCESS_NAME);
/// ```
pub fn process_name(sections: &[Section]) -> String {
    sections
        .first()
        .map(|section| strip_tags(section.content()).trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PROCESS_NAME.to_string())
}
