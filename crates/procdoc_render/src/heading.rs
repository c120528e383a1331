//! Heading depth policy keyed on section names.

use crate::{Block, HeadingLevel};

/// How a section's heading is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingPlan {
    /// A single heading at the given level
    Single(HeadingLevel),
    /// A level-1 group heading followed by the section name at level 2
    Grouped(&'static str),
}

struct HeadingRule {
    matches: fn(&str) -> bool,
    plan: HeadingPlan,
}

// Ordered; the first matching rule wins.
const HEADING_RULES: &[HeadingRule] = &[
    HeadingRule {
        matches: |name| {
            ["Purpose", "Objectives", "Key Contacts", "Pre-requisites"]
                .iter()
                .any(|needle| name.contains(needle))
        },
        plan: HeadingPlan::Single(HeadingLevel::Two),
    },
    HeadingRule {
        matches: |name| name.contains("AS IS") && name.contains("Overview"),
        plan: HeadingPlan::Grouped("AS IS Process Description"),
    },
    HeadingRule {
        matches: |name| name.contains("TO BE") && name.contains("Overview"),
        plan: HeadingPlan::Grouped("TO BE Process Description"),
    },
    HeadingRule {
        matches: |name| name.contains("Exceptions Handling") || name.contains("Reporting"),
        plan: HeadingPlan::Single(HeadingLevel::One),
    },
];

/// Heading plan for a section name.
///
/// # Examples
///
/// ```
/// use procdoc_render::{heading_plan, HeadingLevel, HeadingPlan};
///
/// assert_eq!(heading_plan("Key Contacts"), HeadingPlan::Single(HeadingLevel::Two));
/// assert_eq!(heading_plan("Reporting"), HeadingPlan::Single(HeadingLevel::One));
/// assert_eq!(
///     heading_plan("TO BE Process Overview"),
///     HeadingPlan::Grouped("TO BE Process Description")
/// );
/// ```
pub fn heading_plan(name: &str) -> HeadingPlan {
    HEADING_RULES
        .iter()
        .find(|rule| (rule.matches)(name))
        .map(|rule| rule.plan)
        .unwrap_or(HeadingPlan::Single(HeadingLevel::Two))
}

/// Heading blocks emitted ahead of a section's content.
pub fn heading_blocks(name: &str) -> Vec<Block> {
    match heading_plan(name) {
        HeadingPlan::Single(level) => vec![Block::heading(level, name)],
        HeadingPlan::Grouped(group) => vec![
            Block::heading(HeadingLevel::One, group),
            Block::heading(HeadingLevel::Two, name),
        ],
    }
}
