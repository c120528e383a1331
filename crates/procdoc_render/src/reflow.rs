//! Reflow of lightweight HTML section content into office blocks.

use crate::Block;
use procdoc_core::strip_tags;

const BULLET_MARKERS: [char; 3] = ['-', '*', '•'];

/// Convert section content into paragraph, list item and empty blocks.
///
/// `<br>` and `</p>` end lines. Each line is trimmed; a blank line yields an
/// [`Block::Empty`]. Remaining tags are stripped, and a line left empty by
/// stripping yields nothing.
///
/// # Examples
///
/// ```
/// use procdoc_render::{reflow, Block};
///
/// let blocks = reflow("<p>Intro</p><ul><li>- Check totals</li></ul>");
/// assert_eq!(blocks, vec![
///     Block::Paragraph("Intro".to_string()),
///     Block::ListItem("- Check totals".to_string()),
/// ]);
/// ```
pub fn reflow(content: &str) -> Vec<Block> {
    let normalized = content.replace("<br>", "\n").replace("</p>", "\n");

    let mut blocks = Vec::new();
    for line in normalized.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            blocks.push(Block::Empty);
            continue;
        }

        let clean = strip_tags(line);
        if clean.is_empty() {
            continue;
        }

        if is_list_item(&clean) {
            blocks.push(Block::ListItem(clean));
        } else {
            blocks.push(Block::Paragraph(clean));
        }
    }
    blocks
}

fn is_list_item(line: &str) -> bool {
    line.starts_with(BULLET_MARKERS) || is_numbered(line)
}

/// Three leading digits followed by a period.
fn is_numbered(line: &str) -> bool {
    let mut chars = line.chars();
    let digits = chars.by_ref().take(3).filter(char::is_ascii_digit).count();
    digits == 3 && chars.next() == Some('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_requires_three_digits() {
        assert!(is_numbered("001. Open SAP"));
        assert!(!is_numbered("1. Open SAP"));
        assert!(!is_numbered("12a. Open SAP"));
        assert!(!is_numbered("123"));
    }

    #[test]
    fn test_blank_lines_are_preserved_as_empty_blocks() {
        let blocks = reflow("<p>First</p>\n\n<p>Second</p>");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph("First".to_string()),
                Block::Empty,
                Block::Empty,
                Block::Paragraph("Second".to_string()),
                Block::Empty,
            ]
        );
    }

    #[test]
    fn test_bullet_glyphs_are_list_items() {
        let blocks = reflow("• Validate vendor<br>* Post invoice<br>Plain text");
        assert_eq!(
            blocks,
            vec![
                Block::ListItem("• Validate vendor".to_string()),
                Block::ListItem("* Post invoice".to_string()),
                Block::Paragraph("Plain text".to_string()),
            ]
        );
    }

    #[test]
    fn test_tag_only_line_emits_nothing() {
        assert_eq!(reflow("<ul>"), Vec::<Block>::new());
    }
}
