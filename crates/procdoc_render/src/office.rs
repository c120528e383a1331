//! Assembly of the office block model.

use crate::{Block, heading_blocks, reflow};
use procdoc_core::{Diagram, Section};
use tracing::debug;

/// Section names after which the flow diagram is placed. The first section
/// whose name equals any of these wins.
pub const DIAGRAM_MARKERS: [&str; 3] = [
    "Process Overview (AS IS)",
    "High Level Process Map (AS IS)",
    "Detailed Process Map (AS IS)",
];

/// Line shown under the document title.
pub const PDD_SUBTITLE: &str = "Process Definition Document (PDD)";

/// Build the ordered blocks of an office document.
///
/// The diagram, when given, follows the content of the first marker section;
/// without a marker section it is left out.
///
/// # Examples
///
/// ```
/// use procdoc_core::{Diagram, Section};
/// use procdoc_render::{office_blocks, Block};
///
/// let sections = vec![Section::new("Reporting", "<p>Weekly</p>")];
/// let diagram = Diagram::new("graph TD\n A --> B");
/// let blocks = office_blocks("Payroll", &sections, Some(&diagram));
///
/// assert!(!blocks.iter().any(|b| matches!(b, Block::Diagram(_))));
/// ```
pub fn office_blocks(
    process_name: &str,
    sections: &[Section],
    diagram: Option<&Diagram>,
) -> Vec<Block> {
    let mut blocks = vec![
        Block::Title(process_name.to_string()),
        Block::Subtitle(PDD_SUBTITLE.to_string()),
    ];

    let anchor = sections
        .iter()
        .position(|section| DIAGRAM_MARKERS.contains(&section.name().as_str()));
    let placement = diagram.zip(anchor);
    if diagram.is_some() && placement.is_none() {
        debug!("No diagram marker section, omitting diagram from office document");
    }

    for (position, section) in sections.iter().enumerate() {
        blocks.extend(heading_blocks(section.name()));
        blocks.extend(reflow(section.content()));

        if let Some((diagram, _)) = placement.filter(|(_, anchor)| *anchor == position) {
            blocks.push(Block::Diagram(diagram.clone()));
        }
    }
    blocks
}
