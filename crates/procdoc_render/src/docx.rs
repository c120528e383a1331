//! DOCX packing of the block model.

use crate::{Block, HeadingLevel};
use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText,
    NumberFormat, Numbering, NumberingId, Paragraph, Run, SpecialIndentType, Start, Style,
    StyleType,
};
use procdoc_error::{RenderError, RenderErrorKind};
use std::io::Cursor;

const BULLET_NUMBERING: usize = 1;

/// Pack blocks into the bytes of a `.docx` file.
///
/// # Errors
///
/// Returns a packing error if the archive cannot be written.
pub fn pack_docx(blocks: &[Block]) -> Result<Vec<u8>, RenderError> {
    let mut docx = with_styles(Docx::new());

    for block in blocks {
        docx = match block {
            Block::Title(text) => docx.add_paragraph(
                text_paragraph(text)
                    .style("Title")
                    .align(AlignmentType::Center),
            ),
            Block::Subtitle(text) => docx.add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(text).italic())
                    .align(AlignmentType::Center),
            ),
            Block::Heading { level, text } => docx.add_paragraph(
                text_paragraph(text).style(heading_style(*level)),
            ),
            Block::Paragraph(text) => docx.add_paragraph(text_paragraph(text)),
            Block::ListItem(text) => docx.add_paragraph(
                text_paragraph(text)
                    .style("ListBullet")
                    .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0)),
            ),
            Block::Empty => docx.add_paragraph(Paragraph::new()),
            Block::Diagram(diagram) => docx
                .add_paragraph(
                    text_paragraph("Process Flow Diagram").style(heading_style(HeadingLevel::Two)),
                )
                .add_paragraph(text_paragraph("Diagram code (Mermaid syntax):"))
                .add_paragraph(multiline_paragraph(diagram.as_str()))
                .add_paragraph(Paragraph::new()),
        };
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| RenderError::new(RenderErrorKind::Packing(e.to_string())))?;
    Ok(buffer.into_inner())
}

fn heading_style(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::One => "Heading1",
        HeadingLevel::Two => "Heading2",
    }
}

fn text_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

/// Word ignores `\n` inside a text run, so each line gets an explicit break.
fn multiline_paragraph(text: &str) -> Paragraph {
    let mut run = Run::new();
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    Paragraph::new().add_run(run)
}

fn with_styles(docx: Docx) -> Docx {
    docx.add_style(
        Style::new("Title", StyleType::Paragraph)
            .name("Title")
            .size(52)
            .bold(),
    )
    .add_style(
        Style::new("Heading1", StyleType::Paragraph)
            .name("Heading 1")
            .size(32)
            .bold(),
    )
    .add_style(
        Style::new("Heading2", StyleType::Paragraph)
            .name("Heading 2")
            .size(26)
            .bold(),
    )
    .add_style(Style::new("ListBullet", StyleType::Paragraph).name("List Bullet"))
    .add_abstract_numbering(
        AbstractNumbering::new(BULLET_NUMBERING).add_level(
            Level::new(
                0,
                Start::new(1),
                NumberFormat::new("bullet"),
                LevelText::new("•"),
                LevelJc::new("left"),
            )
            .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
        ),
    )
    .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
}
