use crate::{
    error::{Error, Result},
    layout::{self, Align, Line, Role, Run, Span},
};
use docx_rs::{
    AlignmentType, Docx, LineSpacing, LineSpacingType, PageMargin, Paragraph, RunFonts, Style, StyleType, Tab,
    TabValueType,
};
use std::io::Cursor;

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";

fn fonts() -> RunFonts {
    RunFonts::new().ascii(layout::FONT).hi_ansi(layout::FONT).cs(layout::FONT)
}

fn run(run: &Run) -> docx_rs::Run {
    let mut out = docx_rs::Run::new().add_text(run.text.as_str()).size(run.size).color(layout::BLACK).fonts(fonts());
    if run.bold {
        out = out.bold();
    }
    if run.italic {
        out = out.italic();
    }
    out
}

fn paragraph(line: &Line) -> Paragraph {
    let mut out = Paragraph::new().align(match line.align {
        Align::Left => AlignmentType::Left,
        Align::Center => AlignmentType::Center,
    });

    out = match line.role {
        Role::Title => out.style(TITLE_STYLE),
        Role::Heading => out.style(HEADING_STYLE),
        Role::Body => out,
    };

    let mut spacing = LineSpacing::new().before(line.spacing.before).after(line.spacing.after);
    if let Some(height) = line.spacing.line {
        spacing = spacing.line(height).line_rule(LineSpacingType::Auto);
    }
    out = out.line_spacing(spacing);

    if let Some(left) = line.indent {
        out = out.indent(Some(left), None, None, None);
    }
    if let Some(pos) = line.tab_stop {
        out = out.add_tab(Tab::new().val(TabValueType::Left).pos(pos));
    }

    for span in &line.spans {
        out = match span {
            Span::Text(text) => out.add_run(run(text)),
            Span::Tab => out.add_run(docx_rs::Run::new().add_tab()),
        };
    }
    out
}

/// Builds the document around the given paragraphs.
pub fn document(lines: &[Line]) -> Docx {
    let margin = PageMargin::new()
        .top(layout::MARGIN_VERTICAL)
        .bottom(layout::MARGIN_VERTICAL)
        .left(layout::MARGIN_HORIZONTAL)
        .right(layout::MARGIN_HORIZONTAL);
    let docx = Docx::new()
        .page_size(layout::PAGE_WIDTH, layout::PAGE_HEIGHT)
        .page_margin(margin)
        .default_fonts(fonts())
        .default_size(layout::BODY_SIZE)
        .add_style(Style::new(TITLE_STYLE, StyleType::Paragraph).name("Title"))
        .add_style(Style::new(HEADING_STYLE, StyleType::Paragraph).name("Heading 1"));
    lines.iter().fold(docx, |docx, line| docx.add_paragraph(paragraph(line)))
}

/// Serializes the paragraphs into an in-memory `.docx` archive.
pub fn render(lines: &[Line]) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    document(lines).build().pack(&mut cursor).map_err(|err| {
        log::error!("cannot pack document: {err}");
        Error::Assembly
    })?;
    Ok(cursor.into_inner())
}
