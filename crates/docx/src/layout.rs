//! Format-agnostic paragraph descriptors. Sizes are in half-points and distances in twips
//! (1/1440 of an inch), which is what the document format stores natively.

pub const FONT: &str = "Times New Roman";
pub const BLACK: &str = "000000";

pub const TITLE_SIZE: usize = 40;
pub const HEADER_SIZE: usize = 28;
pub const BODY_SIZE: usize = 24;

/// US Letter.
pub const PAGE_WIDTH: u32 = 12240;
pub const PAGE_HEIGHT: u32 = 15840;
pub const MARGIN_VERTICAL: i32 = 1000;
pub const MARGIN_HORIZONTAL: i32 = 900;

pub const INDENT: i32 = 720;
pub const OPTION_TAB: usize = 720;
pub const COLUMN_TAB: usize = 3600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Title,
    Heading,
    Body,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Spacing {
    pub before: u32,
    pub after: u32,
    /// Line height in 240ths of a line.
    pub line: Option<i32>,
}

impl Spacing {
    pub const fn after(after: u32) -> Self {
        Self { before: 0, after, line: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub size: usize,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), bold: false, italic: false, size: BODY_SIZE }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self { bold: true, ..Self::plain(text) }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self { italic: true, ..Self::plain(text) }
    }

    pub fn size(self, size: usize) -> Self {
        Self { size, ..self }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Span {
    Text(Run),
    Tab,
}

/// A single paragraph of the output document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub role: Role,
    pub align: Align,
    pub spans: Vec<Span>,
    pub indent: Option<i32>,
    pub tab_stop: Option<usize>,
    pub spacing: Spacing,
}

impl Line {
    pub const fn new(spacing: Spacing) -> Self {
        Self { role: Role::Body, align: Align::Left, spans: Vec::new(), indent: None, tab_stop: None, spacing }
    }

    pub fn run(mut self, run: Run) -> Self {
        self.spans.push(Span::Text(run));
        self
    }

    pub fn tab(mut self) -> Self {
        self.spans.push(Span::Tab);
        self
    }

    pub fn role(self, role: Role) -> Self {
        Self { role, ..self }
    }

    pub fn centered(self) -> Self {
        Self { align: Align::Center, ..self }
    }

    /// Indents the paragraph and sets a left tab stop for the second column.
    pub fn columns(self, tab_stop: usize) -> Self {
        Self { indent: Some(INDENT), tab_stop: Some(tab_stop), ..self }
    }

    /// Plain-text rendering, with tabs as `\t`.
    pub fn text(&self) -> String {
        self.spans
            .iter()
            .map(|span| match span {
                Span::Text(run) => run.text.as_str(),
                Span::Tab => "\t",
            })
            .collect()
    }

    pub fn is_blank(&self) -> bool {
        self.spans.is_empty()
    }
}
