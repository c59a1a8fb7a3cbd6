use core::fmt::{self, Display};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Question text is blank after trimming.
    EmptyQuestion,
    /// Fewer than two non-blank options for a multiple choice question.
    TooFewOptions,
    /// Fill-in-the-blank text without a single `_`.
    MissingBlank,
    /// Either column of a match question has fewer than two non-blank items.
    TooFewItems,
    /// True/false question without a chosen answer.
    MissingAnswer,
    /// Section title is blank after trimming.
    EmptyTitle,
    UnknownSection,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EmptyQuestion => "Question text must not be empty.",
            Self::TooFewOptions => "Please add at least 2 options for MCQ.",
            Self::MissingBlank => "Use underscore (_) to indicate blank spaces.",
            Self::TooFewItems => "Please add at least 2 items for both columns.",
            Self::MissingAnswer => "Please select True or False.",
            Self::EmptyTitle => "Section title must not be empty.",
            Self::UnknownSection => "Section not found.",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
