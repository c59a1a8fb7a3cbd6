use core::fmt::{self, Display};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Nothing to export after flattening.
    NoQuestions,
    /// The document library failed to serialize the paper.
    Assembly,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoQuestions => "No questions found",
            Self::Assembly => "Failed to generate document",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
