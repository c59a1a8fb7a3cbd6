use core::fmt::{self, Display};
use hyper::StatusCode;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    NotFound,
    MethodNotAllowed,
    /// Request body exceeded the size limit.
    TooLarge,
    /// Malformed JSON or neither `sections` nor `questions` present.
    InvalidBody,
    /// Well-formed payload that contains no questions.
    NoQuestions,
    /// The document could not be assembled. Nothing is sent back but the error.
    Assembly,
}

impl From<docx::error::Error> for Error {
    fn from(err: docx::error::Error) -> Self {
        match err {
            docx::error::Error::NoQuestions => Self::NoQuestions,
            docx::error::Error::Assembly => Self::Assembly,
        }
    }
}

impl Error {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InvalidBody | Self::NoQuestions => StatusCode::BAD_REQUEST,
            Self::Assembly => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotFound => "Not found",
            Self::MethodNotAllowed => "Method not allowed",
            Self::TooLarge => "Request body too large",
            Self::InvalidBody => "Invalid request body",
            Self::NoQuestions => "No questions found",
            Self::Assembly => "Failed to generate document",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
