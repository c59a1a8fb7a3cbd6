use crate::error::{Error, Result};
use alloc::{string::String, vec::Vec};
use core::num::NonZeroU32;
use serde::{Deserialize, Serialize};

/// The closed set of question categories. The exported document is organized by these rather
/// than by user-authored sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Mcq,
    Fill,
    Short,
    Long,
    Match,
    TrueFalse,
}

impl Kind {
    #[cfg(test)]
    pub const ALL: [Self; 6] = [Self::Mcq, Self::Fill, Self::Short, Self::Long, Self::Match, Self::TrueFalse];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mcq => "mcq",
            Self::Fill => "fill",
            Self::Short => "short",
            Self::Long => "long",
            Self::Match => "match",
            Self::TrueFalse => "true_false",
        }
    }

    /// Canonical section letter of the category.
    pub const fn letter(self) -> char {
        match self {
            Self::Mcq => 'A',
            Self::Fill => 'B',
            Self::Short => 'C',
            Self::Long => 'D',
            Self::Match => 'E',
            Self::TrueFalse => 'F',
        }
    }

    pub const fn header(self) -> &'static str {
        match self {
            Self::Mcq => "Multiple Choice Questions",
            Self::Fill => "Fill in the Blanks",
            Self::Short => "Short Answer Questions",
            Self::Long => "Long Answer Questions",
            Self::Match => "Match the Following",
            Self::TrueFalse => "True/False Questions",
        }
    }

    pub const fn instruction(self) -> &'static str {
        match self {
            Self::Mcq => "Choose the correct option from the given alternatives:",
            Self::Fill => "Fill in the blanks with appropriate words:",
            Self::Short => "Answer the following questions briefly:",
            Self::Long => "Answer the following questions in detail:",
            Self::Match => "Match the items in Column A with Column B:",
            Self::TrueFalse => "State whether the following statements are True or False:",
        }
    }
}

/// Variant-specific payload, tagged on the wire by the `type` field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Body {
    Mcq {
        options: Vec<String>,
    },
    Fill,
    Short,
    Long,
    Match {
        #[serde(rename = "columnA")]
        column_a: Vec<String>,
        #[serde(rename = "columnB")]
        column_b: Vec<String>,
    },
    TrueFalse {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        answer: Option<bool>,
    },
}

impl Body {
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Mcq { .. } => Kind::Mcq,
            Self::Fill => Kind::Fill,
            Self::Short => Kind::Short,
            Self::Long => Kind::Long,
            Self::Match { .. } => Kind::Match,
            Self::TrueFalse { .. } => Kind::TrueFalse,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    /// Opaque token, unique within its collection.
    pub id: String,
    /// Text to be displayed on the paper.
    pub question: String,
    /// Marks awarded for the question, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<u32>,
    #[serde(flatten)]
    pub body: Body,
}

fn drop_blank(items: Vec<String>) -> Vec<String> {
    items.into_iter().filter(|item| !item.trim().is_empty()).collect()
}

impl Question {
    /// Validates a freshly authored question. Blank options and column items are dropped before
    /// the minimum counts are checked; anything else that falls short is rejected outright.
    pub fn new(id: String, text: &str, marks: Option<u32>, body: Body) -> Result<Self> {
        let question = text.trim();
        if question.is_empty() {
            return Err(Error::EmptyQuestion);
        }

        let body = match body {
            Body::Mcq { options } => {
                let options = drop_blank(options);
                if options.len() < 2 {
                    return Err(Error::TooFewOptions);
                }
                Body::Mcq { options }
            }
            Body::Fill if !question.contains('_') => return Err(Error::MissingBlank),
            Body::Match { column_a, column_b } => {
                let column_a = drop_blank(column_a);
                let column_b = drop_blank(column_b);
                if column_a.len() < 2 || column_b.len() < 2 {
                    return Err(Error::TooFewItems);
                }
                Body::Match { column_a, column_b }
            }
            Body::TrueFalse { answer: None } => return Err(Error::MissingAnswer),
            body => body,
        };

        Ok(Self { id, question: question.into(), marks, body })
    }

    pub const fn kind(&self) -> Kind {
        self.body.kind()
    }

    /// A zero mark count is treated the same as an absent one.
    pub fn marks(&self) -> Option<NonZeroU32> {
        self.marks.and_then(NonZeroU32::new)
    }
}
