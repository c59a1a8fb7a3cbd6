#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
pub mod paper;
pub mod question;

pub use paper::{Paper, Section};
pub use question::{Body, Kind, Question};

use alloc::{fmt, string::String, vec::Vec};
use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer,
};

/// Acceptable schema for export requests: a JSON object with either a list of sections or a flat
/// list of questions. Any other shape is rejected while deserializing.
pub struct Payload {
    pub sections: Option<Vec<Section>>,
    pub questions: Option<Vec<Question>>,
}

impl Payload {
    /// Resolves the working list of questions. Sections take precedence and are flattened in
    /// section order, discarding their titles and instructions. Returns `None` if neither field
    /// was provided.
    pub fn into_questions(self) -> Option<Vec<Question>> {
        match self {
            Self { sections: Some(sections), .. } => {
                Some(sections.into_iter().flat_map(|section| section.questions).collect())
            }
            Self { questions, .. } => questions,
        }
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = Payload;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object with `sections` or `questions`")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        use serde::de::Error;

        let mut sections = None::<Option<Vec<Section>>>;
        let mut questions = None::<Option<Vec<Question>>>;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "sections" if sections.is_some() => return Err(A::Error::duplicate_field("sections")),
                "questions" if questions.is_some() => return Err(A::Error::duplicate_field("questions")),
                "sections" => sections = Some(map.next_value()?),
                "questions" => questions = Some(map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(Payload { sections: sections.flatten(), questions: questions.flatten() })
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PayloadVisitor)
    }
}
