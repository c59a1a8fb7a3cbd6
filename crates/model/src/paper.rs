use crate::{
    error::{Error, Result},
    question::{Body, Question},
};
use alloc::{format, string::String, vec::Vec};
use serde::{Deserialize, Serialize};

/// User-defined grouping of questions. Only meaningful while editing: the exported document
/// regroups everything by question type.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub instructions: String,
    /// Insertion order is display order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Moves the item identified by `active` into the slot currently held by `over`.
fn move_by_id<T>(items: &mut Vec<T>, id: impl Fn(&T) -> &str, active: &str, over: &str) -> bool {
    let from = items.iter().position(|item| id(item) == active);
    let to = items.iter().position(|item| id(item) == over);
    let Some((from, to)) = from.zip(to) else {
        return false;
    };
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// In-memory editing model of a question paper. Nothing is ever removed implicitly.
#[derive(Debug, Default, Serialize)]
pub struct Paper {
    pub sections: Vec<Section>,
    #[serde(skip)]
    sequence: u64,
}

impl Paper {
    fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    fn section_mut(&mut self, id: &str) -> Result<&mut Section> {
        self.sections.iter_mut().find(|section| section.id == id).ok_or(Error::UnknownSection)
    }

    pub fn add_section(&mut self, title: &str, instructions: &str) -> Result<&Section> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }

        let id = format!("section-{}", self.next_sequence());
        self.sections.push(Section { id, title: title.into(), instructions: instructions.trim().into(), questions: Vec::new() });
        Ok(&self.sections[self.sections.len() - 1])
    }

    pub fn remove_section(&mut self, id: &str) -> Option<Section> {
        let index = self.sections.iter().position(|section| section.id == id)?;
        Some(self.sections.remove(index))
    }

    pub fn move_section(&mut self, active: &str, over: &str) -> bool {
        move_by_id(&mut self.sections, |section| section.id.as_str(), active, over)
    }

    /// Validates and appends a new question to the end of the given section.
    pub fn add_question(&mut self, section: &str, text: &str, marks: Option<u32>, body: Body) -> Result<&Question> {
        // Fail on the section before spending a sequence number.
        self.section_mut(section)?;
        let id = format!("question-{}-{}", body.kind().as_str(), self.next_sequence());
        let question = Question::new(id, text, marks, body)?;
        let questions = &mut self.section_mut(section)?.questions;
        questions.push(question);
        Ok(&questions[questions.len() - 1])
    }

    pub fn remove_question(&mut self, section: &str, id: &str) -> Result<Option<Question>> {
        let questions = &mut self.section_mut(section)?.questions;
        Ok(questions.iter().position(|question| question.id == id).map(|index| questions.remove(index)))
    }

    pub fn move_question(&mut self, section: &str, active: &str, over: &str) -> Result<bool> {
        let questions = &mut self.section_mut(section)?.questions;
        Ok(move_by_id(questions, |question| question.id.as_str(), active, over))
    }

    /// Every question in section order, then in-section order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> + '_ {
        self.sections.iter().flat_map(|section| section.questions.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec};

    fn ids(paper: &Paper, section: &str) -> Vec<String> {
        let section = paper.sections.iter().find(|s| s.id == section).unwrap();
        section.questions.iter().map(|q| q.id.clone()).collect()
    }

    #[test]
    fn sections_require_a_title() {
        let mut paper = Paper::default();
        assert_eq!(paper.add_section("  ", "anything").unwrap_err(), Error::EmptyTitle);
        let section = paper.add_section(" Part I ", " Attempt all. ").unwrap();
        assert_eq!(section.title, "Part I");
        assert_eq!(section.instructions, "Attempt all.");
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut paper = Paper::default();
        let first = paper.add_section("One", "").unwrap().id.clone();
        let second = paper.add_section("Two", "").unwrap().id.clone();
        assert_ne!(first, second);

        let a = paper.add_question(&first, "Why?", None, Body::Short).unwrap().id.clone();
        let b = paper.add_question(&first, "Why?", None, Body::Short).unwrap().id.clone();
        let c = paper.add_question(&second, "Why?", None, Body::Long).unwrap().id.clone();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(a.starts_with("question-short-"));
        assert!(c.starts_with("question-long-"));
    }

    #[test]
    fn rejected_questions_are_not_added() {
        let mut paper = Paper::default();
        let section = paper.add_section("One", "").unwrap().id.clone();
        let body = Body::Mcq { options: vec!["only".to_string()] };
        assert_eq!(paper.add_question(&section, "Pick", None, body).unwrap_err(), Error::TooFewOptions);
        assert!(ids(&paper, &section).is_empty());
        assert_eq!(paper.add_question("missing", "Why?", None, Body::Short).unwrap_err(), Error::UnknownSection);
    }

    #[test]
    fn questions_move_like_array_move() {
        let mut paper = Paper::default();
        let section = paper.add_section("One", "").unwrap().id.clone();
        let added: Vec<_> = (0..4)
            .map(|_| paper.add_question(&section, "Why?", None, Body::Short).unwrap().id.clone())
            .collect();

        assert!(paper.move_question(&section, &added[0], &added[2]).unwrap());
        assert_eq!(ids(&paper, &section), [&added[1], &added[2], &added[0], &added[3]].map(String::clone));

        assert!(!paper.move_question(&section, &added[0], "missing").unwrap());
        assert_eq!(ids(&paper, &section), [&added[1], &added[2], &added[0], &added[3]].map(String::clone));

        let removed = paper.remove_question(&section, &added[2]).unwrap().unwrap();
        assert_eq!(removed.id, added[2]);
        assert_eq!(ids(&paper, &section), [&added[1], &added[0], &added[3]].map(String::clone));
        assert_eq!(paper.remove_question(&section, &added[2]).unwrap(), None);
    }

    #[test]
    fn flattening_follows_section_order() {
        let mut paper = Paper::default();
        let first = paper.add_section("One", "").unwrap().id.clone();
        let second = paper.add_section("Two", "").unwrap().id.clone();
        let a = paper.add_question(&first, "A?", None, Body::Short).unwrap().id.clone();
        let b = paper.add_question(&second, "B?", None, Body::Short).unwrap().id.clone();
        let c = paper.add_question(&first, "C?", None, Body::Short).unwrap().id.clone();

        let order: Vec<_> = paper.questions().map(|q| q.id.clone()).collect();
        assert_eq!(order, [a.clone(), c.clone(), b.clone()]);

        assert!(paper.move_section(&second, &first));
        let order: Vec<_> = paper.questions().map(|q| q.id.clone()).collect();
        assert_eq!(order, [b, a, c]);

        assert!(paper.remove_section(&first).is_some());
        assert!(paper.remove_section(&first).is_none());
    }
}
