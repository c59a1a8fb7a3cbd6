pub mod assemble;
pub mod error;
pub mod layout;
pub mod render;

use chrono::{DateTime, TimeZone};
use model::Question;

pub const MEDIA_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A fully serialized question paper.
pub struct Document {
    /// Suggested download name, e.g. `QuestionPaper_1760486400000.docx`.
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub fn filename<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format!("QuestionPaper_{}.docx", now.timestamp_millis())
}

/// Assembles the export for the given questions. The date block uses the local date of `now`
/// and the file name its Unix time in milliseconds. Either the whole document is produced or
/// nothing is.
pub fn assemble<Tz: TimeZone>(questions: &[Question], now: &DateTime<Tz>) -> error::Result<Document> {
    if questions.is_empty() {
        return Err(error::Error::NoQuestions);
    }

    let lines = assemble::layout(questions, now.date_naive());
    let bytes = render::render(&lines)?;
    let filename = filename(now);
    log::info!("assembled {} questions into {} paragraphs ({} bytes)", questions.len(), lines.len(), bytes.len());
    Ok(Document { filename, bytes })
}
