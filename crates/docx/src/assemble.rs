use crate::layout::{self, Line, Role, Run, Spacing};
use chrono::NaiveDate;
use model::{Body, Kind, Question};

/// Partitions questions by type. Groups appear in the order their type is first seen, and
/// questions keep their relative order within a group.
pub fn group(questions: &[Question]) -> Vec<(Kind, Vec<&Question>)> {
    let mut groups: Vec<(Kind, Vec<&Question>)> = Vec::new();
    for question in questions {
        let kind = question.kind();
        match groups.iter_mut().find(|(other, _)| *other == kind) {
            Some((_, members)) => members.push(question),
            None => groups.push((kind, vec![question])),
        }
    }
    groups
}

fn question_spacing(kind: Kind) -> Spacing {
    let after = match kind {
        Kind::Mcq | Kind::Match => 100,
        _ => 200,
    };
    Spacing { before: 150, after, line: Some(360) }
}

fn question_line(number: usize, question: &Question) -> Line {
    let text = match question.body {
        Body::Fill => question.question.replace('_', "_____"),
        _ => question.question.clone(),
    };
    let marks = question.marks().map(|marks| format!("[{marks} marks]")).unwrap_or_default();
    Line::new(question_spacing(question.kind()))
        .run(Run::bold(format!("{number}. {text} ")))
        .run(Run::italic(marks))
}

fn option_letter(index: usize, base: u8) -> char {
    // Wraps past `Z`/`z` instead of leaving the alphabet.
    let offset = u8::try_from(index % 26).unwrap_or_default();
    char::from(base + offset)
}

fn push_options(lines: &mut Vec<Line>, options: &[String]) {
    for (index, option) in options.iter().enumerate() {
        let letter = option_letter(index, b'A');
        lines.push(
            Line::new(Spacing::after(80))
                .columns(layout::OPTION_TAB)
                .run(Run::bold(format!("{letter}. ")))
                .run(Run::plain(option.as_str())),
        );
    }
}

fn push_columns(lines: &mut Vec<Line>, column_a: &[String], column_b: &[String]) {
    lines.push(
        Line::new(Spacing::after(100))
            .columns(layout::COLUMN_TAB)
            .run(Run::bold("Column A"))
            .tab()
            .run(Run::bold("Column B")),
    );

    let rows = column_a.len().max(column_b.len());
    for row in 0..rows {
        let left = column_a.get(row).map_or("", String::as_str);
        let right = column_b.get(row).map_or("", String::as_str);
        let letter = option_letter(row, b'a');
        lines.push(
            Line::new(Spacing::after(80))
                .columns(layout::COLUMN_TAB)
                .run(Run::bold(format!("{}. ", row + 1)))
                .run(Run::plain(left))
                .tab()
                .run(Run::bold(format!("{letter}. ")))
                .run(Run::plain(right)),
        );
    }
}

/// Lays out the whole paper as an ordered list of paragraphs. Deterministic for a given input
/// and date.
pub fn layout(questions: &[Question], date: NaiveDate) -> Vec<Line> {
    let mut lines = vec![
        Line::new(Spacing::after(300))
            .role(Role::Title)
            .centered()
            .run(Run::bold("QUESTION PAPER").size(layout::TITLE_SIZE)),
        Line::new(Spacing::after(500)).centered().run(Run::plain(date.format("%B %-d, %Y").to_string())),
    ];

    for (kind, members) in group(questions) {
        log::debug!("laying out section {} ({}) with {} questions", kind.letter(), kind.as_str(), members.len());
        lines.push(
            Line::new(Spacing { before: 400, after: 200, line: None })
                .role(Role::Heading)
                .run(Run::bold(kind.header()).size(layout::HEADER_SIZE)),
        );
        lines.push(Line::new(Spacing::after(250)).run(Run::italic(kind.instruction())));

        for (question, number) in members.into_iter().zip(1..) {
            lines.push(question_line(number, question));
            match &question.body {
                Body::Mcq { options } => push_options(&mut lines, options),
                Body::Match { column_a, column_b } => push_columns(&mut lines, column_a, column_b),
                // No answer space for the remaining types.
                Body::Fill | Body::Short | Body::Long | Body::TrueFalse { .. } => {}
            }
            lines.push(Line::new(Spacing::after(150)));
        }

        lines.push(Line::new(Spacing::after(300)));
    }

    lines
}
