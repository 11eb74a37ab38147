use chrono::NaiveDateTime;
use track_core::model::{Question, QuestionId, Topic, TopicId};

use crate::vm::time_fmt::format_datetime;
use crate::vm::tone::{Tone, difficulty_tone, status_label, status_tone};

/// One row of a question list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRowVm {
    pub id: QuestionId,
    pub number: String,
    pub title: String,
    pub difficulty: &'static str,
    pub difficulty_tone: Tone,
    pub status: &'static str,
    pub status_tone: Tone,
    pub important: bool,
    pub link: Option<String>,
    /// Absent when the question's topic is unknown.
    pub topic: Option<String>,
    pub reminder: Option<String>,
}

#[must_use]
pub fn map_question_rows(questions: &[&Question], now: NaiveDateTime) -> Vec<QuestionRowVm> {
    questions.iter().map(|q| question_row(q, now)).collect()
}

#[must_use]
pub fn question_row(question: &Question, now: NaiveDateTime) -> QuestionRowVm {
    QuestionRowVm {
        id: question.id,
        number: format!("#{}", question.leetcode_number),
        title: question.title.clone(),
        difficulty: question.difficulty.as_str(),
        difficulty_tone: difficulty_tone(question.difficulty),
        status: status_label(question.status),
        status_tone: status_tone(question.status),
        important: question.is_important,
        link: question.has_link().then(|| question.link.clone()),
        topic: question.topic_name.clone(),
        reminder: question.reminder.map(|at| format_datetime(at, now)),
    }
}

/// One entry of the topics list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub id: TopicId,
    pub name: String,
    pub count_label: String,
    pub notes_preview: Option<String>,
}

const NOTES_PREVIEW_CHARS: usize = 80;

#[must_use]
pub fn map_topic_cards(topics: &[Topic]) -> Vec<TopicCardVm> {
    topics
        .iter()
        .map(|topic| TopicCardVm {
            id: topic.id,
            name: topic.name.clone(),
            count_label: match topic.question_count {
                1 => "1 question".to_owned(),
                n => format!("{n} questions"),
            },
            notes_preview: topic.has_notes().then(|| preview(&topic.notes)),
        })
        .collect()
}

fn preview(notes: &str) -> String {
    let first_line = notes.trim().lines().next().unwrap_or_default();
    if first_line.chars().count() > NOTES_PREVIEW_CHARS {
        let cut: String = first_line.chars().take(NOTES_PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        first_line.to_owned()
    }
}
