//! Resource paths relative to the configured base path.
//!
//! Constants name the route templates; the functions fill in ids.

use track_core::model::{QuestionId, TopicId};

pub const TOPICS: &str = "/topics";
pub const QUESTIONS: &str = "/questions";
pub const RECENT_COMPLETED: &str = "/questions/recent/completed";
pub const REMINDERS: &str = "/reminders";
pub const UPCOMING_REMINDERS: &str = "/reminders/upcoming";
pub const PROGRESS_TODAY: &str = "/progress/today";
pub const PROGRESS_HISTORY: &str = "/progress/history";
pub const PROGRESS_STATS: &str = "/progress/stats";
pub const PROGRESS_COMPLETIONS: &str = "/progress/completions";

#[must_use]
pub fn topic(id: TopicId) -> String {
    format!("{TOPICS}/{id}")
}

#[must_use]
pub fn topic_notes(id: TopicId) -> String {
    format!("{TOPICS}/{id}/notes")
}

#[must_use]
pub fn topic_questions(id: TopicId) -> String {
    format!("{TOPICS}/{id}/questions")
}

#[must_use]
pub fn question(id: QuestionId) -> String {
    format!("{QUESTIONS}/{id}")
}

#[must_use]
pub fn question_status(id: QuestionId) -> String {
    format!("{QUESTIONS}/{id}/status")
}

#[must_use]
pub fn question_important(id: QuestionId) -> String {
    format!("{QUESTIONS}/{id}/important")
}

#[must_use]
pub fn question_reminders(id: QuestionId) -> String {
    format!("{QUESTIONS}/{id}/reminders")
}
