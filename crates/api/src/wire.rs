//! JSON shapes exchanged with the backend and their mapping to domain types.
//!
//! Reads are lenient where the backend is loose (embedded topic objects,
//! null counts, bare question objects in reminder lists); writes are exact.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use track_core::model::{
    DailyCompletion, DailyProgress, Difficulty, LocalTimestamp, ProgressStats, Question,
    QuestionId, QuestionInput, QuestionStatus, Reminder, ReminderId, Topic, TopicId, TopicInput,
};

//
// ─── TOPICS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TopicDto {
    id: TopicId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    question_count: Option<u64>,
}

impl From<TopicDto> for Topic {
    fn from(dto: TopicDto) -> Self {
        Topic {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
            notes: dto.notes.unwrap_or_default(),
            description: dto.description.filter(|d| !d.trim().is_empty()),
            question_count: dto.question_count.unwrap_or(0),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TopicBody<'a> {
    name: &'a str,
    notes: &'a str,
}

impl<'a> From<&'a TopicInput> for TopicBody<'a> {
    fn from(input: &'a TopicInput) -> Self {
        Self {
            name: &input.name,
            notes: &input.notes,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct NotesBody<'a> {
    pub notes: &'a str,
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct TopicRefDto {
    #[serde(default)]
    id: Option<TopicId>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuestionDto {
    id: QuestionId,
    #[serde(default)]
    topic_id: Option<TopicId>,
    #[serde(default)]
    topic: Option<TopicRefDto>,
    #[serde(default)]
    leetcode_number: Option<u64>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    difficulty: Option<Difficulty>,
    #[serde(default)]
    status: Option<QuestionStatus>,
    #[serde(default)]
    is_important: Option<bool>,
    #[serde(default)]
    reminder_date_time: Option<LocalTimestamp>,
}

impl From<QuestionDto> for Question {
    fn from(dto: QuestionDto) -> Self {
        let (embedded_id, topic_name) = dto
            .topic
            .map_or((None, None), |topic| (topic.id, topic.name));
        Question {
            id: dto.id,
            topic_id: dto.topic_id.or(embedded_id),
            topic_name,
            leetcode_number: dto.leetcode_number.unwrap_or(0),
            title: dto.title.unwrap_or_default(),
            link: dto.link.unwrap_or_default(),
            difficulty: dto.difficulty.unwrap_or(Difficulty::Unknown),
            status: dto.status.unwrap_or(QuestionStatus::Unknown),
            is_important: dto.is_important.unwrap_or(false),
            reminder: dto.reminder_date_time,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuestionBody<'a> {
    topic_id: TopicId,
    leetcode_number: u64,
    title: &'a str,
    link: &'a str,
    difficulty: Difficulty,
    status: QuestionStatus,
    is_important: bool,
    /// Serialized as minute precision or `null`, never zone-adjusted.
    reminder_date_time: Option<LocalTimestamp>,
}

impl<'a> From<&'a QuestionInput> for QuestionBody<'a> {
    fn from(input: &'a QuestionInput) -> Self {
        Self {
            topic_id: input.topic_id,
            leetcode_number: input.leetcode_number,
            title: &input.title,
            link: &input.link,
            difficulty: input.difficulty,
            status: input.status,
            is_important: input.is_important,
            reminder_date_time: input.reminder,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusBody {
    pub status: QuestionStatus,
}

//
// ─── REMINDERS ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WrappedReminderDto {
    id: ReminderId,
    question: QuestionDto,
    #[serde(default)]
    reminder_date_time: Option<LocalTimestamp>,
}

/// Either a `{id, question, reminderDateTime}` record or a bare question
/// that carries its own reminder time.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ReminderDto {
    Wrapped(WrappedReminderDto),
    Bare(QuestionDto),
}

impl From<ReminderDto> for Reminder {
    fn from(dto: ReminderDto) -> Self {
        match dto {
            ReminderDto::Wrapped(wrapped) => {
                let question = Question::from(wrapped.question);
                Reminder {
                    id: wrapped.id,
                    reminder_at: wrapped.reminder_date_time.or(question.reminder),
                    question,
                }
            }
            ReminderDto::Bare(dto) => {
                let question = Question::from(dto);
                Reminder {
                    id: ReminderId::new(question.id.value()),
                    reminder_at: question.reminder,
                    question,
                }
            }
        }
    }
}

/// Accepts a JSON array or a single object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DailyProgressDto {
    date: NaiveDate,
    #[serde(default)]
    completed_questions: Option<u32>,
    #[serde(default)]
    in_progress_questions: Option<u32>,
    #[serde(default)]
    todo_questions: Option<u32>,
    #[serde(default)]
    total_questions: Option<u32>,
}

impl From<DailyProgressDto> for DailyProgress {
    fn from(dto: DailyProgressDto) -> Self {
        DailyProgress {
            date: dto.date,
            completed: dto.completed_questions.unwrap_or(0),
            in_progress: dto.in_progress_questions.unwrap_or(0),
            todo: dto.todo_questions.unwrap_or(0),
            total: dto.total_questions.unwrap_or(0),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProgressStatsDto {
    #[serde(default)]
    total_questions: Option<u32>,
    #[serde(default)]
    completed_questions: Option<u32>,
    #[serde(default)]
    in_progress_questions: Option<u32>,
    #[serde(default)]
    todo_questions: Option<u32>,
}

impl From<ProgressStatsDto> for ProgressStats {
    fn from(dto: ProgressStatsDto) -> Self {
        ProgressStats {
            total: dto.total_questions.unwrap_or(0),
            completed: dto.completed_questions.unwrap_or(0),
            in_progress: dto.in_progress_questions.unwrap_or(0),
            todo: dto.todo_questions.unwrap_or(0),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DailyCompletionDto {
    date: NaiveDate,
    #[serde(default)]
    completed: Option<u64>,
}

impl From<DailyCompletionDto> for DailyCompletion {
    fn from(dto: DailyCompletionDto) -> Self {
        DailyCompletion {
            date: dto.date,
            completed: dto.completed.unwrap_or(0),
        }
    }
}

/// Format a date for query parameters.
#[must_use]
pub(crate) fn query_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn question_accepts_embedded_topic() {
        let dto: QuestionDto = decode(json!({
            "id": 4,
            "topic": {"id": 2, "name": "Arrays", "notes": ""},
            "leetcodeNumber": 1,
            "title": "Two Sum",
            "link": null,
            "difficulty": "EASY",
            "status": "DONE",
            "isImportant": null,
            "reminderDateTime": "2026-01-22T17:42:00",
            "createdAt": "2026-01-01T10:00:00"
        }));
        let q = Question::from(dto);
        assert_eq!(q.topic_id, Some(TopicId::new(2)));
        assert_eq!(q.topic_name.as_deref(), Some("Arrays"));
        assert_eq!(q.link, "");
        assert!(!q.is_important);
        assert_eq!(q.reminder.unwrap().to_wire(), "2026-01-22T17:42");
    }

    #[test]
    fn question_tolerates_unknown_labels_and_missing_topic() {
        let dto: QuestionDto = decode(json!({
            "id": 5,
            "leetcodeNumber": 15,
            "title": "3Sum",
            "difficulty": "BRUTAL",
            "status": null
        }));
        let q = Question::from(dto);
        assert_eq!(q.topic_id, None);
        assert_eq!(q.difficulty, Difficulty::Unknown);
        assert_eq!(q.status, QuestionStatus::Unknown);
    }

    #[test]
    fn reminder_accepts_both_shapes() {
        let wrapped: ReminderDto = decode(json!({
            "id": 11,
            "question": {"id": 4, "title": "Two Sum", "leetcodeNumber": 1},
            "reminderDateTime": "2026-01-22T09:00:00"
        }));
        let bare: ReminderDto = decode(json!({
            "id": 4,
            "title": "Two Sum",
            "leetcodeNumber": 1,
            "reminderDateTime": "2026-01-22T09:00"
        }));
        let wrapped = Reminder::from(wrapped);
        let bare = Reminder::from(bare);
        assert_eq!(wrapped.id, ReminderId::new(11));
        assert_eq!(bare.id, ReminderId::new(4));
        assert_eq!(wrapped.reminder_at, bare.reminder_at);
        assert_eq!(wrapped.question.title, bare.question.title);
    }

    #[test]
    fn progress_null_counts_default_to_zero() {
        let dto: DailyProgressDto = decode(json!({
            "id": 1,
            "date": "2026-01-20",
            "completedQuestions": null,
            "todoQuestions": 4
        }));
        let day = DailyProgress::from(dto);
        assert_eq!(day.completed, 0);
        assert_eq!(day.in_progress, 0);
        assert_eq!(day.todo, 4);
    }

    #[test]
    fn question_body_sends_minute_precision_or_null() {
        let input = QuestionInput {
            topic_id: TopicId::new(1),
            leetcode_number: 1,
            title: "Two Sum".into(),
            link: String::new(),
            difficulty: Difficulty::Easy,
            status: QuestionStatus::InProgress,
            is_important: false,
            reminder: Some(LocalTimestamp::parse("2026-01-22T23:30").unwrap()),
        };
        let body = serde_json::to_value(QuestionBody::from(&input)).unwrap();
        assert_eq!(body["reminderDateTime"], "2026-01-22T23:30");
        assert_eq!(body["status"], "IN_PROGRESS");
        assert_eq!(body["topicId"], 1);

        let cleared = QuestionInput {
            reminder: None,
            ..input
        };
        let body = serde_json::to_value(QuestionBody::from(&cleared)).unwrap();
        assert!(body["reminderDateTime"].is_null());
    }
}
