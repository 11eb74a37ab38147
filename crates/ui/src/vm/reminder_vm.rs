use chrono::NaiveDateTime;
use track_core::model::{QuestionId, Reminder, ReminderId};
use track_core::reminders::is_past;

use crate::vm::time_fmt::format_datetime;
use crate::vm::tone::{Tone, difficulty_tone, status_tone};

/// A reminder card. `is_past` drives dimming and is a strict comparison,
/// independent of the label thresholds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReminderCardVm {
    pub id: ReminderId,
    pub question_id: QuestionId,
    pub label: String,
    pub is_past: bool,
    pub number: u64,
    pub title: String,
    pub topic: Option<String>,
    pub difficulty_tone: Tone,
    pub status_tone: Tone,
    pub link: Option<String>,
}

#[must_use]
pub fn map_reminder_cards(reminders: &[&Reminder], now: NaiveDateTime) -> Vec<ReminderCardVm> {
    reminders
        .iter()
        .map(|reminder| {
            let question = &reminder.question;
            ReminderCardVm {
                id: reminder.id,
                question_id: question.id,
                label: reminder
                    .reminder_at
                    .map_or_else(|| "No time set".to_owned(), |at| format_datetime(at, now)),
                is_past: reminder.reminder_at.is_some_and(|at| is_past(at, now)),
                number: question.leetcode_number,
                title: question.title.clone(),
                topic: question.topic_name.clone(),
                difficulty_tone: difficulty_tone(question.difficulty),
                status_tone: status_tone(question.status),
                link: question.has_link().then(|| question.link.clone()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use track_core::model::{Difficulty, LocalTimestamp, Question, QuestionStatus};
    use track_core::time::fixed_now;

    fn reminder(at: Option<NaiveDateTime>) -> Reminder {
        Reminder {
            id: ReminderId::new(1),
            question: Question {
                id: QuestionId::new(1),
                topic_id: None,
                topic_name: Some("Arrays".into()),
                leetcode_number: 1,
                title: "Two Sum".into(),
                link: "https://leetcode.com/problems/two-sum/".into(),
                difficulty: Difficulty::Easy,
                status: QuestionStatus::Todo,
                is_important: false,
                reminder: at.map(LocalTimestamp::new),
            },
            reminder_at: at.map(LocalTimestamp::new),
        }
    }

    #[test]
    fn past_cards_are_dimmed() {
        let now = fixed_now();
        let past = reminder(Some(now - Duration::minutes(5)));
        let exact = reminder(Some(now));
        let cards = map_reminder_cards(&[&past, &exact], now);
        assert!(cards[0].is_past);
        assert!(cards[0].label.ends_with("(Past)"));
        assert!(!cards[1].is_past);
        assert_eq!(cards[0].topic.as_deref(), Some("Arrays"));
        assert_eq!(cards[0].difficulty_tone, Tone::Green);
    }

    #[test]
    fn missing_time_is_labelled() {
        let missing = reminder(None);
        let cards = map_reminder_cards(&[&missing], fixed_now());
        assert_eq!(cards[0].label, "No time set");
        assert!(!cards[0].is_past);
    }
}
