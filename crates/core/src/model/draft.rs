use thiserror::Error;
use url::Url;

use crate::model::ids::TopicId;
use crate::model::question::{Difficulty, Question, QuestionStatus};
use crate::model::timestamp::LocalTimestamp;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Client-side form errors. A draft that fails validation is never sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("a topic must be selected")]
    MissingTopic,

    #[error("a LeetCode number is required")]
    MissingLeetcodeNumber,

    #[error("LeetCode number must be a positive integer, got {0:?}")]
    InvalidLeetcodeNumber(String),

    #[error("a title is required")]
    MissingTitle,

    #[error("link must be empty or an absolute URL, got {0:?}")]
    InvalidLink(String),

    #[error("reminder must look like yyyy-mm-ddThh:mm, got {0:?}")]
    InvalidReminder(String),

    #[error("topic name cannot be empty")]
    EmptyTopicName,
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// Raw add/edit form state for a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub topic_id: Option<TopicId>,
    pub leetcode_number: String,
    pub title: String,
    pub link: String,
    pub difficulty: Difficulty,
    pub status: QuestionStatus,
    pub is_important: bool,
    /// Empty means no reminder.
    pub reminder: String,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self {
            topic_id: None,
            leetcode_number: String::new(),
            title: String::new(),
            link: String::new(),
            difficulty: Difficulty::Medium,
            status: QuestionStatus::Todo,
            is_important: false,
            reminder: String::new(),
        }
    }
}

impl QuestionDraft {
    /// Empty form with a preselected topic.
    #[must_use]
    pub fn for_topic(topic_id: TopicId) -> Self {
        Self {
            topic_id: Some(topic_id),
            ..Self::default()
        }
    }

    /// Pre-fill the edit form from a stored question.
    ///
    /// The reminder is kept at minute precision exactly as stored so that
    /// saving the form unchanged sends back the same wall-clock minute.
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        let difficulty = if question.difficulty.is_known() {
            question.difficulty
        } else {
            Difficulty::Medium
        };
        let status = if question.status.is_known() {
            question.status
        } else {
            QuestionStatus::Todo
        };
        Self {
            topic_id: question.topic_id,
            leetcode_number: question.leetcode_number.to_string(),
            title: question.title.clone(),
            link: question.link.clone(),
            difficulty,
            status,
            is_important: question.is_important,
            reminder: question
                .reminder
                .map(|ts| ts.truncate_to_minute().to_wire())
                .unwrap_or_default(),
        }
    }

    /// Check required fields and normalize the draft into a submittable input.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found, in form order.
    pub fn validate(&self) -> Result<QuestionInput, ValidationError> {
        let topic_id = self.topic_id.ok_or(ValidationError::MissingTopic)?;

        let raw_number = self.leetcode_number.trim();
        if raw_number.is_empty() {
            return Err(ValidationError::MissingLeetcodeNumber);
        }
        let leetcode_number = raw_number
            .parse::<u64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ValidationError::InvalidLeetcodeNumber(raw_number.to_string()))?;

        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let link = self.link.trim();
        if !link.is_empty() && Url::parse(link).is_err() {
            return Err(ValidationError::InvalidLink(link.to_string()));
        }

        let reminder = match self.reminder.trim() {
            "" => None,
            raw => Some(
                LocalTimestamp::parse(raw)
                    .map_err(|_| ValidationError::InvalidReminder(raw.to_string()))?
                    .truncate_to_minute(),
            ),
        };

        Ok(QuestionInput {
            topic_id,
            leetcode_number,
            title: title.to_string(),
            link: link.to_string(),
            difficulty: self.difficulty,
            status: self.status,
            is_important: self.is_important,
            reminder,
        })
    }
}

/// A validated question, ready to create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionInput {
    pub topic_id: TopicId,
    pub leetcode_number: u64,
    pub title: String,
    pub link: String,
    pub difficulty: Difficulty,
    pub status: QuestionStatus,
    pub is_important: bool,
    pub reminder: Option<LocalTimestamp>,
}

//
// ─── TOPICS ────────────────────────────────────────────────────────────────────
//

/// Raw form state for creating or renaming a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicDraft {
    pub name: String,
    pub notes: String,
}

impl TopicDraft {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notes: String::new(),
        }
    }

    /// # Errors
    ///
    /// Returns `ValidationError::EmptyTopicName` if the name is blank.
    pub fn validate(&self) -> Result<TopicInput, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyTopicName);
        }
        Ok(TopicInput {
            name: name.to_string(),
            notes: self.notes.clone(),
        })
    }
}

/// A validated topic payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicInput {
    pub name: String,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionId;

    fn filled() -> QuestionDraft {
        QuestionDraft {
            leetcode_number: "1".into(),
            title: "Two Sum".into(),
            ..QuestionDraft::for_topic(TopicId::new(3))
        }
    }

    #[test]
    fn required_fields_are_checked_in_form_order() {
        let mut draft = QuestionDraft::default();
        assert_eq!(draft.validate(), Err(ValidationError::MissingTopic));

        draft.topic_id = Some(TopicId::new(1));
        assert_eq!(draft.validate(), Err(ValidationError::MissingLeetcodeNumber));

        draft.leetcode_number = "0".into();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::InvalidLeetcodeNumber(_))
        ));

        draft.leetcode_number = "42".into();
        draft.title = "   ".into();
        assert_eq!(draft.validate(), Err(ValidationError::MissingTitle));
    }

    #[test]
    fn optional_fields_are_normalized() {
        let input = filled().validate().unwrap();
        assert_eq!(input.leetcode_number, 1);
        assert_eq!(input.link, "");
        assert_eq!(input.reminder, None);
        assert_eq!(input.difficulty, Difficulty::Medium);
        assert_eq!(input.status, QuestionStatus::Todo);
    }

    #[test]
    fn bad_link_and_reminder_are_rejected() {
        let mut draft = filled();
        draft.link = "not a url".into();
        assert!(matches!(draft.validate(), Err(ValidationError::InvalidLink(_))));

        draft.link = "https://leetcode.com/problems/two-sum/".into();
        draft.reminder = "tomorrow".into();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::InvalidReminder(_))
        ));
    }

    #[test]
    fn edit_form_keeps_the_stored_minute() {
        let question = Question {
            id: QuestionId::new(9),
            topic_id: Some(TopicId::new(3)),
            topic_name: None,
            leetcode_number: 15,
            title: "3Sum".into(),
            link: String::new(),
            difficulty: Difficulty::Unknown,
            status: QuestionStatus::Done,
            is_important: true,
            reminder: Some(LocalTimestamp::parse("2026-01-22T23:30:45").unwrap()),
        };
        let draft = QuestionDraft::from_question(&question);
        assert_eq!(draft.reminder, "2026-01-22T23:30");
        assert_eq!(draft.difficulty, Difficulty::Medium);

        let input = draft.validate().unwrap();
        assert_eq!(input.reminder.unwrap().to_wire(), "2026-01-22T23:30");
    }

    #[test]
    fn topic_name_must_not_be_blank() {
        assert_eq!(
            TopicDraft::named("  ").validate(),
            Err(ValidationError::EmptyTopicName)
        );
        assert_eq!(TopicDraft::named(" Arrays ").validate().unwrap().name, "Arrays");
    }
}
