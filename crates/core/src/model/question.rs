use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ids::{QuestionId, TopicId};
use crate::model::timestamp::LocalTimestamp;

/// Difficulty as labelled on the practice site.
///
/// Anything the backend sends outside the three known labels decodes to
/// `Unknown` and is rendered with a neutral fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[serde(other)]
    Unknown,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
            Difficulty::Unknown => "UNKNOWN",
        }
    }

    /// Parse a wire/CLI label, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Difficulty::Unknown)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion status of a tracked question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionStatus {
    Todo,
    InProgress,
    Done,
    #[serde(other)]
    Unknown,
}

impl QuestionStatus {
    pub const ALL: [QuestionStatus; 3] = [
        QuestionStatus::Todo,
        QuestionStatus::InProgress,
        QuestionStatus::Done,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionStatus::Todo => "TODO",
            QuestionStatus::InProgress => "IN_PROGRESS",
            QuestionStatus::Done => "DONE",
            QuestionStatus::Unknown => "UNKNOWN",
        }
    }

    /// Parse a wire/CLI label, case-insensitively. `-` is accepted for `_`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(&normalized))
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, QuestionStatus::Unknown)
    }
}

impl fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tracked practice problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    /// `None` when the backend omitted the topic reference.
    pub topic_id: Option<TopicId>,
    /// Name of the owning topic, when the backend embedded it.
    pub topic_name: Option<String>,
    pub leetcode_number: u64,
    pub title: String,
    /// URL or empty.
    pub link: String,
    pub difficulty: Difficulty,
    pub status: QuestionStatus,
    pub is_important: bool,
    pub reminder: Option<LocalTimestamp>,
}

impl Question {
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status == QuestionStatus::Done
    }

    #[must_use]
    pub fn has_link(&self) -> bool {
        !self.link.trim().is_empty()
    }
}
