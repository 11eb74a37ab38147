use crate::model::ids::TopicId;

/// A named grouping of practice questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    pub notes: String,
    pub description: Option<String>,
    /// Denormalized count maintained by the backend.
    pub question_count: u64,
}

impl Topic {
    #[must_use]
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }
}
