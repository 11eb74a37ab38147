use crate::model::ids::ReminderId;
use crate::model::question::Question;
use crate::model::timestamp::LocalTimestamp;

/// A scheduled follow-up tied to exactly one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: ReminderId,
    pub question: Question,
    pub reminder_at: Option<LocalTimestamp>,
}
