mod draft;
mod ids;
mod progress;
mod question;
mod reminder;
mod timestamp;
mod topic;

pub use draft::{QuestionDraft, QuestionInput, TopicDraft, TopicInput, ValidationError};
pub use ids::{ParseIdError, QuestionId, ReminderId, TopicId};
pub use progress::{DailyCompletion, DailyProgress, ProgressStats};
pub use question::{Difficulty, Question, QuestionStatus};
pub use reminder::Reminder;
pub use timestamp::{LocalTimestamp, TimestampError};
pub use topic::Topic;
