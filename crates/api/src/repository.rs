use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use track_core::model::{
    DailyCompletion, DailyProgress, ProgressStats, Question, QuestionId, QuestionInput,
    QuestionStatus, Reminder, Topic, TopicId, TopicInput,
};

use crate::error::ApiError;
use crate::http::{ApiConfig, HttpBackend};

/// Backend contract for topics.
#[async_trait]
pub trait TopicApi: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn list_topics(&self) -> Result<Vec<Topic>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn get_topic(&self, id: TopicId) -> Result<Topic, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn create_topic(&self, input: &TopicInput) -> Result<Topic, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn update_topic(&self, id: TopicId, input: &TopicInput) -> Result<Topic, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    async fn delete_topic(&self, id: TopicId) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn update_topic_notes(&self, id: TopicId, notes: &str) -> Result<Topic, ApiError>;
}

/// Backend contract for questions.
#[async_trait]
pub trait QuestionApi: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn list_questions(&self) -> Result<Vec<Question>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn list_questions_by_topic(&self, topic_id: TopicId) -> Result<Vec<Question>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn get_question(&self, id: QuestionId) -> Result<Question, ApiError>;

    /// Most recently completed questions, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn recent_completed(&self, limit: u32) -> Result<Vec<Question>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn create_question(&self, input: &QuestionInput) -> Result<Question, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn update_question(
        &self,
        id: QuestionId,
        input: &QuestionInput,
    ) -> Result<Question, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    async fn delete_question(&self, id: QuestionId) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn update_status(
        &self,
        id: QuestionId,
        status: QuestionStatus,
    ) -> Result<Question, ApiError>;

    /// Flip the importance flag server-side.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn toggle_important(&self, id: QuestionId) -> Result<Question, ApiError>;
}

/// Backend contract for reminders.
#[async_trait]
pub trait ReminderApi: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn list_reminders(&self) -> Result<Vec<Reminder>, ApiError>;

    /// The backend's own upcoming window and ordering.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn upcoming_reminders(&self) -> Result<Vec<Reminder>, ApiError>;

    /// Reminders attached to one question. A question without one yields
    /// an empty list.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn reminders_for_question(&self, id: QuestionId) -> Result<Vec<Reminder>, ApiError>;
}

/// Backend contract for progress records.
#[async_trait]
pub trait ProgressApi: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn today_progress(&self) -> Result<DailyProgress, ApiError>;

    /// Records for `[start, end]` inclusive, ascending by date.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body is not an array of records.
    async fn progress_history(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyProgress>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    async fn progress_stats(&self) -> Result<ProgressStats, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body is not an array of completions.
    async fn daily_completions(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyCompletion>, ApiError>;
}

/// Aggregates the resource contracts behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Backend {
    pub topics: Arc<dyn TopicApi>,
    pub questions: Arc<dyn QuestionApi>,
    pub reminders: Arc<dyn ReminderApi>,
    pub progress: Arc<dyn ProgressApi>,
}

impl Backend {
    /// Every resource served by one implementation.
    #[must_use]
    pub fn from_shared<T>(backend: Arc<T>) -> Self
    where
        T: TopicApi + QuestionApi + ReminderApi + ProgressApi + 'static,
    {
        let topics: Arc<dyn TopicApi> = backend.clone();
        let questions: Arc<dyn QuestionApi> = backend.clone();
        let reminders: Arc<dyn ReminderApi> = backend.clone();
        let progress: Arc<dyn ProgressApi> = backend;
        Self {
            topics,
            questions,
            reminders,
            progress,
        }
    }

    #[must_use]
    pub fn http(config: ApiConfig) -> Self {
        Self::from_shared(Arc::new(HttpBackend::new(config)))
    }
}
