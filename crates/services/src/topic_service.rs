use std::sync::Arc;

use track_api::{QuestionApi, TopicApi};
use track_core::filter::QuestionFilter;
use track_core::model::{Question, Topic, TopicDraft, TopicId};

use crate::error::ServiceError;

/// One topic with its questions, as fetched together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDetail {
    pub topic: Topic,
    pub questions: Vec<Question>,
}

impl TopicDetail {
    /// Nameless topic with no questions, shown when the detail load fails.
    #[must_use]
    pub fn empty(id: TopicId) -> Self {
        Self {
            topic: Topic {
                id,
                name: String::new(),
                notes: String::new(),
                description: None,
                question_count: 0,
            },
            questions: Vec::new(),
        }
    }

    /// Questions passing `filter`, in fetched order.
    #[must_use]
    pub fn filtered(&self, filter: &QuestionFilter) -> Vec<&Question> {
        filter.apply(&self.questions)
    }
}

/// Topic listing, detail loading and topic mutations.
#[derive(Clone)]
pub struct TopicService {
    topics: Arc<dyn TopicApi>,
    questions: Arc<dyn QuestionApi>,
}

impl TopicService {
    #[must_use]
    pub fn new(topics: Arc<dyn TopicApi>, questions: Arc<dyn QuestionApi>) -> Self {
        Self { topics, questions }
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the backend call fails.
    pub async fn list_topics(&self) -> Result<Vec<Topic>, ServiceError> {
        Ok(self.topics.list_topics().await?)
    }

    /// Fetch a topic and its questions concurrently.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if either call fails; no partial detail is returned.
    pub async fn load_detail(&self, id: TopicId) -> Result<TopicDetail, ServiceError> {
        let (topic, questions) = tokio::try_join!(
            self.topics.get_topic(id),
            self.questions.list_questions_by_topic(id),
        )?;
        Ok(TopicDetail { topic, questions })
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Validation` for a blank name, before any request is made.
    /// Returns `ServiceError::Api` if the backend call fails.
    pub async fn create_topic(&self, draft: &TopicDraft) -> Result<Topic, ServiceError> {
        let input = draft.validate()?;
        let topic = self.topics.create_topic(&input).await?;
        tracing::info!(topic_id = %topic.id, "topic created");
        Ok(topic)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Validation` for a blank name.
    /// Returns `ServiceError::Api` if the backend call fails.
    pub async fn update_topic(
        &self,
        id: TopicId,
        draft: &TopicDraft,
    ) -> Result<Topic, ServiceError> {
        let input = draft.validate()?;
        Ok(self.topics.update_topic(id, &input).await?)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the backend call fails.
    pub async fn update_notes(&self, id: TopicId, notes: &str) -> Result<Topic, ServiceError> {
        Ok(self.topics.update_topic_notes(id, notes).await?)
    }

    /// Delete a topic once the user has confirmed.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotConfirmed` without contacting the backend when
    /// `confirmed` is false.
    /// Returns `ServiceError::Api` if the backend call fails.
    pub async fn delete_topic(&self, id: TopicId, confirmed: bool) -> Result<(), ServiceError> {
        if !confirmed {
            return Err(ServiceError::NotConfirmed);
        }
        self.topics.delete_topic(id).await?;
        tracing::info!(topic_id = %id, "topic deleted");
        Ok(())
    }
}
