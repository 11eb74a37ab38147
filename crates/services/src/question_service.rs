use std::sync::Arc;

use track_api::QuestionApi;
use track_core::model::{Question, QuestionDraft, QuestionId, QuestionStatus};

use crate::error::ServiceError;

/// Question mutations with client-side validation.
#[derive(Clone)]
pub struct QuestionService {
    questions: Arc<dyn QuestionApi>,
}

impl QuestionService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionApi>) -> Self {
        Self { questions }
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the backend call fails.
    pub async fn get(&self, id: QuestionId) -> Result<Question, ServiceError> {
        Ok(self.questions.get_question(id).await?)
    }

    /// Pre-fill an edit form from the stored question.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the question cannot be fetched.
    pub async fn edit_draft(&self, id: QuestionId) -> Result<QuestionDraft, ServiceError> {
        let question = self.questions.get_question(id).await?;
        Ok(QuestionDraft::from_question(&question))
    }

    /// Validate and create. Invalid drafts are never sent.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` with the first failing field.
    /// Returns `ServiceError::Api` if the backend call fails.
    pub async fn create(&self, draft: &QuestionDraft) -> Result<Question, ServiceError> {
        let input = draft.validate()?;
        let question = self.questions.create_question(&input).await?;
        tracing::info!(question_id = %question.id, "question created");
        Ok(question)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Validation` with the first failing field.
    /// Returns `ServiceError::Api` if the backend call fails.
    pub async fn update(
        &self,
        id: QuestionId,
        draft: &QuestionDraft,
    ) -> Result<Question, ServiceError> {
        let input = draft.validate()?;
        Ok(self.questions.update_question(id, &input).await?)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::NotConfirmed` without contacting the backend when
    /// `confirmed` is false.
    /// Returns `ServiceError::Api` if the backend call fails.
    pub async fn delete(&self, id: QuestionId, confirmed: bool) -> Result<(), ServiceError> {
        if !confirmed {
            return Err(ServiceError::NotConfirmed);
        }
        self.questions.delete_question(id).await?;
        tracing::info!(question_id = %id, "question deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the backend call fails.
    pub async fn set_status(
        &self,
        id: QuestionId,
        status: QuestionStatus,
    ) -> Result<Question, ServiceError> {
        Ok(self.questions.update_status(id, status).await?)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the backend call fails.
    pub async fn toggle_important(&self, id: QuestionId) -> Result<Question, ServiceError> {
        Ok(self.questions.toggle_important(id).await?)
    }
}
