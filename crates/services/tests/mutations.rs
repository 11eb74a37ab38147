use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use services::{QuestionService, ServiceError, TopicService};
use track_api::{ApiError, InMemoryBackend, QuestionApi};
use track_core::model::{
    Question, QuestionDraft, QuestionId, QuestionInput, QuestionStatus, TopicDraft, TopicId,
    ValidationError,
};
use track_core::time::fixed_clock;

/// Counts every call so tests can prove nothing reached the backend.
#[derive(Default)]
struct CountingQuestions {
    calls: AtomicUsize,
}

impl CountingQuestions {
    fn hit(&self) -> Result<Question, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ApiError::transport("unexpected call"))
    }
}

#[async_trait]
impl QuestionApi for CountingQuestions {
    async fn list_questions(&self) -> Result<Vec<Question>, ApiError> {
        self.hit().map(|q| vec![q])
    }
    async fn list_questions_by_topic(&self, _: TopicId) -> Result<Vec<Question>, ApiError> {
        self.hit().map(|q| vec![q])
    }
    async fn get_question(&self, _: QuestionId) -> Result<Question, ApiError> {
        self.hit()
    }
    async fn recent_completed(&self, _: u32) -> Result<Vec<Question>, ApiError> {
        self.hit().map(|q| vec![q])
    }
    async fn create_question(&self, _: &QuestionInput) -> Result<Question, ApiError> {
        self.hit()
    }
    async fn update_question(
        &self,
        _: QuestionId,
        _: &QuestionInput,
    ) -> Result<Question, ApiError> {
        self.hit()
    }
    async fn delete_question(&self, _: QuestionId) -> Result<(), ApiError> {
        self.hit().map(|_| ())
    }
    async fn update_status(&self, _: QuestionId, _: QuestionStatus) -> Result<Question, ApiError> {
        self.hit()
    }
    async fn toggle_important(&self, _: QuestionId) -> Result<Question, ApiError> {
        self.hit()
    }
}

fn draft(topic_id: TopicId) -> QuestionDraft {
    QuestionDraft {
        leetcode_number: "1".into(),
        title: "Two Sum".into(),
        ..QuestionDraft::for_topic(topic_id)
    }
}

#[tokio::test]
async fn invalid_drafts_never_reach_backend() {
    let fake = Arc::new(CountingQuestions::default());
    let service = QuestionService::new(fake.clone());

    let cases = [
        (
            QuestionDraft {
                topic_id: None,
                ..draft(TopicId::new(1))
            },
            ValidationError::MissingTopic,
        ),
        (
            QuestionDraft {
                leetcode_number: " ".into(),
                ..draft(TopicId::new(1))
            },
            ValidationError::MissingLeetcodeNumber,
        ),
        (
            QuestionDraft {
                title: String::new(),
                ..draft(TopicId::new(1))
            },
            ValidationError::MissingTitle,
        ),
    ];
    for (draft, expected) in cases {
        let err = service.create(&draft).await.unwrap_err();
        assert_eq!(err, ServiceError::Validation(expected));
    }

    assert_eq!(
        service.delete(QuestionId::new(1), false).await.unwrap_err(),
        ServiceError::NotConfirmed
    );
    assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn reminder_survives_edit_round_trip() {
    let backend = Arc::new(InMemoryBackend::new(fixed_clock()));
    let topic = backend.insert_topic("Arrays", "");
    let service = QuestionService::new(backend.clone());

    let created = service
        .create(&QuestionDraft {
            reminder: "2026-01-22T23:30".into(),
            ..draft(topic.id)
        })
        .await
        .unwrap();

    let edit = service.edit_draft(created.id).await.unwrap();
    assert_eq!(edit.reminder, "2026-01-22T23:30");

    let saved = service.update(created.id, &edit).await.unwrap();
    let reloaded = service.get(saved.id).await.unwrap();
    assert_eq!(reloaded.reminder, created.reminder);
    assert_eq!(
        reloaded.reminder.map(|at| at.to_string()).as_deref(),
        created.reminder.map(|at| at.to_string()).as_deref()
    );
}

#[tokio::test]
async fn status_and_importance_mutations() {
    let backend = Arc::new(InMemoryBackend::new(fixed_clock()));
    let topic = backend.insert_topic("Arrays", "");
    let service = QuestionService::new(backend.clone());
    let q = service.create(&draft(topic.id)).await.unwrap();

    let q = service.set_status(q.id, QuestionStatus::Done).await.unwrap();
    assert!(q.is_done());
    let q = service.toggle_important(q.id).await.unwrap();
    assert!(q.is_important);
    let q = service.toggle_important(q.id).await.unwrap();
    assert!(!q.is_important);

    service.delete(q.id, true).await.unwrap();
    assert!(matches!(
        service.get(q.id).await,
        Err(ServiceError::Api(err)) if err.is_not_found()
    ));
}

#[tokio::test]
async fn topic_notes_update() {
    let backend = Arc::new(InMemoryBackend::new(fixed_clock()));
    let service = TopicService::new(backend.clone(), backend.clone());
    let topic = service
        .create_topic(&TopicDraft::named("Graphs"))
        .await
        .unwrap();

    let updated = service.update_notes(topic.id, "BFS first").await.unwrap();
    assert_eq!(updated.notes, "BFS first");
    let renamed = service
        .update_topic(
            topic.id,
            &TopicDraft {
                name: "Graph Search".into(),
                notes: updated.notes.clone(),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Graph Search");
}
