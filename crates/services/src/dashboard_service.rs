use std::sync::Arc;

use track_api::{ProgressApi, QuestionApi, TopicApi};
use track_core::Clock;
use track_core::model::Question;
use track_core::stats::{self, ActivityPoint, QuestionTally};
use track_core::time::DateWindow;

use crate::error::ServiceError;
use crate::progress_service::empty_on_decode;

/// How many recently completed questions the dashboard asks for.
pub const RECENT_COMPLETED_LIMIT: u32 = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSnapshot {
    /// Counted from the question list, not from the stats endpoint.
    pub tally: QuestionTally,
    pub topic_count: usize,
    pub recent_completed: Vec<Question>,
    pub activity: Vec<ActivityPoint>,
}

#[derive(Clone)]
pub struct DashboardService {
    clock: Clock,
    topics: Arc<dyn TopicApi>,
    questions: Arc<dyn QuestionApi>,
    progress: Arc<dyn ProgressApi>,
}

impl DashboardService {
    #[must_use]
    pub fn new(
        clock: Clock,
        topics: Arc<dyn TopicApi>,
        questions: Arc<dyn QuestionApi>,
        progress: Arc<dyn ProgressApi>,
    ) -> Self {
        Self {
            clock,
            topics,
            questions,
            progress,
        }
    }

    /// Fan out the four overview calls, then fetch the week's completions.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if any call fails. A completions body that
    /// is not an array yields an empty activity strip instead.
    pub async fn load(&self) -> Result<DashboardSnapshot, ServiceError> {
        // The stats call only gates the load; the tally comes from the question list.
        let (_, questions, topics, recent_completed) = tokio::try_join!(
            self.progress.progress_stats(),
            self.questions.list_questions(),
            self.topics.list_topics(),
            self.questions.recent_completed(RECENT_COMPLETED_LIMIT),
        )?;

        let window = DateWindow::trailing_week(self.clock.today());
        let completions = empty_on_decode(
            self.progress
                .daily_completions(window.start, window.end)
                .await,
            "daily completions",
        )?;

        Ok(DashboardSnapshot {
            tally: QuestionTally::count(&questions),
            topic_count: topics.len(),
            recent_completed,
            activity: stats::activity_series(&completions),
        })
    }
}
