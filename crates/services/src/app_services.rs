use std::sync::Arc;

use track_api::{ApiConfig, Backend};

use crate::Clock;
use crate::dashboard_service::DashboardService;
use crate::progress_service::ProgressService;
use crate::question_service::QuestionService;
use crate::reminder_service::ReminderService;
use crate::topic_service::TopicService;

/// Assembles app-facing services over one backend and clock.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    dashboard: Arc<DashboardService>,
    topics: Arc<TopicService>,
    questions: Arc<QuestionService>,
    reminders: Arc<ReminderService>,
    progress: Arc<ProgressService>,
}

impl AppServices {
    #[must_use]
    pub fn new(backend: &Backend, clock: Clock) -> Self {
        let dashboard = Arc::new(DashboardService::new(
            clock,
            Arc::clone(&backend.topics),
            Arc::clone(&backend.questions),
            Arc::clone(&backend.progress),
        ));
        let topics = Arc::new(TopicService::new(
            Arc::clone(&backend.topics),
            Arc::clone(&backend.questions),
        ));
        let questions = Arc::new(QuestionService::new(Arc::clone(&backend.questions)));
        let reminders = Arc::new(ReminderService::new(Arc::clone(&backend.reminders)));
        let progress = Arc::new(ProgressService::new(clock, Arc::clone(&backend.progress)));

        Self {
            clock,
            dashboard,
            topics,
            questions,
            reminders,
            progress,
        }
    }

    /// Build services talking to the REST backend at `config`.
    #[must_use]
    pub fn http(config: ApiConfig, clock: Clock) -> Self {
        Self::new(&Backend::http(config), clock)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn topics(&self) -> Arc<TopicService> {
        Arc::clone(&self.topics)
    }

    #[must_use]
    pub fn questions(&self) -> Arc<QuestionService> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn reminders(&self) -> Arc<ReminderService> {
        Arc::clone(&self.reminders)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}
