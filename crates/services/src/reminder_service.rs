use std::sync::Arc;

use chrono::NaiveDateTime;

use track_api::ReminderApi;
use track_core::model::{QuestionId, Reminder};
use track_core::reminders::{ReminderMode, select_reminders};

use crate::error::ServiceError;

/// Both reminder collections as fetched together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderBoard {
    pub all: Vec<Reminder>,
    pub upcoming: Vec<Reminder>,
}

impl ReminderBoard {
    /// The display list for `mode`, evaluated against `now`.
    #[must_use]
    pub fn select(&self, mode: ReminderMode, now: NaiveDateTime) -> Vec<&Reminder> {
        select_reminders(mode, &self.all, &self.upcoming, now)
    }
}

#[derive(Clone)]
pub struct ReminderService {
    reminders: Arc<dyn ReminderApi>,
}

impl ReminderService {
    #[must_use]
    pub fn new(reminders: Arc<dyn ReminderApi>) -> Self {
        Self { reminders }
    }

    /// Fetch all and upcoming reminders concurrently.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if either call fails.
    pub async fn load_board(&self) -> Result<ReminderBoard, ServiceError> {
        let (all, upcoming) = tokio::try_join!(
            self.reminders.list_reminders(),
            self.reminders.upcoming_reminders(),
        )?;
        Ok(ReminderBoard { all, upcoming })
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the backend call fails.
    pub async fn for_question(&self, id: QuestionId) -> Result<Vec<Reminder>, ServiceError> {
        Ok(self.reminders.reminders_for_question(id).await?)
    }
}
