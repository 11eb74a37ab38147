//! In-process stand-in for the REST backend.
//!
//! Mirrors the backend's observable behavior closely enough for service
//! tests: day-filled history and completions, upcoming reminders strictly
//! after now in ascending order, recently completed newest first.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use track_core::Clock;
use track_core::model::{
    DailyCompletion, DailyProgress, ProgressStats, Question, QuestionId, QuestionInput,
    QuestionStatus, Reminder, ReminderId, Topic, TopicId, TopicInput,
};
use track_core::time::DateWindow;

use crate::endpoint;
use crate::error::ApiError;
use crate::repository::{ProgressApi, QuestionApi, ReminderApi, TopicApi};

#[derive(Debug, Clone)]
struct StoredQuestion {
    question: Question,
    updated_at: NaiveDateTime,
    seq: u64,
}

#[derive(Debug, Default)]
struct State {
    topics: BTreeMap<TopicId, Topic>,
    questions: BTreeMap<QuestionId, StoredQuestion>,
    history: BTreeMap<NaiveDate, DailyProgress>,
    completions: BTreeMap<NaiveDate, u64>,
    failures: HashMap<String, ApiError>,
    next_topic: u64,
    next_question: u64,
    seq: u64,
}

impl State {
    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn check(&self, path: &str) -> Result<(), ApiError> {
        match self.failures.get(path) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn topic_with_count(&self, topic: &Topic) -> Topic {
        let count = self
            .questions
            .values()
            .filter(|s| s.question.topic_id == Some(topic.id))
            .count();
        Topic {
            question_count: count as u64,
            ..topic.clone()
        }
    }

    fn stats(&self) -> ProgressStats {
        let mut stats = ProgressStats::default();
        for stored in self.questions.values() {
            stats.total += 1;
            match stored.question.status {
                QuestionStatus::Done => stats.completed += 1,
                QuestionStatus::InProgress => stats.in_progress += 1,
                QuestionStatus::Todo => stats.todo += 1,
                QuestionStatus::Unknown => {}
            }
        }
        stats
    }

    fn snapshot(&mut self, today: NaiveDate) -> DailyProgress {
        let stats = self.stats();
        let day = DailyProgress {
            date: today,
            completed: stats.completed,
            in_progress: stats.in_progress,
            todo: stats.todo,
            total: stats.total,
        };
        self.history.insert(today, day);
        day
    }

    fn question_mut(&mut self, id: QuestionId) -> Result<&mut StoredQuestion, ApiError> {
        self.questions
            .get_mut(&id)
            .ok_or_else(|| ApiError::status(endpoint::question(id), 404))
    }

    fn build_question(
        &self,
        id: QuestionId,
        input: &QuestionInput,
        path: &str,
    ) -> Result<Question, ApiError> {
        // The backend rejects unknown topic references with a server error.
        let topic = self
            .topics
            .get(&input.topic_id)
            .ok_or_else(|| ApiError::status(path, 500))?;
        Ok(Question {
            id,
            topic_id: Some(topic.id),
            topic_name: Some(topic.name.clone()),
            leetcode_number: input.leetcode_number,
            title: input.title.clone(),
            link: input.link.clone(),
            difficulty: input.difficulty,
            status: input.status,
            is_important: input.is_important,
            reminder: input.reminder,
        })
    }
}

/// Shared, mutex-guarded backend state for tests and offline use.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    clock: Clock,
    state: Arc<Mutex<State>>,
}

impl InMemoryBackend {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A poisoned lock only means a test panicked mid-call; the data is still usable.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Make every call to `path` fail with `err` until cleared.
    ///
    /// `path` is the resource path as sent on the wire, e.g.
    /// [`endpoint::PROGRESS_HISTORY`] or `endpoint::topic(id)`.
    pub fn fail(&self, path: impl Into<String>, err: ApiError) {
        self.lock().failures.insert(path.into(), err);
    }

    pub fn clear_failures(&self) {
        self.lock().failures.clear();
    }

    /// Store a history record as if the backend had snapshotted that day.
    pub fn seed_history(&self, day: DailyProgress) {
        self.lock().history.insert(day.date, day);
    }

    /// Set the number of questions completed on `date`.
    pub fn seed_completions(&self, date: NaiveDate, completed: u64) {
        self.lock().completions.insert(date, completed);
    }

    /// Insert a topic directly, bypassing request validation.
    pub fn insert_topic(&self, name: &str, notes: &str) -> Topic {
        let mut state = self.lock();
        state.next_topic += 1;
        let topic = Topic {
            id: TopicId::new(state.next_topic),
            name: name.to_string(),
            notes: notes.to_string(),
            description: None,
            question_count: 0,
        };
        state.topics.insert(topic.id, topic.clone());
        topic
    }

    /// Insert a fully-formed question; its id is replaced by a fresh one.
    pub fn insert_question(&self, mut question: Question) -> Question {
        let now = self.clock.now();
        let mut state = self.lock();
        state.next_question += 1;
        question.id = QuestionId::new(state.next_question);
        if let Some(topic) = question.topic_id.and_then(|id| state.topics.get(&id)) {
            question.topic_name = Some(topic.name.clone());
        }
        let seq = state.next_seq();
        state.questions.insert(
            question.id,
            StoredQuestion {
                question: question.clone(),
                updated_at: now,
                seq,
            },
        );
        question
    }

    fn completed_on(state: &State, day: NaiveDate) -> u64 {
        let live = state
            .questions
            .values()
            .filter(|s| s.question.is_done() && s.updated_at.date() == day)
            .count() as u64;
        state.completions.get(&day).copied().unwrap_or(0) + live
    }

    fn reminders(&self, only_upcoming: bool) -> Vec<Reminder> {
        let now = self.clock.now();
        let state = self.lock();
        let mut found: Vec<Reminder> = state
            .questions
            .values()
            .filter_map(|s| {
                let at = s.question.reminder?;
                (!only_upcoming || at.value() > now).then(|| Reminder {
                    id: ReminderId::new(s.question.id.value()),
                    question: s.question.clone(),
                    reminder_at: Some(at),
                })
            })
            .collect();
        if only_upcoming {
            found.sort_by_key(|r| r.reminder_at);
        }
        found
    }
}

#[async_trait]
impl TopicApi for InMemoryBackend {
    async fn list_topics(&self) -> Result<Vec<Topic>, ApiError> {
        let state = self.lock();
        state.check(endpoint::TOPICS)?;
        Ok(state
            .topics
            .values()
            .map(|t| state.topic_with_count(t))
            .collect())
    }

    async fn get_topic(&self, id: TopicId) -> Result<Topic, ApiError> {
        let path = endpoint::topic(id);
        let state = self.lock();
        state.check(&path)?;
        state
            .topics
            .get(&id)
            .map(|t| state.topic_with_count(t))
            .ok_or_else(|| ApiError::status(path, 404))
    }

    async fn create_topic(&self, input: &TopicInput) -> Result<Topic, ApiError> {
        {
            let state = self.lock();
            state.check(endpoint::TOPICS)?;
        }
        Ok(self.insert_topic(&input.name, &input.notes))
    }

    async fn update_topic(&self, id: TopicId, input: &TopicInput) -> Result<Topic, ApiError> {
        let path = endpoint::topic(id);
        let mut state = self.lock();
        state.check(&path)?;
        let topic = state
            .topics
            .get_mut(&id)
            .ok_or_else(|| ApiError::status(&path, 404))?;
        topic.name.clone_from(&input.name);
        topic.notes.clone_from(&input.notes);
        let updated = topic.clone();
        for stored in state.questions.values_mut() {
            if stored.question.topic_id == Some(id) {
                stored.question.topic_name = Some(updated.name.clone());
            }
        }
        Ok(state.topic_with_count(&updated))
    }

    async fn delete_topic(&self, id: TopicId) -> Result<(), ApiError> {
        let path = endpoint::topic(id);
        let today = self.clock.today();
        let mut state = self.lock();
        state.check(&path)?;
        if state.topics.remove(&id).is_none() {
            return Err(ApiError::status(path, 404));
        }
        state.questions.retain(|_, s| s.question.topic_id != Some(id));
        state.snapshot(today);
        Ok(())
    }

    async fn update_topic_notes(&self, id: TopicId, notes: &str) -> Result<Topic, ApiError> {
        let path = endpoint::topic_notes(id);
        let mut state = self.lock();
        state.check(&path)?;
        let topic = state
            .topics
            .get_mut(&id)
            .ok_or_else(|| ApiError::status(&path, 404))?;
        topic.notes = notes.to_string();
        let updated = topic.clone();
        Ok(state.topic_with_count(&updated))
    }
}

#[async_trait]
impl QuestionApi for InMemoryBackend {
    async fn list_questions(&self) -> Result<Vec<Question>, ApiError> {
        let state = self.lock();
        state.check(endpoint::QUESTIONS)?;
        Ok(state
            .questions
            .values()
            .map(|s| s.question.clone())
            .collect())
    }

    async fn list_questions_by_topic(&self, topic_id: TopicId) -> Result<Vec<Question>, ApiError> {
        let path = endpoint::topic_questions(topic_id);
        let state = self.lock();
        state.check(&path)?;
        Ok(state
            .questions
            .values()
            .filter(|s| s.question.topic_id == Some(topic_id))
            .map(|s| s.question.clone())
            .collect())
    }

    async fn get_question(&self, id: QuestionId) -> Result<Question, ApiError> {
        let path = endpoint::question(id);
        let state = self.lock();
        state.check(&path)?;
        state
            .questions
            .get(&id)
            .map(|s| s.question.clone())
            .ok_or_else(|| ApiError::status(path, 404))
    }

    async fn recent_completed(&self, limit: u32) -> Result<Vec<Question>, ApiError> {
        let state = self.lock();
        state.check(endpoint::RECENT_COMPLETED)?;
        let mut done: Vec<&StoredQuestion> = state
            .questions
            .values()
            .filter(|s| s.question.is_done())
            .collect();
        done.sort_by(|a, b| (b.updated_at, b.seq).cmp(&(a.updated_at, a.seq)));
        Ok(done
            .into_iter()
            .take(limit as usize)
            .map(|s| s.question.clone())
            .collect())
    }

    async fn create_question(&self, input: &QuestionInput) -> Result<Question, ApiError> {
        let now = self.clock.now();
        let mut state = self.lock();
        state.check(endpoint::QUESTIONS)?;
        let id = QuestionId::new(state.next_question + 1);
        let question = state.build_question(id, input, endpoint::QUESTIONS)?;
        state.next_question += 1;
        let seq = state.next_seq();
        state.questions.insert(
            id,
            StoredQuestion {
                question: question.clone(),
                updated_at: now,
                seq,
            },
        );
        state.snapshot(now.date());
        Ok(question)
    }

    async fn update_question(
        &self,
        id: QuestionId,
        input: &QuestionInput,
    ) -> Result<Question, ApiError> {
        let path = endpoint::question(id);
        let now = self.clock.now();
        let mut state = self.lock();
        state.check(&path)?;
        state.question_mut(id)?;
        let question = state.build_question(id, input, &path)?;
        let seq = state.next_seq();
        state.questions.insert(
            id,
            StoredQuestion {
                question: question.clone(),
                updated_at: now,
                seq,
            },
        );
        state.snapshot(now.date());
        Ok(question)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), ApiError> {
        let path = endpoint::question(id);
        let today = self.clock.today();
        let mut state = self.lock();
        state.check(&path)?;
        if state.questions.remove(&id).is_none() {
            return Err(ApiError::status(path, 404));
        }
        state.snapshot(today);
        Ok(())
    }

    async fn update_status(
        &self,
        id: QuestionId,
        status: QuestionStatus,
    ) -> Result<Question, ApiError> {
        let path = endpoint::question_status(id);
        let now = self.clock.now();
        let mut state = self.lock();
        state.check(&path)?;
        let seq = state.next_seq();
        let stored = state.question_mut(id)?;
        stored.question.status = status;
        stored.updated_at = now;
        stored.seq = seq;
        let question = stored.question.clone();
        state.snapshot(now.date());
        Ok(question)
    }

    async fn toggle_important(&self, id: QuestionId) -> Result<Question, ApiError> {
        let path = endpoint::question_important(id);
        let mut state = self.lock();
        state.check(&path)?;
        let stored = state.question_mut(id)?;
        stored.question.is_important = !stored.question.is_important;
        Ok(stored.question.clone())
    }
}

#[async_trait]
impl ReminderApi for InMemoryBackend {
    async fn list_reminders(&self) -> Result<Vec<Reminder>, ApiError> {
        self.lock().check(endpoint::REMINDERS)?;
        Ok(self.reminders(false))
    }

    async fn upcoming_reminders(&self) -> Result<Vec<Reminder>, ApiError> {
        self.lock().check(endpoint::UPCOMING_REMINDERS)?;
        Ok(self.reminders(true))
    }

    async fn reminders_for_question(&self, id: QuestionId) -> Result<Vec<Reminder>, ApiError> {
        self.lock().check(&endpoint::question_reminders(id))?;
        Ok(self
            .reminders(false)
            .into_iter()
            .filter(|r| r.question.id == id)
            .collect())
    }
}

#[async_trait]
impl ProgressApi for InMemoryBackend {
    async fn today_progress(&self) -> Result<DailyProgress, ApiError> {
        let today = self.clock.today();
        let mut state = self.lock();
        state.check(endpoint::PROGRESS_TODAY)?;
        match state.history.get(&today) {
            Some(day) => Ok(*day),
            None => Ok(state.snapshot(today)),
        }
    }

    async fn progress_history(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyProgress>, ApiError> {
        let state = self.lock();
        state.check(endpoint::PROGRESS_HISTORY)?;
        let window = DateWindow { start, end };
        Ok(window
            .days()
            .map(|day| {
                state
                    .history
                    .get(&day)
                    .copied()
                    .unwrap_or_else(|| DailyProgress::empty(day))
            })
            .collect())
    }

    async fn progress_stats(&self) -> Result<ProgressStats, ApiError> {
        let state = self.lock();
        state.check(endpoint::PROGRESS_STATS)?;
        Ok(state.stats())
    }

    async fn daily_completions(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyCompletion>, ApiError> {
        let state = self.lock();
        state.check(endpoint::PROGRESS_COMPLETIONS)?;
        let window = DateWindow { start, end };
        Ok(window
            .days()
            .map(|date| DailyCompletion {
                date,
                completed: Self::completed_on(&state, date),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use track_core::model::{Difficulty, LocalTimestamp};
    use track_core::time::{fixed_clock, fixed_now};

    fn input(topic_id: TopicId, number: u64, reminder: Option<NaiveDateTime>) -> QuestionInput {
        QuestionInput {
            topic_id,
            leetcode_number: number,
            title: format!("Problem {number}"),
            link: String::new(),
            difficulty: Difficulty::Easy,
            status: QuestionStatus::Todo,
            is_important: false,
            reminder: reminder.map(LocalTimestamp::new),
        }
    }

    #[tokio::test]
    async fn upcoming_is_strictly_future_and_ascending() {
        let backend = InMemoryBackend::new(fixed_clock());
        let topic = backend.insert_topic("Arrays", "");
        let now = fixed_now();
        backend
            .create_question(&input(topic.id, 1, Some(now + Duration::hours(3))))
            .await
            .unwrap();
        backend
            .create_question(&input(topic.id, 2, Some(now)))
            .await
            .unwrap();
        backend
            .create_question(&input(topic.id, 3, Some(now + Duration::minutes(5))))
            .await
            .unwrap();
        backend.create_question(&input(topic.id, 4, None)).await.unwrap();

        let all = backend.list_reminders().await.unwrap();
        assert_eq!(all.len(), 3);

        let upcoming = backend.upcoming_reminders().await.unwrap();
        let numbers: Vec<u64> = upcoming.iter().map(|r| r.question.leetcode_number).collect();
        assert_eq!(numbers, vec![3, 1]);
    }

    #[tokio::test]
    async fn unknown_topic_is_rejected() {
        let backend = InMemoryBackend::new(fixed_clock());
        let err = backend
            .create_question(&input(TopicId::new(99), 1, None))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::status(endpoint::QUESTIONS, 500));
    }

    #[tokio::test]
    async fn history_is_filled_per_day() {
        let backend = InMemoryBackend::new(fixed_clock());
        let today = fixed_now().date();
        backend.seed_history(DailyProgress {
            completed: 2,
            ..DailyProgress::empty(today - Duration::days(1))
        });
        let history = backend
            .progress_history(today - Duration::days(3), today)
            .await
            .unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history[2].completed, 2);
        assert_eq!(history[0], DailyProgress::empty(today - Duration::days(3)));
    }

    #[tokio::test]
    async fn status_change_counts_as_completion_today() {
        let backend = InMemoryBackend::new(fixed_clock());
        let topic = backend.insert_topic("Graphs", "");
        let q = backend.create_question(&input(topic.id, 200, None)).await.unwrap();
        backend.update_status(q.id, QuestionStatus::Done).await.unwrap();

        let today = fixed_now().date();
        let completions = backend.daily_completions(today, today).await.unwrap();
        assert_eq!(completions[0].completed, 1);
        assert_eq!(backend.today_progress().await.unwrap().completed, 1);
        assert_eq!(backend.recent_completed(5).await.unwrap()[0].id, q.id);
    }

    #[tokio::test]
    async fn injected_failure_is_returned_until_cleared() {
        let backend = InMemoryBackend::new(fixed_clock());
        backend.fail(endpoint::TOPICS, ApiError::transport("offline"));
        assert!(backend.list_topics().await.is_err());
        backend.clear_failures();
        assert!(backend.list_topics().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_topic_removes_its_questions() {
        let backend = InMemoryBackend::new(fixed_clock());
        let keep = backend.insert_topic("Keep", "");
        let drop = backend.insert_topic("Drop", "");
        backend.create_question(&input(keep.id, 1, None)).await.unwrap();
        backend.create_question(&input(drop.id, 2, None)).await.unwrap();

        backend.delete_topic(drop.id).await.unwrap();
        let remaining = backend.list_questions().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].topic_name.as_deref(), Some("Keep"));
        assert_eq!(backend.list_topics().await.unwrap()[0].question_count, 1);
    }
}
