use std::env;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use track_core::model::{
    DailyCompletion, DailyProgress, ProgressStats, Question, QuestionId, QuestionInput,
    QuestionStatus, Reminder, Topic, TopicId, TopicInput,
};

use crate::endpoint;
use crate::error::ApiError;
use crate::repository::{ProgressApi, QuestionApi, ReminderApi, TopicApi};
use crate::wire::{
    DailyCompletionDto, DailyProgressDto, NotesBody, OneOrMany, ProgressStatsDto, QuestionBody,
    QuestionDto, ReminderDto, StatusBody, TopicBody, TopicDto, query_date,
};

pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";
pub const DEFAULT_BASE_PATH: &str = "/api";

/// Where the backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    origin: String,
    base_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN, DEFAULT_BASE_PATH)
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(origin: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self {
            origin: origin.into().trim().trim_end_matches('/').to_string(),
            base_path: normalize_base_path(&base_path.into()),
        }
    }

    /// Read `TRACK_API_ORIGIN` and `TRACK_API_BASE_PATH`, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let origin = env::var("TRACK_API_ORIGIN")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ORIGIN.into());
        let base_path =
            env::var("TRACK_API_BASE_PATH").unwrap_or_else(|_| DEFAULT_BASE_PATH.into());
        Self::new(origin, base_path)
    }

    #[must_use]
    pub fn with_origin(self, origin: impl Into<String>) -> Self {
        Self::new(origin, self.base_path)
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Absolute URL for a resource path such as `/topics/3`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.origin,
            self.base_path,
            path.trim_start_matches('/')
        )
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// `reqwest`-backed client: one request per call, no caching, no retries.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: ApiConfig,
}

impl HttpBackend {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "backend request");
        self.client.request(method, self.config.url(path))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(ApiError::status(path, status.as_u16()));
        }
        serde_json::from_slice(&body).map_err(|e| ApiError::decode(path, e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(self.request(Method::GET, path), path).await
    }

    async fn get_range<T: DeserializeOwned>(
        &self,
        path: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<T, ApiError> {
        let builder = self
            .request(Method::GET, path)
            .query(&[("startDate", query_date(start)), ("endDate", query_date(end))]);
        self.fetch(builder, path).await
    }

    async fn send_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.fetch(self.request(method, path).json(body), path).await
    }

    async fn send_empty(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let response = self.request(method, path).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::status(path, status.as_u16()));
        }
        Ok(())
    }
}

fn into_all<D, T: From<D>>(items: Vec<D>) -> Vec<T> {
    items.into_iter().map(T::from).collect()
}

#[async_trait]
impl TopicApi for HttpBackend {
    async fn list_topics(&self) -> Result<Vec<Topic>, ApiError> {
        let dtos: Vec<TopicDto> = self.get(endpoint::TOPICS).await?;
        Ok(into_all(dtos))
    }

    async fn get_topic(&self, id: TopicId) -> Result<Topic, ApiError> {
        let dto: TopicDto = self.get(&endpoint::topic(id)).await?;
        Ok(dto.into())
    }

    async fn create_topic(&self, input: &TopicInput) -> Result<Topic, ApiError> {
        let dto: TopicDto = self
            .send_json(Method::POST, endpoint::TOPICS, &TopicBody::from(input))
            .await?;
        Ok(dto.into())
    }

    async fn update_topic(&self, id: TopicId, input: &TopicInput) -> Result<Topic, ApiError> {
        let dto: TopicDto = self
            .send_json(Method::PUT, &endpoint::topic(id), &TopicBody::from(input))
            .await?;
        Ok(dto.into())
    }

    async fn delete_topic(&self, id: TopicId) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &endpoint::topic(id)).await
    }

    async fn update_topic_notes(&self, id: TopicId, notes: &str) -> Result<Topic, ApiError> {
        let dto: TopicDto = self
            .send_json(Method::PUT, &endpoint::topic_notes(id), &NotesBody { notes })
            .await?;
        Ok(dto.into())
    }
}

#[async_trait]
impl QuestionApi for HttpBackend {
    async fn list_questions(&self) -> Result<Vec<Question>, ApiError> {
        let dtos: Vec<QuestionDto> = self.get(endpoint::QUESTIONS).await?;
        Ok(into_all(dtos))
    }

    async fn list_questions_by_topic(&self, topic_id: TopicId) -> Result<Vec<Question>, ApiError> {
        let dtos: Vec<QuestionDto> = self.get(&endpoint::topic_questions(topic_id)).await?;
        Ok(into_all(dtos))
    }

    async fn get_question(&self, id: QuestionId) -> Result<Question, ApiError> {
        let dto: QuestionDto = self.get(&endpoint::question(id)).await?;
        Ok(dto.into())
    }

    async fn recent_completed(&self, limit: u32) -> Result<Vec<Question>, ApiError> {
        let builder = self
            .request(Method::GET, endpoint::RECENT_COMPLETED)
            .query(&[("limit", limit)]);
        let dtos: Vec<QuestionDto> = self.fetch(builder, endpoint::RECENT_COMPLETED).await?;
        Ok(into_all(dtos))
    }

    async fn create_question(&self, input: &QuestionInput) -> Result<Question, ApiError> {
        let dto: QuestionDto = self
            .send_json(Method::POST, endpoint::QUESTIONS, &QuestionBody::from(input))
            .await?;
        Ok(dto.into())
    }

    async fn update_question(
        &self,
        id: QuestionId,
        input: &QuestionInput,
    ) -> Result<Question, ApiError> {
        let dto: QuestionDto = self
            .send_json(Method::PUT, &endpoint::question(id), &QuestionBody::from(input))
            .await?;
        Ok(dto.into())
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &endpoint::question(id)).await
    }

    async fn update_status(
        &self,
        id: QuestionId,
        status: QuestionStatus,
    ) -> Result<Question, ApiError> {
        let dto: QuestionDto = self
            .send_json(
                Method::PATCH,
                &endpoint::question_status(id),
                &StatusBody { status },
            )
            .await?;
        Ok(dto.into())
    }

    async fn toggle_important(&self, id: QuestionId) -> Result<Question, ApiError> {
        let path = endpoint::question_important(id);
        let dto: QuestionDto = self.fetch(self.request(Method::PATCH, &path), &path).await?;
        Ok(dto.into())
    }
}

#[async_trait]
impl ReminderApi for HttpBackend {
    async fn list_reminders(&self) -> Result<Vec<Reminder>, ApiError> {
        let dtos: Vec<ReminderDto> = self.get(endpoint::REMINDERS).await?;
        Ok(into_all(dtos))
    }

    async fn upcoming_reminders(&self) -> Result<Vec<Reminder>, ApiError> {
        let dtos: Vec<ReminderDto> = self.get(endpoint::UPCOMING_REMINDERS).await?;
        Ok(into_all(dtos))
    }

    async fn reminders_for_question(&self, id: QuestionId) -> Result<Vec<Reminder>, ApiError> {
        match self
            .get::<OneOrMany<ReminderDto>>(&endpoint::question_reminders(id))
            .await
        {
            Ok(found) => Ok(into_all(found.into_vec())),
            Err(err) if err.is_not_found() => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl ProgressApi for HttpBackend {
    async fn today_progress(&self) -> Result<DailyProgress, ApiError> {
        let dto: DailyProgressDto = self.get(endpoint::PROGRESS_TODAY).await?;
        Ok(dto.into())
    }

    async fn progress_history(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyProgress>, ApiError> {
        let dtos: Vec<DailyProgressDto> = self
            .get_range(endpoint::PROGRESS_HISTORY, start, end)
            .await?;
        Ok(into_all(dtos))
    }

    async fn progress_stats(&self) -> Result<ProgressStats, ApiError> {
        let dto: ProgressStatsDto = self.get(endpoint::PROGRESS_STATS).await?;
        Ok(dto.into())
    }

    async fn daily_completions(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyCompletion>, ApiError> {
        let dtos: Vec<DailyCompletionDto> = self
            .get_range(endpoint::PROGRESS_COMPLETIONS, start, end)
            .await?;
        Ok(into_all(dtos))
    }
}
