#![forbid(unsafe_code)]

pub mod endpoint;
pub mod error;
pub mod http;
pub mod memory;
pub mod repository;
mod wire;

pub use error::ApiError;
pub use http::{ApiConfig, HttpBackend};
pub use memory::InMemoryBackend;
pub use repository::{Backend, ProgressApi, QuestionApi, ReminderApi, TopicApi};
