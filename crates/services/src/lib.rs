#![forbid(unsafe_code)]

pub mod app_services;
pub mod dashboard_service;
pub mod error;
pub mod load;
pub mod progress_service;
pub mod question_service;
pub mod reminder_service;
pub mod topic_service;

pub use track_core::Clock;

pub use app_services::AppServices;
pub use dashboard_service::{DashboardService, DashboardSnapshot, RECENT_COMPLETED_LIMIT};
pub use error::ServiceError;
pub use load::{LoadSequencer, LoadTicket};
pub use progress_service::{ProgressService, ProgressSnapshot};
pub use question_service::QuestionService;
pub use reminder_service::{ReminderBoard, ReminderService};
pub use topic_service::{TopicDetail, TopicService};
