mod dashboard_vm;
mod progress_vm;
mod question_vm;
mod reminder_vm;
mod time_fmt;
mod tone;

pub use dashboard_vm::{DashboardVm, RECENT_PREVIEW, map_dashboard};
pub use progress_vm::{BarVm, ProgressVm, bar_width, map_activity_bars, map_progress};
pub use question_vm::{
    QuestionRowVm, TopicCardVm, map_question_rows, map_topic_cards, question_row,
};
pub use reminder_vm::{ReminderCardVm, map_reminder_cards};
pub use time_fmt::{due_suffix, format_absolute, format_datetime};
pub use tone::{Tone, difficulty_tone, status_label, status_tone};
