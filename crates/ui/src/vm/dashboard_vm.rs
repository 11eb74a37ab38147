use chrono::NaiveDateTime;
use services::DashboardSnapshot;

use crate::vm::progress_vm::{BarVm, map_activity_bars};
use crate::vm::question_vm::{QuestionRowVm, question_row};

/// Recent completions shown before "show all" is chosen.
pub const RECENT_PREVIEW: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardVm {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub todo: usize,
    pub topics: usize,
    pub recent: Vec<QuestionRowVm>,
    /// How many recent completions are hidden by the preview limit.
    pub hidden_recent: usize,
    pub activity: Vec<BarVm>,
}

#[must_use]
pub fn map_dashboard(
    snapshot: &DashboardSnapshot,
    show_all_recent: bool,
    now: NaiveDateTime,
) -> DashboardVm {
    let shown = if show_all_recent {
        snapshot.recent_completed.len()
    } else {
        snapshot.recent_completed.len().min(RECENT_PREVIEW)
    };
    DashboardVm {
        total: snapshot.tally.total,
        completed: snapshot.tally.completed,
        in_progress: snapshot.tally.in_progress,
        todo: snapshot.tally.todo,
        topics: snapshot.topic_count,
        recent: snapshot.recent_completed[..shown]
            .iter()
            .map(|q| question_row(q, now))
            .collect(),
        hidden_recent: snapshot.recent_completed.len() - shown,
        activity: map_activity_bars(&snapshot.activity),
    }
}
