use services::ProgressSnapshot;
use track_core::stats::{ActivityPoint, ComparisonStats};

/// One horizontal bar in the weekly chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarVm {
    pub label: String,
    pub completed: u64,
    /// 0.0..=100.0
    pub width_pct: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressVm {
    pub completed_today: u32,
    pub in_progress_today: u32,
    pub todo_today: u32,
    pub total_today: u32,
    pub comparison: ComparisonStats,
    pub weekly_total: u64,
    pub bars: Vec<BarVm>,
}

/// Share of the widest bar, as a percentage. Zero when nothing was completed.
#[must_use]
pub fn bar_width(completed: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    completed as f64 / max as f64 * 100.0
}

#[must_use]
pub fn map_progress(snapshot: &ProgressSnapshot) -> ProgressVm {
    let max = u64::from(snapshot.max_completed);
    ProgressVm {
        completed_today: snapshot.today.completed,
        in_progress_today: snapshot.today.in_progress,
        todo_today: snapshot.today.todo,
        total_today: snapshot.today.total,
        comparison: snapshot.comparison,
        weekly_total: snapshot.weekly_total,
        bars: snapshot
            .series
            .iter()
            .map(|point| BarVm {
                label: point.date_label.clone(),
                completed: u64::from(point.completed),
                width_pct: bar_width(u64::from(point.completed), max),
            })
            .collect(),
    }
}

/// Bars for the dashboard's activity strip, scaled to its own maximum.
#[must_use]
pub fn map_activity_bars(activity: &[ActivityPoint]) -> Vec<BarVm> {
    let max = activity.iter().map(|p| p.completed).max().unwrap_or(0);
    activity
        .iter()
        .map(|p| BarVm {
            label: p.weekday.clone(),
            completed: p.completed,
            width_pct: bar_width(p.completed, max),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_scale_to_max() {
        assert_eq!(bar_width(0, 0), 0.0);
        assert_eq!(bar_width(5, 5), 100.0);
        assert_eq!(bar_width(1, 4), 25.0);
    }

    #[test]
    fn empty_snapshot_has_no_bars() {
        let day = chrono::NaiveDate::from_ymd_opt(2026, 1, 22).unwrap();
        let vm = map_progress(&ProgressSnapshot::empty(day));
        assert!(vm.bars.is_empty());
        assert_eq!(vm.weekly_total, 0);
    }
}
