use std::sync::Arc;

use chrono::NaiveDate;

use track_api::{ApiError, ProgressApi};
use track_core::Clock;
use track_core::model::DailyProgress;
use track_core::stats::{self, ChartPoint, ComparisonStats};
use track_core::time::DateWindow;

use crate::error::ServiceError;

/// Everything the daily progress view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub today: DailyProgress,
    pub window: DateWindow,
    pub series: Vec<ChartPoint>,
    pub comparison: ComparisonStats,
    pub weekly_total: u64,
    pub max_completed: u32,
}

impl ProgressSnapshot {
    /// Zero counts for the week ending `today`.
    #[must_use]
    pub fn empty(today: NaiveDate) -> Self {
        Self::build(DailyProgress::empty(today), DateWindow::trailing_week(today), &[])
    }

    fn build(today: DailyProgress, window: DateWindow, history: &[DailyProgress]) -> Self {
        let series = stats::chart_series(history);
        Self {
            today,
            window,
            comparison: stats::comparison(&series),
            weekly_total: stats::total_completed(&series),
            max_completed: stats::max_completed(&series),
            series,
        }
    }
}

/// Tolerate a history/completions body of the wrong shape as "no data".
pub(crate) fn empty_on_decode<T>(
    result: Result<Vec<T>, ApiError>,
    what: &'static str,
) -> Result<Vec<T>, ApiError> {
    match result {
        Err(err) if err.is_decode() => {
            tracing::warn!(error = %err, what, "malformed series treated as empty");
            Ok(Vec::new())
        }
        other => other,
    }
}

#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    progress: Arc<dyn ProgressApi>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, progress: Arc<dyn ProgressApi>) -> Self {
        Self { clock, progress }
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Load today's record and the trailing week of history.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if today's record cannot be loaded or the
    /// history request fails outright. A history body that is not an array
    /// yields an empty series instead.
    pub async fn load(&self) -> Result<ProgressSnapshot, ServiceError> {
        let window = DateWindow::trailing_week(self.clock.today());
        let (today, history) = tokio::try_join!(self.progress.today_progress(), async {
            empty_on_decode(
                self.progress.progress_history(window.start, window.end).await,
                "progress history",
            )
        })?;
        Ok(ProgressSnapshot::build(today, window, &history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_is_all_zero() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 22).unwrap();
        let snap = ProgressSnapshot::empty(day);
        assert!(snap.series.is_empty());
        assert_eq!(snap.comparison, ComparisonStats::default());
        assert_eq!(snap.window.start, NaiveDate::from_ymd_opt(2026, 1, 16).unwrap());
    }

    #[test]
    fn only_decode_failures_are_tolerated() {
        let decoded: Result<Vec<u8>, _> =
            empty_on_decode(Err(ApiError::decode("/progress/history", "expected array")), "h");
        assert_eq!(decoded, Ok(Vec::new()));

        let transport: Result<Vec<u8>, _> =
            empty_on_decode(Err(ApiError::transport("refused")), "h");
        assert!(transport.is_err());
    }
}
