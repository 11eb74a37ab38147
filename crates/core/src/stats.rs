//! Aggregation of daily progress records into chart series and comparisons.

use chrono::NaiveDate;

use crate::model::{DailyCompletion, DailyProgress, Question, QuestionStatus};

/// One bar of the per-day progress chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    /// Short month and day, e.g. `Jan 5`.
    pub date_label: String,
    pub completed: u32,
    pub in_progress: u32,
    pub todo: u32,
    pub total: u32,
}

/// Today versus yesterday versus the window average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComparisonStats {
    pub today: u32,
    pub yesterday: u32,
    pub week_avg: u32,
}

/// Short month and day label, e.g. `Jan 5`.
#[must_use]
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Abbreviated weekday label, e.g. `Mon`.
#[must_use]
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Map records to chart points, keeping the order the backend returned.
#[must_use]
pub fn chart_series(records: &[DailyProgress]) -> Vec<ChartPoint> {
    records
        .iter()
        .map(|day| ChartPoint {
            date: day.date,
            date_label: date_label(day.date),
            completed: day.completed,
            in_progress: day.in_progress,
            todo: day.todo,
            total: day.total,
        })
        .collect()
}

/// Compare the last point against the one before it and the series mean.
///
/// An empty series yields all zeros. The mean rounds half up.
#[must_use]
pub fn comparison(series: &[ChartPoint]) -> ComparisonStats {
    let Some(last) = series.last() else {
        return ComparisonStats::default();
    };
    let yesterday = series
        .len()
        .checked_sub(2)
        .and_then(|i| series.get(i))
        .map_or(0, |p| p.completed);

    ComparisonStats {
        today: last.completed,
        yesterday,
        week_avg: rounded_mean(series.iter().map(|p| u64::from(p.completed))),
    }
}

/// Sum of completed counts across the series.
#[must_use]
pub fn total_completed(series: &[ChartPoint]) -> u64 {
    series.iter().map(|p| u64::from(p.completed)).sum()
}

/// Largest completed count, used to scale bars.
#[must_use]
pub fn max_completed(series: &[ChartPoint]) -> u32 {
    series.iter().map(|p| p.completed).max().unwrap_or(0)
}

fn rounded_mean(values: impl ExactSizeIterator<Item = u64>) -> u32 {
    let count = values.len() as u64;
    if count == 0 {
        return 0;
    }
    let sum: u64 = values.sum();
    let mean = (sum + count / 2) / count;
    u32::try_from(mean).unwrap_or(u32::MAX)
}

/// Per-status counts over a question list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuestionTally {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub todo: usize,
}

impl QuestionTally {
    #[must_use]
    pub fn count(questions: &[Question]) -> Self {
        questions.iter().fold(
            Self {
                total: questions.len(),
                ..Self::default()
            },
            |mut tally, q| {
                match q.status {
                    QuestionStatus::Done => tally.completed += 1,
                    QuestionStatus::InProgress => tally.in_progress += 1,
                    QuestionStatus::Todo => tally.todo += 1,
                    QuestionStatus::Unknown => {}
                }
                tally
            },
        )
    }
}

/// One day of the dashboard's learning-activity strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityPoint {
    pub date: NaiveDate,
    pub weekday: String,
    pub completed: u64,
}

#[must_use]
pub fn activity_series(completions: &[DailyCompletion]) -> Vec<ActivityPoint> {
    completions
        .iter()
        .map(|c| ActivityPoint {
            date: c.date,
            weekday: weekday_label(c.date),
            completed: c.completed,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(offset: i64, completed: u32) -> DailyProgress {
        let base = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        DailyProgress {
            completed,
            ..DailyProgress::empty(base + Duration::days(offset))
        }
    }

    #[test]
    fn empty_series_compares_as_zero() {
        let series = chart_series(&[]);
        assert!(series.is_empty());
        assert_eq!(comparison(&series), ComparisonStats::default());
        assert_eq!(max_completed(&series), 0);
    }

    #[test]
    fn three_day_series() {
        let series = chart_series(&[day(0, 2), day(1, 5), day(2, 3)]);
        assert_eq!(
            comparison(&series),
            ComparisonStats {
                today: 3,
                yesterday: 5,
                week_avg: 3
            }
        );
        assert_eq!(total_completed(&series), 10);
        assert_eq!(max_completed(&series), 5);
    }

    #[test]
    fn single_day_has_no_yesterday() {
        let series = chart_series(&[day(0, 4)]);
        let stats = comparison(&series);
        assert_eq!(stats.today, 4);
        assert_eq!(stats.yesterday, 0);
        assert_eq!(stats.week_avg, 4);
    }

    #[test]
    fn mean_rounds_half_up() {
        let series = chart_series(&[day(0, 1), day(1, 2)]);
        assert_eq!(comparison(&series).week_avg, 2);
        let series = chart_series(&[day(0, 1), day(1, 0), day(2, 0)]);
        assert_eq!(comparison(&series).week_avg, 0);
    }

    #[test]
    fn series_keeps_backend_order_and_labels_days() {
        let series = chart_series(&[day(3, 1), day(0, 1)]);
        assert_eq!(series[0].date_label, "Jan 8");
        assert_eq!(series[1].date_label, "Jan 5");
    }

    #[test]
    fn activity_uses_weekday_names() {
        let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let points = activity_series(&[DailyCompletion {
            date: monday,
            completed: 2,
        }]);
        assert_eq!(points[0].weekday, "Mon");
    }
}
