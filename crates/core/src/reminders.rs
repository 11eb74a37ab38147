//! Reminder selection and due-time classification.

use std::fmt;

use chrono::NaiveDateTime;

use crate::model::{LocalTimestamp, Reminder};

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;

/// Which reminders the reminders view lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReminderMode {
    /// The backend's pre-filtered upcoming set, as received.
    #[default]
    Upcoming,
    /// Reminders falling on the current local calendar day.
    Today,
    /// Every reminder, as received.
    All,
}

impl ReminderMode {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Some(Self::Upcoming),
            "today" => Some(Self::Today),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderMode::Upcoming => "UPCOMING",
            ReminderMode::Today => "TODAY",
            ReminderMode::All => "ALL",
        }
    }
}

impl fmt::Display for ReminderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the reminders to display for `mode`.
///
/// `upcoming` is trusted as-is; this function never recomputes it.
#[must_use]
pub fn select_reminders<'a>(
    mode: ReminderMode,
    all: &'a [Reminder],
    upcoming: &'a [Reminder],
    now: NaiveDateTime,
) -> Vec<&'a Reminder> {
    match mode {
        ReminderMode::Upcoming => upcoming.iter().collect(),
        ReminderMode::All => all.iter().collect(),
        ReminderMode::Today => all
            .iter()
            .filter(|r| r.reminder_at.is_some_and(|at| is_same_day(at, now)))
            .collect(),
    }
}

/// Calendar-day comparison, not a rolling 24-hour window.
#[must_use]
pub fn is_same_day(at: LocalTimestamp, now: NaiveDateTime) -> bool {
    at.date() == now.date()
}

/// Strict past: a reminder due exactly now is not past.
#[must_use]
pub fn is_past(at: LocalTimestamp, now: NaiveDateTime) -> bool {
    at.value() < now
}

/// How far away a reminder is, bucketed for labelling.
///
/// Counts are truncated toward zero in their unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueIn {
    Past,
    Minutes(i64),
    Hours(i64),
    Days(i64),
    /// A week or more away.
    Later,
}

impl DueIn {
    /// Classify `at` relative to `now`, checking thresholds in order.
    #[must_use]
    pub fn classify(at: LocalTimestamp, now: NaiveDateTime) -> Self {
        let diff_ms = (at.value() - now).num_milliseconds();
        if diff_ms < 0 {
            Self::Past
        } else if diff_ms < HOUR_MS {
            Self::Minutes(diff_ms / MINUTE_MS)
        } else if diff_ms < DAY_MS {
            Self::Hours(diff_ms / HOUR_MS)
        } else if diff_ms < WEEK_MS {
            Self::Days(diff_ms / DAY_MS)
        } else {
            Self::Later
        }
    }
}
