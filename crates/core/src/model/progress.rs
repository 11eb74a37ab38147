use chrono::NaiveDate;

/// Backend-computed counts of questions by status for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyProgress {
    pub date: NaiveDate,
    pub completed: u32,
    pub in_progress: u32,
    pub todo: u32,
    pub total: u32,
}

impl DailyProgress {
    /// A record with every count at zero.
    #[must_use]
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            completed: 0,
            in_progress: 0,
            todo: 0,
            total: 0,
        }
    }
}

/// Number of questions marked done on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCompletion {
    pub date: NaiveDate,
    pub completed: u64,
}

/// Backend aggregate over every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressStats {
    pub total: u32,
    pub completed: u32,
    pub in_progress: u32,
    pub todo: u32,
}
