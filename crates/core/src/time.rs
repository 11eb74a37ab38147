use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

/// A simple clock abstraction for deterministic time in services and tests.
///
/// Every timestamp in this crate is local wall-clock time without a zone,
/// so the clock hands out `NaiveDateTime` rather than UTC instants.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(NaiveDateTime),
}

impl Clock {
    /// Returns a clock that uses the current local time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given local timestamp.
    #[must_use]
    pub fn fixed(at: NaiveDateTime) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current local time according to the clock.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::Default => Local::now().naive_local(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Returns the current local calendar day.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Default`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

/// Inclusive range of calendar days ending at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// The trailing `days` calendar days including `end` itself.
    ///
    /// A `days` value of zero is treated as one.
    #[must_use]
    pub fn trailing(end: NaiveDate, days: u32) -> Self {
        let back = i64::from(days.max(1) - 1);
        Self {
            start: end - Duration::days(back),
            end,
        }
    }

    /// The seven days ending today, as the progress and dashboard views use.
    #[must_use]
    pub fn trailing_week(today: NaiveDate) -> Self {
        Self::trailing(today, 7)
    }

    /// Iterates every day in the window in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Deterministic local timestamp for tests and examples (2026-01-22T17:42:00).
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 22)
        .and_then(|d| d.and_hms_opt(17, 42, 0))
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_advances() {
        let mut clock = fixed_clock();
        clock.advance(Duration::minutes(30));
        assert_eq!(clock.now(), fixed_now() + Duration::minutes(30));
        assert_eq!(clock.today(), fixed_now().date());
    }

    #[test]
    fn trailing_week_spans_seven_days() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let window = DateWindow::trailing_week(today);
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2026, 2, 24).unwrap());
        assert_eq!(window.days().count(), 7);
        assert_eq!(window.days().last(), Some(today));
    }
}
