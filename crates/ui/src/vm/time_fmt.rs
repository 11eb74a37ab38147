use chrono::NaiveDateTime;
use track_core::model::LocalTimestamp;
use track_core::reminders::DueIn;

const ABSOLUTE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Wall-clock minute exactly as stored, e.g. `2026-01-22 17:42`.
#[must_use]
pub fn format_absolute(value: LocalTimestamp) -> String {
    value.value().format(ABSOLUTE_FORMAT).to_string()
}

/// Absolute time followed by how far away it is, when that is under a week.
///
/// `2026-01-22 18:12 (in 30 min)`, `... (in 2h)`, `... (in 3d)`, `... (Past)`.
#[must_use]
pub fn format_datetime(value: LocalTimestamp, now: NaiveDateTime) -> String {
    let absolute = format_absolute(value);
    match due_suffix(DueIn::classify(value, now)) {
        Some(suffix) => format!("{absolute} {suffix}"),
        None => absolute,
    }
}

#[must_use]
pub fn due_suffix(due: DueIn) -> Option<String> {
    match due {
        DueIn::Past => Some("(Past)".to_owned()),
        DueIn::Minutes(n) => Some(format!("(in {n} min)")),
        DueIn::Hours(n) => Some(format!("(in {n}h)")),
        DueIn::Days(n) => Some(format!("(in {n}d)")),
        DueIn::Later => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use track_core::time::fixed_now;

    fn at(delta: Duration) -> LocalTimestamp {
        LocalTimestamp::new(fixed_now() + delta)
    }

    #[test]
    fn labels_by_distance() {
        let now = fixed_now();
        assert!(format_datetime(at(Duration::minutes(30)), now).ends_with("(in 30 min)"));
        assert!(format_datetime(at(Duration::hours(2)), now).ends_with("(in 2h)"));
        assert!(format_datetime(at(Duration::days(3)), now).ends_with("(in 3d)"));
        assert!(format_datetime(at(-Duration::minutes(1)), now).ends_with("(Past)"));
        assert_eq!(
            format_datetime(at(Duration::days(10)), now),
            "2026-02-01 17:42"
        );
    }

    #[test]
    fn counts_truncate() {
        let now = fixed_now();
        let label = format_datetime(at(Duration::minutes(59) + Duration::seconds(59)), now);
        assert!(label.ends_with("(in 59 min)"));
        let label = format_datetime(at(Duration::hours(23) + Duration::minutes(59)), now);
        assert!(label.ends_with("(in 23h)"));
    }

    #[test]
    fn due_now_is_not_past() {
        let now = fixed_now();
        assert_eq!(
            format_datetime(LocalTimestamp::new(now), now),
            "2026-01-22 17:42 (in 0 min)"
        );
    }

    #[test]
    fn late_evening_renders_unshifted() {
        let stamp = LocalTimestamp::parse("2026-01-22T23:30:00").unwrap();
        assert_eq!(format_absolute(stamp), "2026-01-22 23:30");
    }
}
