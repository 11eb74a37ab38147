use chrono::Duration;
use services::{DashboardSnapshot, ProgressSnapshot, ReminderBoard};
use track_core::model::{
    DailyProgress, Difficulty, LocalTimestamp, Question, QuestionId, QuestionStatus, Reminder,
    ReminderId,
};
use track_core::reminders::ReminderMode;
use track_core::stats::{self, ActivityPoint};
use track_core::time::{DateWindow, fixed_now};
use ui::ViewState;
use ui::views::{render_dashboard, render_progress, render_reminders};
use ui::vm::{map_dashboard, map_progress, map_reminder_cards};

fn question(id: u64, title: &str, at: Option<LocalTimestamp>) -> Question {
    Question {
        id: QuestionId::new(id),
        topic_id: None,
        topic_name: Some("Arrays".into()),
        leetcode_number: id,
        title: title.into(),
        link: String::new(),
        difficulty: Difficulty::Medium,
        status: QuestionStatus::Todo,
        is_important: false,
        reminder: at,
    }
}

fn reminder(id: u64, delta: Duration) -> Reminder {
    let at = Some(LocalTimestamp::new(fixed_now() + delta));
    Reminder {
        id: ReminderId::new(id),
        question: question(id, "Two Sum", at),
        reminder_at: at,
    }
}

#[test]
fn today_mode_lists_only_same_day_reminders() {
    let board = ReminderBoard {
        all: vec![
            reminder(1, Duration::minutes(30)),
            reminder(2, Duration::days(3)),
            Reminder {
                reminder_at: None,
                ..reminder(3, Duration::zero())
            },
        ],
        upcoming: Vec::new(),
    };
    let now = fixed_now();
    let cards = map_reminder_cards(&board.select(ReminderMode::Today, now), now);
    let text = render_reminders(ReminderMode::Today, &ViewState::Ready(cards));

    assert!(text.starts_with("== Reminders (TODAY) =="));
    assert!(text.contains("2026-01-22 18:12 (in 30 min)"));
    assert!(!text.contains("(in 3d)"));
    assert!(text.contains("Topic: Arrays"));
}

#[test]
fn progress_view_shows_comparison() {
    let today = fixed_now().date();
    let history: Vec<DailyProgress> = [2, 5, 3]
        .into_iter()
        .enumerate()
        .map(|(i, completed)| DailyProgress {
            completed,
            ..DailyProgress::empty(today - Duration::days(2 - i as i64))
        })
        .collect();
    let series = stats::chart_series(&history);
    let snapshot = ProgressSnapshot {
        today: history[2],
        window: DateWindow::trailing_week(today),
        comparison: stats::comparison(&series),
        weekly_total: stats::total_completed(&series),
        max_completed: stats::max_completed(&series),
        series,
    };

    let text = render_progress(&ViewState::Ready(map_progress(&snapshot)));
    assert!(text.contains("Today 3 | Yesterday 5 (down) | Week avg 3"));
    assert!(text.contains("This week: 10 completed"));
    // The widest bar spans all twenty cells.
    assert!(text.contains(&"#".repeat(20)));
}

#[test]
fn failed_dashboard_renders_zeroes() {
    let state = ViewState::from_result(
        "dashboard",
        Err::<DashboardSnapshot, _>("request failed: connection refused"),
        DashboardSnapshot::default,
    );
    let text = render_dashboard(&state.map(|snap| map_dashboard(snap, false, fixed_now())));
    assert!(text.contains("! request failed: connection refused"));
    assert!(text.contains("Questions: 0"));
    assert!(text.contains("no activity data"));
}

#[test]
fn dashboard_activity_uses_weekday_labels() {
    let snapshot = DashboardSnapshot {
        activity: vec![ActivityPoint {
            date: fixed_now().date(),
            weekday: "Thu".into(),
            completed: 2,
        }],
        ..DashboardSnapshot::default()
    };
    let text = render_dashboard(&ViewState::Ready(map_dashboard(&snapshot, false, fixed_now())));
    assert!(text.contains("Thu"));
    assert!(text.contains("nothing completed yet"));
}
