use crate::views::{Page, ViewState, bar};
use crate::vm::DashboardVm;

#[must_use]
pub fn render_dashboard(state: &ViewState<DashboardVm>) -> String {
    Page::titled("Dashboard").state(state, |page, vm| {
        page.line(format!(
            "Questions: {}  Done: {}  In progress: {}  To do: {}  Topics: {}",
            vm.total, vm.completed, vm.in_progress, vm.todo, vm.topics
        ));
        page.blank();

        page.line("Learning activity (last 7 days)");
        if vm.activity.is_empty() {
            page.line("  no activity data");
        }
        for day in &vm.activity {
            page.line(format!("  {:<4}{:>3} {}", day.label, day.completed, bar(day.width_pct)));
        }
        page.blank();

        page.line("Recently completed");
        if vm.recent.is_empty() {
            page.line("  nothing completed yet");
        }
        for row in &vm.recent {
            let topic = row.topic.as_deref().map(|t| format!("  [{t}]")).unwrap_or_default();
            page.line(format!("  {} {}{topic}", row.number, row.title));
        }
        if vm.hidden_recent > 0 {
            page.line(format!("  ... {} more", vm.hidden_recent));
        }
    })
}
