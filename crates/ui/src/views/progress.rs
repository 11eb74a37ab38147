use std::cmp::Ordering;

use crate::views::{Page, ViewState, bar};
use crate::vm::ProgressVm;

#[must_use]
pub fn render_progress(state: &ViewState<ProgressVm>) -> String {
    Page::titled("Daily Progress").state(state, |page, vm| {
        page.line(format!(
            "Today: {} done, {} in progress, {} to do ({} total)",
            vm.completed_today, vm.in_progress_today, vm.todo_today, vm.total_today
        ));
        let c = vm.comparison;
        let trend = match c.today.cmp(&c.yesterday) {
            Ordering::Greater => "up",
            Ordering::Less => "down",
            Ordering::Equal => "level",
        };
        page.line(format!(
            "Today {} | Yesterday {} ({trend}) | Week avg {}",
            c.today, c.yesterday, c.week_avg
        ));
        page.blank();
        page.line(format!("This week: {} completed", vm.weekly_total));
        if vm.bars.is_empty() {
            page.line("  no history");
        }
        for day in &vm.bars {
            page.line(format!("  {:<7}{:>3} {}", day.label, day.completed, bar(day.width_pct)));
        }
    })
}
