use track_core::reminders::ReminderMode;

use crate::views::{Page, ViewState};
use crate::vm::ReminderCardVm;

#[must_use]
pub fn render_reminders(mode: ReminderMode, state: &ViewState<Vec<ReminderCardVm>>) -> String {
    Page::titled(&format!("Reminders ({mode})")).state(state, |page, cards| {
        if cards.is_empty() {
            page.line("No reminders.");
        }
        for card in cards {
            let marker = if card.is_past { "-" } else { "*" };
            page.line(format!("{marker} {}", card.label));
            let topic = card
                .topic
                .as_deref()
                .map(|t| format!("  Topic: {t}"))
                .unwrap_or_default();
            page.line(format!(
                "    #{} {} [{}/{}]{topic}",
                card.number,
                card.title,
                card.difficulty_tone.as_str(),
                card.status_tone.as_str()
            ));
            if let Some(link) = &card.link {
                page.line(format!("    {link}"));
            }
        }
    })
}
