use services::TopicDetail;

use crate::views::{Page, ViewState};
use crate::vm::{QuestionRowVm, TopicCardVm};

#[must_use]
pub fn render_topics(state: &ViewState<Vec<TopicCardVm>>) -> String {
    Page::titled("Topics").state(state, |page, cards| {
        if cards.is_empty() {
            page.line("No topics yet.");
        }
        for card in cards {
            page.line(format!("[{}] {} ({})", card.id, card.name, card.count_label));
            if let Some(notes) = &card.notes_preview {
                page.line(format!("    {notes}"));
            }
        }
    })
}

/// Topic header plus the already filtered question rows.
#[must_use]
pub fn render_topic_detail(state: &ViewState<(TopicDetail, Vec<QuestionRowVm>)>) -> String {
    Page::titled("Topic").state(state, |page, (detail, rows)| {
        page.line(format!("{} (#{})", detail.topic.name, detail.topic.id));
        if detail.topic.has_notes() {
            page.line("Notes:");
            for line in detail.topic.notes.lines() {
                page.line(format!("  {line}"));
            }
        }
        page.blank();
        page.line(format!(
            "Showing {} of {} questions",
            rows.len(),
            detail.questions.len()
        ));
        for row in rows {
            page.line(render_question(row));
        }
    })
}

/// One-line summary of a question row.
#[must_use]
pub fn render_question(row: &QuestionRowVm) -> String {
    let star = if row.important { "!" } else { " " };
    let mut line = format!(
        "{star} {:<6} {} [{}:{}] [{}:{}]",
        row.number,
        row.title,
        row.difficulty,
        row.difficulty_tone.as_str(),
        row.status,
        row.status_tone.as_str()
    );
    if let Some(reminder) = &row.reminder {
        line.push_str(&format!("  reminder {reminder}"));
    }
    line
}
