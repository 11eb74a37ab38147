//! Plain-text rendering of view-models.

mod dashboard;
mod progress;
mod reminders;
mod state;
mod topics;

pub use dashboard::render_dashboard;
pub use progress::render_progress;
pub use reminders::render_reminders;
pub use state::ViewState;
pub use topics::{render_question, render_topic_detail, render_topics};

const BAR_CELLS: f64 = 20.0;

/// Line-oriented text buffer for one screen.
pub(crate) struct Page {
    out: String,
}

impl Page {
    pub(crate) fn titled(title: &str) -> Self {
        let mut page = Self { out: String::new() };
        page.line(format!("== {title} =="));
        page
    }

    pub(crate) fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Render the state header, then `body` for whatever data there is.
    pub(crate) fn state<T>(
        mut self,
        state: &ViewState<T>,
        body: impl FnOnce(&mut Self, &T),
    ) -> String {
        if state.is_loading() {
            self.line("Loading...");
        }
        if let Some(message) = state.error() {
            self.line(format!("! {message}"));
        }
        if let Some(data) = state.data() {
            body(&mut self, data);
        }
        self.out
    }
}

pub(crate) fn bar(width_pct: f64) -> String {
    let cells = (width_pct / 100.0 * BAR_CELLS).round().clamp(0.0, BAR_CELLS) as usize;
    "#".repeat(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_are_scaled_to_twenty_cells() {
        assert_eq!(bar(0.0), "");
        assert_eq!(bar(100.0).len(), 20);
        assert_eq!(bar(50.0).len(), 10);
    }

    #[test]
    fn failed_state_renders_message_and_fallback() {
        let state: ViewState<Vec<&str>> = ViewState::Failed {
            fallback: Vec::new(),
            message: "request failed: connection refused".into(),
        };
        let text = Page::titled("Topics").state(&state, |page, items| {
            page.line(format!("{} topics", items.len()));
        });
        assert_eq!(
            text,
            "== Topics ==\n! request failed: connection refused\n0 topics\n"
        );
    }
}
