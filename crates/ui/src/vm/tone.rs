use track_core::model::{Difficulty, QuestionStatus};

/// Badge colour family. Unknown labels fall back to `Gray`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Red,
    Blue,
    Gray,
}

impl Tone {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Green => "green",
            Tone::Yellow => "yellow",
            Tone::Red => "red",
            Tone::Blue => "blue",
            Tone::Gray => "gray",
        }
    }
}

#[must_use]
pub fn difficulty_tone(difficulty: Difficulty) -> Tone {
    match difficulty {
        Difficulty::Easy => Tone::Green,
        Difficulty::Medium => Tone::Yellow,
        Difficulty::Hard => Tone::Red,
        Difficulty::Unknown => Tone::Gray,
    }
}

#[must_use]
pub fn status_tone(status: QuestionStatus) -> Tone {
    match status {
        QuestionStatus::Done => Tone::Green,
        QuestionStatus::InProgress => Tone::Blue,
        QuestionStatus::Todo | QuestionStatus::Unknown => Tone::Gray,
    }
}

/// Human label for a status badge.
#[must_use]
pub fn status_label(status: QuestionStatus) -> &'static str {
    match status {
        QuestionStatus::Todo => "To Do",
        QuestionStatus::InProgress => "In Progress",
        QuestionStatus::Done => "Done",
        QuestionStatus::Unknown => "Unknown",
    }
}
