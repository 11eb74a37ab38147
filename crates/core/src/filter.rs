//! Conjunctive filtering over an in-memory question list.
//!
//! Filters never reorder or mutate the source; the output keeps the
//! relative order of the input.

use crate::model::{Difficulty, Question, QuestionStatus};

/// Status control: everything, or one exact status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(QuestionStatus),
}

/// Difficulty control: everything, or one exact difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

/// The combined filter controls of the topic detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub status: StatusFilter,
    pub difficulty: DifficultyFilter,
    /// When set, keep only questions flagged important.
    pub important_only: bool,
    /// Case-insensitive match on title, substring match on the number.
    pub search: String,
}

impl QuestionFilter {
    #[must_use]
    pub fn with_status(mut self, status: QuestionStatus) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = DifficultyFilter::Only(difficulty);
        self
    }

    #[must_use]
    pub fn important_only(mut self) -> Self {
        self.important_only = true;
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// True when no control narrows the list.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.status == StatusFilter::All
            && self.difficulty == DifficultyFilter::All
            && !self.important_only
            && self.search.is_empty()
    }

    #[must_use]
    pub fn matches(&self, question: &Question) -> bool {
        self.matches_status(question)
            && self.matches_difficulty(question)
            && (!self.important_only || question.is_important)
            && matches_search(question, &self.search)
    }

    /// Apply every control to `questions`, preserving source order.
    #[must_use]
    pub fn apply<'a>(&self, questions: &'a [Question]) -> Vec<&'a Question> {
        questions.iter().filter(|q| self.matches(q)).collect()
    }

    /// Like [`apply`](Self::apply) but returns owned copies.
    #[must_use]
    pub fn apply_owned(&self, questions: &[Question]) -> Vec<Question> {
        questions
            .iter()
            .filter(|q| self.matches(q))
            .cloned()
            .collect()
    }

    fn matches_status(&self, question: &Question) -> bool {
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => question.status == status,
        }
    }

    fn matches_difficulty(&self, question: &Question) -> bool {
        match self.difficulty {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(difficulty) => question.difficulty == difficulty,
        }
    }
}

fn matches_search(question: &Question, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    question.leetcode_number.to_string().contains(search)
        || question.title.to_lowercase().contains(&search.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionId, TopicId};

    fn question(id: u64, number: u64, title: &str) -> Question {
        Question {
            id: QuestionId::new(id),
            topic_id: Some(TopicId::new(1)),
            topic_name: None,
            leetcode_number: number,
            title: title.to_string(),
            link: String::new(),
            difficulty: Difficulty::Easy,
            status: QuestionStatus::Todo,
            is_important: false,
            reminder: None,
        }
    }

    fn sample() -> Vec<Question> {
        let mut two_sum = question(1, 1, "Two Sum");
        two_sum.status = QuestionStatus::Done;
        two_sum.is_important = true;

        let mut three_sum = question(2, 15, "Three Sum");
        three_sum.status = QuestionStatus::Done;
        three_sum.difficulty = Difficulty::Medium;

        let mut remove = question(3, 27, "Remove Element");
        remove.is_important = true;

        let mut median = question(4, 4, "Median of Two Sorted Arrays");
        median.difficulty = Difficulty::Hard;
        median.status = QuestionStatus::InProgress;

        vec![two_sum, three_sum, remove, median]
    }

    fn ids(found: &[&Question]) -> Vec<u64> {
        found.iter().map(|q| q.id.value()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let questions = sample();
        let filter = QuestionFilter::default();
        assert!(filter.is_noop());
        assert_eq!(ids(&filter.apply(&questions)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let questions = sample();
        let found = QuestionFilter::default().with_search("two").apply(&questions);
        assert_eq!(ids(&found), vec![1, 4]);
        assert!(!found.iter().any(|q| q.title == "Three Sum"));
    }

    #[test]
    fn search_matches_number_substring() {
        let questions = sample();
        let found = QuestionFilter::default().with_search("1").apply(&questions);
        assert_eq!(ids(&found), vec![1, 2]);
    }

    #[test]
    fn controls_compose_conjunctively() {
        let questions = sample();
        let done = QuestionFilter::default().with_status(QuestionStatus::Done);
        let stepwise = QuestionFilter::default()
            .important_only()
            .apply_owned(&done.apply_owned(&questions));
        let combined = done.important_only().apply_owned(&questions);
        assert_eq!(stepwise, combined);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].title, "Two Sum");
    }

    #[test]
    fn filtering_is_idempotent() {
        let questions = sample();
        let filter = QuestionFilter::default()
            .with_difficulty(Difficulty::Easy)
            .with_search("e");
        let once = filter.apply_owned(&questions);
        let twice = filter.apply_owned(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_values_never_match_a_specific_filter() {
        let mut odd = question(9, 9, "Odd");
        odd.difficulty = Difficulty::Unknown;
        let questions = vec![odd];
        let found = QuestionFilter::default()
            .with_difficulty(Difficulty::Easy)
            .apply(&questions);
        assert!(found.is_empty());
    }
}
