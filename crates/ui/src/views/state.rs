use std::fmt::Display;

/// Load state of one view.
///
/// A failed load still carries a default snapshot so the view can render
/// empty lists and zero counts instead of nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Failed { fallback: T, message: String },
}

impl<T> ViewState<T> {
    /// Settle a finished load, logging and substituting `fallback` on error.
    pub fn from_result<E: Display>(
        view: &'static str,
        result: Result<T, E>,
        fallback: impl FnOnce() -> T,
    ) -> Self {
        match result {
            Ok(data) => ViewState::Ready(data),
            Err(err) => {
                tracing::error!(view, error = %err, "view load failed");
                ViewState::Failed {
                    fallback: fallback(),
                    message: err.to_string(),
                }
            }
        }
    }

    /// Project the carried snapshot into a view-model, keeping the state.
    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> ViewState<U> {
        match self {
            ViewState::Loading => ViewState::Loading,
            ViewState::Ready(data) => ViewState::Ready(f(data)),
            ViewState::Failed { fallback, message } => ViewState::Failed {
                fallback: f(fallback),
                message: message.clone(),
            },
        }
    }

    /// Whatever should be rendered right now, if anything.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Loading => None,
            ViewState::Ready(data) | ViewState::Failed { fallback: data, .. } => Some(data),
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}
