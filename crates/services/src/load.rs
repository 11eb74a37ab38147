use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued load of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Guards a view against stale load results.
///
/// Every load takes a ticket before it starts. When it finishes, its
/// snapshot is accepted only if no newer ticket has been issued since, so
/// the most recently *started* load wins regardless of completion order.
///
/// The view loaders in this crate are one-shot fetches and keep no
/// per-view state. A caller that can reload a view while an earlier load
/// is still in flight holds one sequencer per view and passes each result
/// through [`accept`](Self::accept) before rendering it.
#[derive(Debug, Clone, Default)]
pub struct LoadSequencer {
    view: &'static str,
    latest: Arc<AtomicU64>,
}

impl LoadSequencer {
    #[must_use]
    pub fn new(view: &'static str) -> Self {
        Self {
            view,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Issue a ticket that supersedes every earlier one.
    pub fn issue(&self) -> LoadTicket {
        LoadTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Hand back `snapshot` if `ticket` is still the latest, otherwise drop it.
    pub fn accept<T>(&self, ticket: LoadTicket, snapshot: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(snapshot)
        } else {
            tracing::debug!(
                view = self.view,
                ticket = ticket.0,
                latest = self.latest.load(Ordering::SeqCst),
                "discarding stale load result"
            );
            None
        }
    }
}
