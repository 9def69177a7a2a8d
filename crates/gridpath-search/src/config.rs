//! Search configuration and the cooperative-cancellation [`Context`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// A cooperative-cancellation token backed by an [`AtomicBool`].
///
/// Clones share the same flag, so a clone handed to a step callback or
/// another thread can stop a running search.
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// SearchConfig
// ---------------------------------------------------------------------------

/// Knobs for an [`AStar`](crate::AStar) run.
///
/// Both limits are checked at the top of every expansion; tripping either
/// ends the search with [`PathResult::Cancelled`](crate::PathResult::Cancelled).
#[derive(Clone, Debug, Default)]
pub struct SearchConfig {
    /// External stop flag.
    pub cancel: Option<Context>,
    /// Upper bound on the number of cells dequeued.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// No stop flag, no expansion ceiling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop when `ctx` is cancelled.
    pub fn with_cancel(mut self, ctx: Context) -> Self {
        self.cancel = Some(ctx);
        self
    }

    /// Stop after `n` cells have been dequeued.
    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }

    /// Whether a search that has dequeued `expanded` cells must stop now.
    pub(crate) fn should_stop(&self, expanded: usize) -> bool {
        self.cancel.as_ref().is_some_and(Context::is_done)
            || self.max_expansions.is_some_and(|max| expanded >= max)
    }
}
